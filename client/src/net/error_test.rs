use super::*;

#[test]
fn from_status_maps_401_to_unauthorized_without_reading_body() {
    let err = ApiError::from_status(401, r#"{"message":"token expired"}"#);
    assert_eq!(err, ApiError::Unauthorized);
    assert!(err.is_unauthorized());
    assert_eq!(err.server_message(), None);
}

#[test]
fn from_status_keeps_json_message_for_4xx() {
    let err = ApiError::from_status(409, r#"{"message":"role is still assigned to users"}"#);
    assert_eq!(
        err,
        ApiError::Rejected { status: 409, message: Some("role is still assigned to users".to_owned()) }
    );
}

#[test]
fn from_status_classifies_5xx_as_server_fault() {
    let err = ApiError::from_status(503, "");
    assert_eq!(err, ApiError::Server { status: 503, message: None });
}

#[test]
fn parse_error_message_accepts_error_key_and_plain_text() {
    assert_eq!(parse_error_message(r#"{"error":"bad id"}"#), Some("bad id".to_owned()));
    assert_eq!(parse_error_message("Invalid request body\n"), Some("Invalid request body".to_owned()));
}

#[test]
fn parse_error_message_ignores_html_and_blank_bodies() {
    assert_eq!(parse_error_message("<html><body>502</body></html>"), None);
    assert_eq!(parse_error_message("   "), None);
    assert_eq!(parse_error_message(r#"{"message":""}"#), None);
    assert_eq!(parse_error_message(r#"{"data":[]}"#), None);
}

#[test]
fn user_message_prefers_server_text_then_fallback() {
    let rejected = ApiError::Rejected { status: 400, message: Some("Email already exists".to_owned()) };
    assert_eq!(rejected.user_message("Failed to save user"), "Email already exists");

    let bare = ApiError::Rejected { status: 400, message: None };
    assert_eq!(bare.user_message("Failed to save user"), "Failed to save user");

    let decode = ApiError::Decode("expected value".to_owned());
    assert_eq!(decode.user_message("Failed to fetch roles"), "Failed to fetch roles");
}

#[test]
fn user_message_for_network_failure_is_generic() {
    let err = ApiError::Network("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.user_message("Failed to fetch users"), CANNOT_REACH_SERVER_MESSAGE);
}
