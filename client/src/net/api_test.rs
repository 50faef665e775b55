use super::*;

struct FixedToken(Option<&'static str>);

impl TokenSource for FixedToken {
    fn token(&self) -> Option<String> {
        self.0.map(str::to_owned)
    }
}

fn client(token: Option<&'static str>) -> ApiClient {
    ApiClient::new("http://api.test/", Arc::new(FixedToken(token)))
}

#[test]
fn authorization_reads_token_at_call_time() {
    assert_eq!(client(Some("t0k")).authorization().as_deref(), Some("Bearer t0k"));
    assert_eq!(client(None).authorization(), None);
}

#[test]
fn url_joins_base_and_path() {
    assert_eq!(client(None).url("/uploads/a.png"), "http://api.test/uploads/a.png");
}

#[test]
fn classify_response_passes_2xx_body_through() {
    assert_eq!(classify_response(200, "[]".to_owned()), Ok("[]".to_owned()));
    assert_eq!(classify_response(204, String::new()), Ok(String::new()));
}

#[test]
fn classify_response_reports_401_as_unauthorized() {
    assert_eq!(classify_response(401, r#"{"data":[]}"#.to_owned()), Err(ApiError::Unauthorized));
}

#[test]
fn classify_response_keeps_server_message() {
    let err = classify_response(400, "Cannot delete role with assigned users".to_owned()).unwrap_err();
    assert_eq!(err.server_message(), Some("Cannot delete role with assigned users"));
}

#[test]
fn decode_reports_shape_mismatch() {
    assert!(matches!(decode::<User>("[1,2]"), Err(ApiError::Decode(_))));
    assert_eq!(decode::<User>(r#"{"id":5}"#).unwrap().id, 5);
}

#[test]
fn login_success_requires_token() {
    let body = r#"{"success":true,"message":"ok","token":"abc","user":{"id":1,"name":"Admin","email":"a@x.io","role":"admin"}}"#;
    let resp = interpret_login_response(200, body).unwrap();
    assert_eq!(resp.token.as_deref(), Some("abc"));
    assert_eq!(resp.user.unwrap().role, "admin");

    let tokenless = interpret_login_response(200, r#"{"success":true}"#).unwrap_err();
    assert_eq!(tokenless, ApiError::Rejected { status: 200, message: None });
}

#[test]
fn login_bad_credentials_surface_server_message() {
    let err = interpret_login_response(401, r#"{"success":false,"message":"Invalid email or password"}"#).unwrap_err();
    assert_eq!(err.server_message(), Some("Invalid email or password"));
    assert!(!err.is_unauthorized());
}

#[test]
fn login_5xx_is_server_fault() {
    let err = interpret_login_response(500, "database is down").unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 500, .. }));
}

#[test]
fn login_plain_text_rejection_is_kept() {
    let err = interpret_login_response(400, "Invalid request body").unwrap_err();
    assert_eq!(err.server_message(), Some("Invalid request body"));
}
