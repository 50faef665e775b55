use super::*;

fn logged_in() -> SessionState {
    let mut state = SessionState::default();
    state.restore(Some("tok"), Some(User { name: "Admin".to_owned(), ..User::default() }));
    state
}

#[test]
fn restore_with_token_is_optimistically_logged_in() {
    let state = logged_in();
    assert!(state.restored);
    assert_eq!(state.phase, SessionPhase::LoggedIn);
    assert_eq!(state.display_name(), "Admin");
}

#[test]
fn restore_without_token_is_logged_out() {
    let mut state = SessionState::default();
    state.restore(None, Some(User::default()));
    assert_eq!(state.phase, SessionPhase::LoggedOut);
    assert!(state.user.is_none());
    state.restore(Some(""), None);
    assert_eq!(state.phase, SessionPhase::LoggedOut);
}

#[test]
fn login_lifecycle() {
    let mut state = SessionState::default();
    assert!(state.begin_login());
    assert!(!state.begin_login());
    state.login_failed("Invalid email or password");
    assert_eq!(state.phase, SessionPhase::LoggedOut);
    assert_eq!(state.notice.as_deref(), Some("Invalid email or password"));

    assert!(state.begin_login());
    assert_eq!(state.notice, None);
    state.login_succeeded(None);
    assert!(state.is_logged_in());
}

#[test]
fn logout_lifecycle() {
    let mut state = logged_in();
    assert!(state.begin_logout());
    assert!(!state.begin_logout());
    state.logout_finished();
    assert_eq!(state.phase, SessionPhase::LoggedOut);
    assert!(state.user.is_none());
}

#[test]
fn first_401_expires_once() {
    let mut state = logged_in();
    assert!(state.expire());
    assert!(!state.expire());
    assert_eq!(state.phase, SessionPhase::LoggedOut);
}

#[test]
fn blank_credentials_are_rejected_locally() {
    assert_eq!(validate_login("", "pw"), Err("Please fill in all fields"));
    assert_eq!(validate_login("a@b.c", ""), Err("Please fill in all fields"));
    assert_eq!(validate_login("a@b.c", "pw"), Ok(()));
}

#[test]
fn login_failures_are_distinguished() {
    assert_eq!(login_failure_message(&ApiError::Network("x".to_owned())), "Network error. Please try again.");
    assert_eq!(
        login_failure_message(&ApiError::Server { status: 500, message: None }),
        "Cannot reach the database. Please contact the administrator."
    );
    assert_eq!(
        login_failure_message(&ApiError::Rejected { status: 401, message: Some("Account is disabled".to_owned()) }),
        "Account is disabled"
    );
    assert_eq!(login_failure_message(&ApiError::Rejected { status: 401, message: None }), "Login failed");
}
