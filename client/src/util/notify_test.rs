use super::*;

fn logged_in() -> SessionState {
    let mut session = SessionState::default();
    session.restore(Some("tok"), None);
    session
}

#[test]
fn concurrent_401s_post_exactly_one_notice() {
    let mut session = logged_in();
    let mut toasts = ToastState::default();

    let first = dispatch_failure(&mut session, &mut toasts, &ApiError::Unauthorized, "Failed to fetch users", 0.0);
    let second = dispatch_failure(&mut session, &mut toasts, &ApiError::Unauthorized, "Failed to fetch roles", 1.0);

    assert!(matches!(first, FailureOutcome::SessionExpired(_)));
    assert_eq!(second, FailureOutcome::Suppressed);
    assert!(!session.is_logged_in());
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].message, "Session expired. Please login again.");
}

#[test]
fn rejection_posts_server_message() {
    let mut session = logged_in();
    let mut toasts = ToastState::default();
    let err = ApiError::Rejected { status: 409, message: Some("Role is still in use".to_owned()) };
    let outcome = dispatch_failure(&mut session, &mut toasts, &err, "Failed to delete role", 0.0);
    assert!(matches!(outcome, FailureOutcome::Reported(_)));
    assert!(session.is_logged_in());
    assert_eq!(toasts.toasts[0].message, "Role is still in use");
    assert_eq!(toasts.toasts[0].kind, ToastKind::Error);
}

#[test]
fn bare_failure_uses_fallback() {
    let mut session = logged_in();
    let mut toasts = ToastState::default();
    let err = ApiError::Server { status: 500, message: None };
    dispatch_failure(&mut session, &mut toasts, &err, "Failed to fetch roles", 0.0);
    assert_eq!(toasts.toasts[0].message, "Failed to fetch roles");
}

#[test]
fn info_posts_an_info_toast_that_expires_on_its_own() {
    let owner = leptos::reactive::owner::Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        let notifier = Notifier::new(toasts, RwSignal::new(logged_in()));
        notifier.info("Preparing export...");
        toasts.with_untracked(|t| {
            assert_eq!(t.toasts.len(), 1);
            assert_eq!(t.toasts[0].message, "Preparing export...");
            assert_eq!(t.toasts[0].kind, ToastKind::Info);
        });
        toasts.update(|t| t.expire(f64::MAX));
        assert!(toasts.with_untracked(|t| t.toasts.is_empty()));
    });
}
