use super::*;

fn user_draft(password: &str) -> UserDraft {
    UserDraft {
        id: 3,
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: password.to_owned(),
        ..UserDraft::default()
    }
}

#[test]
fn new_user_requires_password() {
    assert_eq!(user_draft("").validate(FormMode::Add), Err(ValidationError::PasswordRequiredOnCreate));
    assert_eq!(
        ValidationError::PasswordRequiredOnCreate.to_string(),
        "Password is required for new users"
    );
}

#[test]
fn edited_user_omits_blank_password() {
    let payload = user_draft("").validate(FormMode::Edit).unwrap();
    assert_eq!(payload.password, None);
    let payload = user_draft("s3cret!").validate(FormMode::Edit).unwrap();
    assert_eq!(payload.password.as_deref(), Some("s3cret!"));
}

#[test]
fn user_name_and_email_are_required() {
    let mut draft = user_draft("pw1234");
    draft.name = "  ".to_owned();
    assert_eq!(draft.validate(FormMode::Add).unwrap_err().to_string(), "Name is required");
    let mut draft = user_draft("pw1234");
    draft.email.clear();
    assert_eq!(draft.validate(FormMode::Add).unwrap_err().to_string(), "Email is required");
}

#[test]
fn select_role_syncs_role_name() {
    let roles = vec![
        Role { id: 1, name: "admin".to_owned(), ..Role::default() },
        Role { id: 2, name: "auditor".to_owned(), ..Role::default() },
    ];
    let mut draft = UserDraft::default();
    draft.select_role(&roles, 2);
    assert_eq!((draft.role_id, draft.role.as_str()), (2, "auditor"));
}

#[test]
fn empty_role_name_is_rejected() {
    let err = RoleDraft::default().validate(FormMode::Add).unwrap_err();
    assert_eq!(err.to_string(), "Role Name is required");
}

#[test]
fn config_value_must_match_type() {
    let mut draft = ConfigDraft { config_key: "pagination_limit".to_owned(), ..ConfigDraft::default() };
    draft.data_type = DataType::Integer;
    draft.main_value = "ten".to_owned();
    assert_eq!(
        draft.validate(FormMode::Add).unwrap_err().to_string(),
        "Main Value must be an integer"
    );
    draft.main_value = " 10 ".to_owned();
    assert_eq!(draft.validate(FormMode::Add).unwrap().main_value, "10");
}

#[test]
fn check_value_covers_each_type() {
    assert!(check_value("v", DataType::Boolean, "true").is_ok());
    assert!(check_value("v", DataType::Boolean, "yes").is_err());
    assert!(check_value("v", DataType::Float, "2.5").is_ok());
    assert!(check_value("v", DataType::Float, "NaN").is_err());
    assert!(check_value("v", DataType::Json, r#"{"a":[1]}"#).is_ok());
    assert!(check_value("v", DataType::Json, "{a:1}").is_err());
    assert!(check_value("v", DataType::String, "").is_ok());
}

#[test]
fn config_key_is_required() {
    let err = ConfigDraft::default().validate(FormMode::Add).unwrap_err();
    assert_eq!(err, ValidationError::Required { field: "Config Key" });
}

#[test]
fn workspace_needs_name_and_code() {
    let draft = WorkspaceDraft { name: "Acme".to_owned(), ..WorkspaceDraft::default() };
    assert_eq!(draft.validate(FormMode::Add).unwrap_err().to_string(), "Name and Code are required");
    let draft = WorkspaceDraft { name: "Acme".to_owned(), code: "AC01".to_owned(), ..WorkspaceDraft::default() };
    assert_eq!(draft.validate(FormMode::Add).unwrap().status, "active");
}

#[test]
fn password_change_rules_in_order() {
    let mut draft = PasswordChangeDraft::default();
    assert_eq!(draft.validate(FormMode::Edit), Err(ValidationError::IncompleteFields));

    draft.old_password = "old-one".to_owned();
    draft.new_password = "abcdef".to_owned();
    draft.confirm_password = "abcdeg".to_owned();
    assert_eq!(
        draft.validate(FormMode::Edit).unwrap_err().to_string(),
        "New passwords do not match"
    );

    draft.new_password = "abc".to_owned();
    draft.confirm_password = "abc".to_owned();
    assert_eq!(draft.validate(FormMode::Edit), Err(ValidationError::TooShort(6)));

    draft.new_password = "abcdef".to_owned();
    draft.confirm_password = "abcdef".to_owned();
    assert_eq!(draft.validate(FormMode::Edit).unwrap().new_password, "abcdef");
}

#[test]
fn reset_password_sends_full_user() {
    let user = User { id: 9, name: "Bo".to_owned(), email: "bo@example.com".to_owned(), role_id: 2, is_active: true, ..User::default() };
    let empty = ResetPasswordDraft { user: user.clone(), password: String::new() };
    assert_eq!(empty.validate(FormMode::Edit).unwrap_err().to_string(), "Password cannot be empty");

    let draft = ResetPasswordDraft { user, password: "n3w-pass".to_owned() };
    let payload = draft.validate(FormMode::Edit).unwrap();
    assert_eq!(payload.id, 9);
    assert_eq!(payload.role_id, 2);
    assert_eq!(payload.password.as_deref(), Some("n3w-pass"));
}

#[test]
fn config_key_and_type_are_editable_only_when_adding() {
    assert!(ConfigDraft::identity_editable(FormMode::Add));
    assert!(!ConfigDraft::identity_editable(FormMode::Edit));
}
