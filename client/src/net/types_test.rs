use super::*;

#[test]
fn page_from_body_reads_envelope() {
    let body = r#"{"data":[{"id":1,"name":"admin","userCount":3}],"total":11,"page":1,"limit":10}"#;
    let page = Page::<Role>::from_body(body).unwrap();
    assert_eq!(page.total, 11);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name, "admin");
    assert_eq!(page.data[0].user_count, 3);
}

#[test]
fn page_from_body_accepts_bare_array() {
    let body = r#"[{"id":1,"name":"admin"},{"id":2,"name":"user"}]"#;
    let page = Page::<Role>::from_body(body).unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.data[1].name, "user");
}

#[test]
fn page_from_body_defaults_missing_fields() {
    let page = Page::<Role>::from_body("{}").unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn page_from_body_rejects_scalar() {
    let err = Page::<Role>::from_body("42").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn user_deserializes_camel_case_with_nulls() {
    let body = r#"{
        "id": 7,
        "email": "ops@example.com",
        "name": "Ops",
        "role": "admin",
        "roleId": 2,
        "isActive": true,
        "profilePicture": "",
        "avatarType": "",
        "lastLogin": "2025-01-25T08:30:00Z",
        "lastLogout": null,
        "failedLoginAttempts": 2,
        "isLoggedIn": true
    }"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.role_id, 2);
    assert_eq!(user.failed_login_attempts, 2);
    assert_eq!(user.last_login.as_deref(), Some("2025-01-25T08:30:00Z"));
    assert_eq!(user.last_logout, None);
    assert_eq!(user.created_by, None);
}

#[test]
fn user_payload_omits_blank_password() {
    let payload = UserPayload {
        id: 3,
        name: "A".to_owned(),
        email: "a@example.com".to_owned(),
        role: "user".to_owned(),
        role_id: 1,
        is_active: true,
        password: None,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["roleId"], 1);
    assert_eq!(json["isActive"], true);
}

#[test]
fn data_type_round_trips_lowercase() {
    assert_eq!(serde_json::to_string(&DataType::Boolean).unwrap(), "\"boolean\"");
    let parsed: DataType = serde_json::from_str("\"json\"").unwrap();
    assert_eq!(parsed, DataType::Json);
    assert_eq!(DataType::parse("float"), Some(DataType::Float));
    assert_eq!(DataType::parse("decimal"), None);
}

#[test]
fn login_response_parses_rejection() {
    let body = r#"{"message":"Invalid email or password","success":false}"#;
    let resp: LoginResponse = serde_json::from_str(body).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("Invalid email or password"));
    assert_eq!(resp.token, None);
    assert_eq!(resp.user, None);
}

#[test]
fn change_password_request_uses_camel_case() {
    let req = ChangePasswordRequest { old_password: "old".to_owned(), new_password: "new-secret".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "oldPassword": "old", "newPassword": "new-secret" })
    );
}

#[test]
fn commit_list_parses() {
    let body = r#"[{"hash":"a1b2c3d4e5","author":"dev","date":"2025-01-20","message":"init"}]"#;
    let commits: Vec<Commit> = serde_json::from_str(body).unwrap();
    assert_eq!(commits[0].author, "dev");
}

#[test]
fn user_history_reads_backend_snapshot_rows() {
    let body = r#"[{
        "id": 3,
        "userId": 12,
        "email": "ana@example.com",
        "name": "Ana",
        "role": "admin",
        "roleId": 1,
        "isActive": true,
        "action": "UPDATE",
        "changedBy": "root@example.com",
        "changedAt": "2025-01-25T08:30:00Z"
    }]"#;
    let page = Page::<UserHistory>::from_body(body).unwrap();
    let row = &page.data[0];
    assert_eq!(row.user_id, 12);
    assert_eq!(row.changed_by, "root@example.com");
    assert_eq!(row.changed_at.as_deref(), Some("2025-01-25T08:30:00Z"));
    assert_eq!(row.summary(), "Ana (ana@example.com) - admin");
    assert!(!row.is_delete());
}

#[test]
fn user_history_delete_action_is_case_insensitive() {
    let row = UserHistory { action: "delete".to_owned(), ..UserHistory::default() };
    assert!(row.is_delete());
}

#[test]
fn summary_report_tolerates_null_sections() {
    let report: SummaryReport = serde_json::from_str(r#"{"summary":null,"detail":null}"#).unwrap();
    assert!(report.summary.is_empty());
    assert!(report.detail.is_empty());
}

#[test]
fn summary_report_reads_rows() {
    let body = r#"{
        "summary": [{"finishDate": "2025-01-10", "totalWeight": 3.5}],
        "detail": [
            {"finishDate": "2025-01-10", "weight": 3.5, "taskName": "Total", "sheetName": ""},
            {"finishDate": "2025-01-10", "weight": 3.5, "taskName": "Cutting", "sheetName": "Line A"}
        ]
    }"#;
    let report: SummaryReport = serde_json::from_str(body).unwrap();
    assert_eq!(report.summary[0].total_weight, 3.5);
    assert!(report.detail[0].is_total());
    assert_eq!(report.detail[1].sheet_name, "Line A");
}
