use super::*;
use crate::net::types::{Config, DataType};

fn body_json(req: &ApiRequest) -> serde_json::Value {
    serde_json::from_str(req.body.as_deref().unwrap()).unwrap()
}

#[test]
fn endpoint_url_joins_without_double_slash() {
    assert_eq!(endpoint_url("http://api.test/", "/api/users"), "http://api.test/api/users");
    assert_eq!(endpoint_url("http://api.test", "login"), "http://api.test/login");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn login_posts_credentials() {
    let req = login("admin@example.com", "password123");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/login");
    assert_eq!(body_json(&req), serde_json::json!({ "email": "admin@example.com", "password": "password123" }));
}

#[test]
fn list_carries_page_limit_search_and_filters() {
    let mut query = ListQuery::new(10);
    query.page = 3;
    query.search = "ali".to_owned();
    query.filters.insert("roleId".to_owned(), "2".to_owned());
    let req = list(USERS_PATH, &query);
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/api/users");
    assert_eq!(
        req.query,
        vec![
            ("page".to_owned(), "3".to_owned()),
            ("limit".to_owned(), "10".to_owned()),
            ("search".to_owned(), "ali".to_owned()),
            ("roleId".to_owned(), "2".to_owned()),
        ]
    );
    assert!(req.body.is_none());
}

#[test]
fn delete_user_uses_id_query() {
    let req = delete_user(12);
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.path, "/api/users");
    assert_eq!(req.query, vec![("id".to_owned(), "12".to_owned())]);
}

#[test]
fn role_mutations_address_role_by_id() {
    let payload = RolePayload { id: 4, name: "auditor".to_owned(), description: String::new(), is_active: true };
    assert_eq!(update_role(&payload).path, "/api/roles/4");
    assert_eq!(update_role(&payload).method, Method::Put);
    assert_eq!(delete_role(4).path, "/api/roles/4");
    assert_eq!(create_role(&payload).path, "/api/roles");
}

#[test]
fn users_in_role_requests_lookup_page() {
    let req = users_in_role(5);
    assert_eq!(
        req.query,
        vec![
            ("page".to_owned(), "1".to_owned()),
            ("limit".to_owned(), "100".to_owned()),
            ("roleId".to_owned(), "5".to_owned()),
        ]
    );
}

#[test]
fn config_history_path_includes_id() {
    assert_eq!(config_history(9).path, "/api/configs/9/history");
}

#[test]
fn update_config_sends_type_and_reason() {
    let payload = ConfigPayload {
        id: 2,
        config_key: "pagination_limit".to_owned(),
        data_type: DataType::Integer,
        main_value: "25".to_owned(),
        alternative_value: String::new(),
        description: String::new(),
        is_active: true,
        change_reason: "bigger pages".to_owned(),
    };
    let req = update_config(&payload);
    assert_eq!(req.path, "/api/configs/2");
    let json = body_json(&req);
    assert_eq!(json["dataType"], "integer");
    assert_eq!(json["changeReason"], "bigger pages");
}

#[test]
fn kick_and_reset_counter_bodies() {
    assert_eq!(body_json(&kick_user("a@example.com")), serde_json::json!({ "email": "a@example.com" }));
    assert_eq!(body_json(&reset_failed_counter(3)), serde_json::json!({ "id": 3 }));
}

#[test]
fn profile_activity_pages_by_offset() {
    let req = profile_activity(10, 20);
    assert_eq!(req.path, "/api/profile/activity");
    assert_eq!(
        req.query,
        vec![("limit".to_owned(), "10".to_owned()), ("offset".to_owned(), "20".to_owned())]
    );
}

#[test]
fn logout_has_no_body() {
    let req = logout();
    assert_eq!(req.method.as_str(), "POST");
    assert!(req.body.is_none());
}

#[test]
fn config_type_filter_is_sent_as_type() {
    let mut state = crate::state::listing::ListState::<Config>::new(10);
    state.set_filter(CONFIG_TYPE_FILTER, "json");
    let req = list(CONFIGS_PATH, &state.query);
    assert!(req.query.contains(&("type".to_owned(), "json".to_owned())));
    assert!(!req.query.iter().any(|(k, _)| k == "dataType"));
}

#[test]
fn export_keeps_filters_and_drops_paging() {
    let mut query = ListQuery::new(10);
    query.page = 4;
    query.search = "login".to_owned();
    query.filters.insert("startDate".to_owned(), "2025-01-01".to_owned());
    let req = export_activity_logs(&query);
    assert_eq!(req.path, "/api/activity-logs/export");
    assert_eq!(
        req.query,
        vec![("search".to_owned(), "login".to_owned()), ("startDate".to_owned(), "2025-01-01".to_owned())]
    );
}
