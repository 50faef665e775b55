//! Request descriptors for every backend endpoint the dashboard calls.
//!
//! DESIGN
//! ======
//! Building a request is pure (method, path, query, JSON body) so routes and
//! payload shapes are unit-testable without a browser. `api::ApiClient`
//! executes these descriptors.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use serde::Serialize;

use super::types::{
    ChangePasswordRequest, ConfigPayload, KickRequest, LoginRequest, ResetCounterRequest, RolePayload, UserPayload,
    WorkspacePayload,
};
use crate::state::listing::ListQuery;

pub const USERS_PATH: &str = "/api/users";
pub const ACTIVE_USERS_PATH: &str = "/api/users/active";
pub const ROLES_PATH: &str = "/api/roles";
pub const CONFIGS_PATH: &str = "/api/configs";
pub const ACTIVITY_LOGS_PATH: &str = "/api/activity-logs";
pub const WORKSPACES_PATH: &str = "/api/workspaces";
pub const TRANSACTIONS_PATH: &str = "/api/transactions";

/// Query key the config list filters `dataType` by.
pub const CONFIG_TYPE_FILTER: &str = "type";

/// Page size used when a view needs a whole reference list (filter dropdowns).
pub const LOOKUP_LIMIT: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully described REST call, relative to the configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    #[must_use]
    pub fn json<B: Serialize>(mut self, body: &B) -> Self {
        // Payload types are plain structs of strings/numbers; serialization cannot fail.
        self.body = serde_json::to_string(body).ok();
        self
    }
}

/// Join the configured base URL and an endpoint path.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `Authorization` header value for a session token.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// AUTH
// =============================================================================

#[must_use]
pub fn login(email: &str, password: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, "/login").json(&LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[must_use]
pub fn logout() -> ApiRequest {
    ApiRequest::new(Method::Post, "/logout")
}

#[must_use]
pub fn change_password(body: &ChangePasswordRequest) -> ApiRequest {
    ApiRequest::new(Method::Post, "/change-password").json(body)
}

// =============================================================================
// LISTS
// =============================================================================

/// Paginated GET for any list endpoint, carrying page/limit/search/filters.
#[must_use]
pub fn list(path: &str, query: &ListQuery) -> ApiRequest {
    let mut req = ApiRequest::get(path);
    req.query = query.query_pairs();
    req
}

/// Full reference list (e.g. all users for a filter dropdown).
#[must_use]
pub fn lookup(path: &str) -> ApiRequest {
    ApiRequest::get(path).query("page", 1).query("limit", LOOKUP_LIMIT)
}

// =============================================================================
// USERS
// =============================================================================

#[must_use]
pub fn create_user(body: &UserPayload) -> ApiRequest {
    ApiRequest::new(Method::Post, USERS_PATH).json(body)
}

#[must_use]
pub fn update_user(body: &UserPayload) -> ApiRequest {
    ApiRequest::new(Method::Put, USERS_PATH).json(body)
}

#[must_use]
pub fn delete_user(id: i64) -> ApiRequest {
    ApiRequest::new(Method::Delete, USERS_PATH).query("id", id)
}

#[must_use]
pub fn users_in_role(role_id: i64) -> ApiRequest {
    lookup(USERS_PATH).query("roleId", role_id)
}

#[must_use]
pub fn user_history(id: i64) -> ApiRequest {
    ApiRequest::get("/api/users/history").query("id", id)
}

#[must_use]
pub fn kick_user(email: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, "/api/users/kick").json(&KickRequest { email: email.to_owned() })
}

#[must_use]
pub fn reset_failed_counter(id: i64) -> ApiRequest {
    ApiRequest::new(Method::Post, "/api/users/reset-counter").json(&ResetCounterRequest { id })
}

// =============================================================================
// ROLES
// =============================================================================

#[must_use]
pub fn create_role(body: &RolePayload) -> ApiRequest {
    ApiRequest::new(Method::Post, ROLES_PATH).json(body)
}

#[must_use]
pub fn update_role(body: &RolePayload) -> ApiRequest {
    ApiRequest::new(Method::Put, format!("{ROLES_PATH}/{}", body.id)).json(body)
}

#[must_use]
pub fn delete_role(id: i64) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("{ROLES_PATH}/{id}"))
}

// =============================================================================
// CONFIGS
// =============================================================================

#[must_use]
pub fn create_config(body: &ConfigPayload) -> ApiRequest {
    ApiRequest::new(Method::Post, CONFIGS_PATH).json(body)
}

#[must_use]
pub fn update_config(body: &ConfigPayload) -> ApiRequest {
    ApiRequest::new(Method::Put, format!("{CONFIGS_PATH}/{}", body.id)).json(body)
}

#[must_use]
pub fn delete_config(id: i64) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("{CONFIGS_PATH}/{id}"))
}

#[must_use]
pub fn config_history(id: i64) -> ApiRequest {
    ApiRequest::get(format!("{CONFIGS_PATH}/{id}/history"))
}

/// Config lookup narrowed to a single key.
#[must_use]
pub fn config_by_key(key: &str) -> ApiRequest {
    lookup(CONFIGS_PATH).query("search", key)
}

// =============================================================================
// LOGS / PROFILE
// =============================================================================

/// CSV export of the activity report: its search and filters, no paging.
#[must_use]
pub fn export_activity_logs(query: &ListQuery) -> ApiRequest {
    let mut req = ApiRequest::get(format!("{ACTIVITY_LOGS_PATH}/export"));
    req.query = query.query_pairs().into_iter().filter(|(k, _)| k != "page" && k != "limit").collect();
    req
}

#[must_use]
pub fn change_log() -> ApiRequest {
    ApiRequest::get("/api/changelog")
}

#[must_use]
pub fn profile() -> ApiRequest {
    ApiRequest::get("/api/profile")
}

#[must_use]
pub fn profile_activity(limit: u32, offset: u32) -> ApiRequest {
    ApiRequest::get("/api/profile/activity").query("limit", limit).query("offset", offset)
}

#[must_use]
pub fn remove_avatar() -> ApiRequest {
    ApiRequest::new(Method::Post, "/api/avatar/remove")
}

pub const UPLOAD_AVATAR_PATH: &str = "/upload";
pub const UPLOAD_SUMMARY_PATH: &str = "/api/upload-summary";

// =============================================================================
// WORKSPACES
// =============================================================================

#[must_use]
pub fn create_workspace(body: &WorkspacePayload) -> ApiRequest {
    ApiRequest::new(Method::Post, WORKSPACES_PATH).json(body)
}

#[must_use]
pub fn update_workspace(body: &WorkspacePayload) -> ApiRequest {
    ApiRequest::new(Method::Put, format!("{WORKSPACES_PATH}/{}", body.id)).json(body)
}

#[must_use]
pub fn delete_workspace(id: i64) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("{WORKSPACES_PATH}/{id}"))
}
