//! Wire DTOs for the admin REST backend.
//!
//! DESIGN
//! ======
//! These are transport shapes, not domain objects: the client never owns
//! authoritative state. Every struct tolerates missing fields
//! (`#[serde(default)]`) so a backend that omits audit columns or nulls a
//! string still deserializes into a renderable row.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

// =============================================================================
// PAGINATION ENVELOPE
// =============================================================================

/// One page of a paginated list endpoint: `{ data: [...], total }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { data: Vec::new(), total: 0 }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageBody<T> {
    Page(Page<T>),
    Bare(Vec<T>),
}

impl<T: DeserializeOwned> Page<T> {
    /// Parse a list body. Older endpoints return a bare array; that is treated
    /// as a single page whose total is its length.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body is neither shape.
    pub fn from_body(body: &str) -> Result<Self, ApiError> {
        match serde_json::from_str::<PageBody<T>>(body) {
            Ok(PageBody::Page(page)) => Ok(page),
            Ok(PageBody::Bare(data)) => {
                let total = data.len() as u64;
                Ok(Self { data, total })
            }
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /login`, returned for both success and rejection.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub success: bool,
    pub message: Option<String>,
    pub token: Option<String>,
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

// =============================================================================
// USERS
// =============================================================================

/// A user row as returned by `/api/users`, `/api/users/active`, and `/api/profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Role name joined from the roles table.
    pub role: String,
    pub role_id: i64,
    pub is_active: bool,
    pub failed_login_attempts: u32,
    pub last_login: Option<String>,
    pub last_logout: Option<String>,
    /// Uploaded picture file name under `/uploads`, empty when none.
    pub profile_picture: String,
    pub avatar_type: String,
    pub is_logged_in: bool,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

/// Create/update body for `/api/users`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub role_id: i64,
    pub is_active: bool,
    /// Omitted on edit when the operator left the field blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KickRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResetCounterRequest {
    pub id: i64,
}

// =============================================================================
// ROLES
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub user_count: u64,
    pub created_at: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePayload {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

// =============================================================================
// SYSTEM CONFIG
// =============================================================================

/// Declared type of a config entry's values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    String,
    Integer,
    Float,
    Boolean,
    Json,
}

impl DataType {
    pub const ALL: [Self; 5] = [Self::String, Self::Integer, Self::Float, Self::Boolean, Self::Json];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Json => "json",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub id: i64,
    pub config_key: String,
    pub data_type: DataType,
    pub main_value: String,
    pub alternative_value: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub created_by: Option<String>,
    pub updated_at: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPayload {
    pub id: i64,
    pub config_key: String,
    pub data_type: DataType,
    pub main_value: String,
    pub alternative_value: String,
    pub description: String,
    pub is_active: bool,
    pub change_reason: String,
}

/// One recorded value change of a config entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigHistory {
    pub id: i64,
    pub config_id: i64,
    pub old_value: String,
    pub new_value: String,
    pub change_reason: String,
    pub changed_at: Option<String>,
    pub changed_by: String,
    pub ip_address: String,
}

// =============================================================================
// LOGS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: i64,
    pub user_id: i64,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub action: String,
    pub details: String,
    pub created_at: Option<String>,
}

/// Snapshot of a user row taken when it was updated or deleted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserHistory {
    pub id: i64,
    pub user_id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
    pub role_id: i64,
    pub is_active: bool,
    /// `UPDATE` or `DELETE`.
    pub action: String,
    pub changed_by: String,
    pub changed_at: Option<String>,
}

impl UserHistory {
    /// `name (email) - role` as recorded in the snapshot.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} ({}) - {}", self.name, self.email, self.role)
    }

    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.action.eq_ignore_ascii_case("DELETE")
    }
}

/// A commit entry from `/api/changelog`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    pub hash: String,
    pub message: String,
    pub date: String,
    pub author: String,
}

// =============================================================================
// SUMMARY REPORT
// =============================================================================

/// Weight total for one finish date.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummaryRow {
    pub finish_date: String,
    pub total_weight: f64,
}

/// One task line; each date group opens with a `Total` line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetailRow {
    pub finish_date: String,
    pub weight: f64,
    pub task_name: String,
    pub sheet_name: String,
}

impl DetailRow {
    #[must_use]
    pub fn is_total(&self) -> bool {
        self.task_name == "Total"
    }
}

/// `POST /api/upload-summary` response. Empty sheets come back as `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryReport {
    #[serde(deserialize_with = "null_as_default")]
    pub summary: Vec<SummaryRow>,
    #[serde(deserialize_with = "null_as_default")]
    pub detail: Vec<DetailRow>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// WORKSPACES / TRANSACTIONS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Workspace {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: String,
    /// `active` or `inactive`.
    pub status: String,
    pub contact_email: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspacePayload {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: String,
    pub status: String,
    pub contact_email: String,
    pub address: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub workspace_id: i64,
    pub date: String,
    pub ref_no: String,
    pub amount: f64,
    /// `completed`, `pending`, `failed`, or `cancelled`.
    pub status: String,
    pub description: String,
    pub created_by: String,
}
