//! Editable drafts for each entity form and their validation rules.

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use super::form::{FormMode, Validate, ValidationError};
use crate::net::types::{
    ChangePasswordRequest, Config, ConfigPayload, DataType, Role, RolePayload, User, UserPayload, Workspace,
    WorkspacePayload,
};

pub const MIN_PASSWORD_LEN: usize = 6;

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed.to_owned())
}

// =============================================================================
// USER
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct UserDraft {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub role_id: i64,
    pub is_active: bool,
    pub password: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            email: String::new(),
            role: "user".to_owned(),
            role_id: 0,
            is_active: true,
            password: String::new(),
        }
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            role_id: user.role_id,
            is_active: user.is_active,
            password: String::new(),
        }
    }
}

impl UserDraft {
    /// Select a role by id, keeping the denormalized role name in step.
    pub fn select_role(&mut self, roles: &[Role], role_id: i64) {
        self.role_id = role_id;
        if let Some(role) = roles.iter().find(|r| r.id == role_id) {
            self.role.clone_from(&role.name);
        }
    }
}

impl Validate for UserDraft {
    type Payload = UserPayload;

    fn validate(&self, mode: FormMode) -> Result<UserPayload, ValidationError> {
        let name = required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?;
        let password = if self.password.is_empty() {
            if mode.is_add() {
                return Err(ValidationError::PasswordRequiredOnCreate);
            }
            None
        } else {
            Some(self.password.clone())
        };
        Ok(UserPayload {
            id: self.id,
            name,
            email,
            role: self.role.clone(),
            role_id: self.role_id,
            is_active: self.is_active,
            password,
        })
    }
}

// =============================================================================
// ROLE
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct RoleDraft {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for RoleDraft {
    fn default() -> Self {
        Self { id: 0, name: String::new(), description: String::new(), is_active: true }
    }
}

impl From<&Role> for RoleDraft {
    fn from(role: &Role) -> Self {
        Self { id: role.id, name: role.name.clone(), description: role.description.clone(), is_active: role.is_active }
    }
}

impl Validate for RoleDraft {
    type Payload = RolePayload;

    fn validate(&self, _mode: FormMode) -> Result<RolePayload, ValidationError> {
        Ok(RolePayload {
            id: self.id,
            name: required(&self.name, "Role Name")?,
            description: self.description.trim().to_owned(),
            is_active: self.is_active,
        })
    }
}

// =============================================================================
// CONFIG
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigDraft {
    pub id: i64,
    pub config_key: String,
    pub data_type: DataType,
    pub main_value: String,
    pub alternative_value: String,
    pub description: String,
    pub is_active: bool,
    pub change_reason: String,
}

impl Default for ConfigDraft {
    fn default() -> Self {
        Self {
            id: 0,
            config_key: String::new(),
            data_type: DataType::String,
            main_value: String::new(),
            alternative_value: String::new(),
            description: String::new(),
            is_active: true,
            change_reason: String::new(),
        }
    }
}

impl From<&Config> for ConfigDraft {
    fn from(config: &Config) -> Self {
        Self {
            id: config.id,
            config_key: config.config_key.clone(),
            data_type: config.data_type,
            main_value: config.main_value.clone(),
            alternative_value: config.alternative_value.clone(),
            description: config.description.clone(),
            is_active: config.is_active,
            change_reason: String::new(),
        }
    }
}

impl ConfigDraft {
    /// Key and type are fixed once the entry exists.
    #[must_use]
    pub fn identity_editable(mode: FormMode) -> bool {
        mode.is_add()
    }
}

/// Check that `raw` is a well-formed value of `data_type`.
///
/// # Errors
///
/// Returns [`ValidationError::Invalid`] naming the field and expected shape.
pub fn check_value(field: &str, data_type: DataType, raw: &str) -> Result<(), ValidationError> {
    let raw = raw.trim();
    let ok = match data_type {
        DataType::String => true,
        DataType::Integer => raw.parse::<i64>().is_ok(),
        DataType::Float => raw.parse::<f64>().is_ok_and(f64::is_finite),
        DataType::Boolean => matches!(raw, "true" | "false"),
        DataType::Json => serde_json::from_str::<serde_json::Value>(raw).is_ok(),
    };
    if ok {
        return Ok(());
    }
    let expected = match data_type {
        DataType::String => "text",
        DataType::Integer => "an integer",
        DataType::Float => "a number",
        DataType::Boolean => "true or false",
        DataType::Json => "valid JSON",
    };
    Err(ValidationError::Invalid(format!("{field} must be {expected}")))
}

impl Validate for ConfigDraft {
    type Payload = ConfigPayload;

    fn validate(&self, _mode: FormMode) -> Result<ConfigPayload, ValidationError> {
        let config_key = required(&self.config_key, "Config Key")?;
        check_value("Main Value", self.data_type, &self.main_value)?;
        if !self.alternative_value.trim().is_empty() {
            check_value("Alternative Value", self.data_type, &self.alternative_value)?;
        }
        Ok(ConfigPayload {
            id: self.id,
            config_key,
            data_type: self.data_type,
            main_value: self.main_value.trim().to_owned(),
            alternative_value: self.alternative_value.trim().to_owned(),
            description: self.description.trim().to_owned(),
            is_active: self.is_active,
            change_reason: self.change_reason.trim().to_owned(),
        })
    }
}

// =============================================================================
// WORKSPACE
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct WorkspaceDraft {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: String,
    pub status: String,
    pub contact_email: String,
    pub address: String,
}

impl Default for WorkspaceDraft {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            code: String::new(),
            description: String::new(),
            status: "active".to_owned(),
            contact_email: String::new(),
            address: String::new(),
        }
    }
}

impl From<&Workspace> for WorkspaceDraft {
    fn from(ws: &Workspace) -> Self {
        Self {
            id: ws.id,
            name: ws.name.clone(),
            code: ws.code.clone(),
            description: ws.description.clone(),
            status: ws.status.clone(),
            contact_email: ws.contact_email.clone(),
            address: ws.address.clone(),
        }
    }
}

impl Validate for WorkspaceDraft {
    type Payload = WorkspacePayload;

    fn validate(&self, _mode: FormMode) -> Result<WorkspacePayload, ValidationError> {
        if self.name.trim().is_empty() || self.code.trim().is_empty() {
            return Err(ValidationError::Invalid("Name and Code are required".to_owned()));
        }
        Ok(WorkspacePayload {
            id: self.id,
            name: self.name.trim().to_owned(),
            code: self.code.trim().to_owned(),
            description: self.description.trim().to_owned(),
            status: self.status.clone(),
            contact_email: self.contact_email.trim().to_owned(),
            address: self.address.trim().to_owned(),
        })
    }
}

// =============================================================================
// PASSWORDS
// =============================================================================

/// Self-service password change from the header menu.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PasswordChangeDraft {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl Validate for PasswordChangeDraft {
    type Payload = ChangePasswordRequest;

    fn validate(&self, _mode: FormMode) -> Result<ChangePasswordRequest, ValidationError> {
        if self.old_password.is_empty() || self.new_password.is_empty() || self.confirm_password.is_empty() {
            return Err(ValidationError::IncompleteFields);
        }
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::TooShort(MIN_PASSWORD_LEN));
        }
        Ok(ChangePasswordRequest {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

/// Administrator reset of another user's password: a full user update
/// carrying the new password.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetPasswordDraft {
    pub user: User,
    pub password: String,
}

impl Validate for ResetPasswordDraft {
    type Payload = UserPayload;

    fn validate(&self, _mode: FormMode) -> Result<UserPayload, ValidationError> {
        if self.password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(UserPayload {
            id: self.user.id,
            name: self.user.name.clone(),
            email: self.user.email.clone(),
            role: self.user.role.clone(),
            role_id: self.user.role_id,
            is_active: self.user.is_active,
            password: Some(self.password.clone()),
        })
    }
}
