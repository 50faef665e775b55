//! Auth-session state for the signed-in operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the root gate (login page vs dashboard shell). The token itself is
//! persisted by `util::storage` and read per request through
//! `net::api::TokenSource`; this struct only tracks the lifecycle.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ApiError;
use crate::net::types::User;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";
pub const LOGIN_NETWORK_MESSAGE: &str = "Network error. Please try again.";
pub const LOGIN_DATABASE_MESSAGE: &str = "Cannot reach the database. Please contact the administrator.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const EMPTY_FIELDS_MESSAGE: &str = "Please fill in all fields";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    LoggedOut,
    LoggingIn,
    LoggedIn,
    LoggingOut,
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub user: Option<User>,
    /// Error shown on the login form.
    pub notice: Option<String>,
    /// False until persisted state has been read in the browser. SSR and the
    /// first hydrate pass render a loader so markup matches.
    pub restored: bool,
}

impl SessionState {
    /// Adopt persisted state: a token means logged in, optimistically.
    pub fn restore(&mut self, token: Option<&str>, user: Option<User>) {
        self.restored = true;
        if token.is_some_and(|t| !t.is_empty()) {
            self.phase = SessionPhase::LoggedIn;
            self.user = user;
        } else {
            self.phase = SessionPhase::LoggedOut;
            self.user = None;
        }
    }

    /// Returns false when a login is already running or a session exists.
    pub fn begin_login(&mut self) -> bool {
        if self.phase != SessionPhase::LoggedOut {
            return false;
        }
        self.phase = SessionPhase::LoggingIn;
        self.notice = None;
        true
    }

    pub fn login_succeeded(&mut self, user: Option<User>) {
        self.phase = SessionPhase::LoggedIn;
        self.user = user;
        self.notice = None;
    }

    pub fn login_failed(&mut self, message: impl Into<String>) {
        self.phase = SessionPhase::LoggedOut;
        self.notice = Some(message.into());
    }

    pub fn begin_logout(&mut self) -> bool {
        if self.phase != SessionPhase::LoggedIn {
            return false;
        }
        self.phase = SessionPhase::LoggingOut;
        true
    }

    pub fn logout_finished(&mut self) {
        self.phase = SessionPhase::LoggedOut;
        self.user = None;
    }

    /// Force logout after a 401. Returns true only on the transition, so a
    /// burst of concurrent 401s yields a single notice.
    pub fn expire(&mut self) -> bool {
        match self.phase {
            SessionPhase::LoggedIn | SessionPhase::LoggingOut => {
                self.phase = SessionPhase::LoggedOut;
                self.user = None;
                true
            }
            SessionPhase::LoggedOut | SessionPhase::LoggingIn => false,
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self.phase, SessionPhase::LoggedIn | SessionPhase::LoggingOut)
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| if u.name.is_empty() { u.email.clone() } else { u.name.clone() })
            .unwrap_or_default()
    }
}

/// Reject blank credentials before any request is made.
///
/// # Errors
///
/// Returns [`EMPTY_FIELDS_MESSAGE`] when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(EMPTY_FIELDS_MESSAGE);
    }
    Ok(())
}

/// Message for a failed `/login`, distinguishing transport, server fault,
/// and rejected credentials.
#[must_use]
pub fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => LOGIN_NETWORK_MESSAGE.to_owned(),
        ApiError::Server { .. } => LOGIN_DATABASE_MESSAGE.to_owned(),
        ApiError::Rejected { message, .. } => message.clone().unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_owned()),
        ApiError::Unauthorized | ApiError::Decode(_) => LOGIN_FAILED_MESSAGE.to_owned(),
    }
}
