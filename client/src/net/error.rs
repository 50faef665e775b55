//! Failure taxonomy for REST calls against the admin backend.
//!
//! DESIGN
//! ======
//! Every request resolves to `Result<_, ApiError>`. Call sites decide how a
//! failure is surfaced; the enum only classifies what went wrong so 401
//! handling, server-message passthrough, and transport failures stay uniform.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when a transport-level failure prevents reaching the backend.
pub const CANNOT_REACH_SERVER_MESSAGE: &str = "Error connecting to server";

/// A failed REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the bearer token (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,
    /// A 4xx response other than 401, with the server's message when present.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// A 5xx response.
    #[error("server fault with status {status}")]
    Server { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response from its status code and raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let message = parse_error_message(body);
        if status >= 500 {
            Self::Server { status, message }
        } else {
            Self::Rejected { status, message }
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// The message the backend attached to the failure, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } | Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the operator: the server message verbatim when present,
    /// the transport message for network failures, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(message) = self.server_message() {
            return message.to_owned();
        }
        match self {
            Self::Network(_) => CANNOT_REACH_SERVER_MESSAGE.to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

/// Extract a human-readable message from an error body.
///
/// Accepts `{"message": ".."}` / `{"error": ".."}` JSON and plain-text bodies
/// (the backend writes `http.Error` text for some handlers). HTML error pages
/// and blank bodies yield `None`.
#[must_use]
pub fn parse_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
    }
    if trimmed.starts_with('<') {
        return None;
    }
    Some(trimmed.to_owned())
}
