//! Backend base URL resolution.
//!
//! The host renders `<meta name="admin-api-base-url">` into the shell; the
//! hydrated client reads it back. SSR reads the same environment variable
//! the host does.

#[cfg(test)]
#[path = "client_config_test.rs"]
mod client_config_test;

pub const API_BASE_META: &str = "admin-api-base-url";
pub const API_BASE_ENV: &str = "ADMIN_API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Trim whitespace and trailing slashes; blank input yields `None`.
#[must_use]
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Resolve the backend base URL for the current environment.
#[must_use]
pub fn api_base_url() -> String {
    #[cfg(feature = "hydrate")]
    let configured = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));
    #[cfg(not(feature = "hydrate"))]
    let configured = std::env::var(API_BASE_ENV).ok();

    configured
        .as_deref()
        .and_then(normalize_base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
}
