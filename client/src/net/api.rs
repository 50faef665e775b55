//! REST client for the admin backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Network` since the
//! backend is only reachable from the browser session that owns the token.
//!
//! ERROR HANDLING
//! ==============
//! Every method returns `Result<_, ApiError>`. A 401 is reported as
//! `ApiError::Unauthorized` whatever its body holds, so no caller can mistake
//! an auth failure for a success payload. `/login` is the exception: its 401
//! carries the credential rejection message. Surfacing the failure is left to
//! `util::notify`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::endpoints::{self, ApiRequest};
use super::error::{ApiError, parse_error_message};
use super::types::{
    ActivityLog, ChangePasswordRequest, Commit, Config, ConfigHistory, ConfigPayload, LoginResponse, Page, Role,
    RolePayload, User, UserHistory, UserPayload, WorkspacePayload,
};
#[cfg(feature = "hydrate")]
use super::types::SummaryReport;
use crate::state::listing::ListQuery;

/// Supplies the bearer token at call time.
pub trait TokenSource {
    fn token(&self) -> Option<String>;
}

/// Reads the token persisted in browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl TokenSource for BrowserSession {
    fn token(&self) -> Option<String> {
        crate::util::storage::load_token()
    }
}

/// Shared handle provided through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    tokens: Arc<dyn TokenSource + Send + Sync>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenSource + Send + Sync>) -> Self {
        Self { base_url: base_url.into(), tokens }
    }

    /// Client bound to the browser session token.
    #[must_use]
    pub fn browser(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Arc::new(BrowserSession))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend-relative path (uploaded avatars, etc.).
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        endpoints::endpoint_url(&self.base_url, path)
    }

    /// `Authorization` header value for the current session, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.tokens.token().map(|t| endpoints::bearer_header(&t))
    }

    /// Send a request and return `(status, body)` without classifying it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response arrives.
    pub async fn send_raw(&self, req: &ApiRequest) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            use super::endpoints::Method;

            let url = self.url(&req.path);
            let mut builder = match req.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            if !req.query.is_empty() {
                builder = builder.query(req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            if let Some(auth) = self.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let request = match &req.body {
                Some(body) => builder
                    .header("Content-Type", "application/json")
                    .body(body.clone()),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = request.send().await.map_err(|e| {
                log::warn!("{} {} failed: {e}", req.method.as_str(), req.path);
                ApiError::Network(e.to_string())
            })?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok((status, body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    /// Send a request and return the body of a 2xx response.
    ///
    /// # Errors
    ///
    /// Any non-2xx status is classified through [`ApiError::from_status`].
    pub async fn execute(&self, req: &ApiRequest) -> Result<String, ApiError> {
        let (status, body) = self.send_raw(req).await?;
        let result = classify_response(status, body);
        if let Err(e) = &result {
            log_failure(req, e);
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, req: &ApiRequest) -> Result<T, ApiError> {
        let body = self.execute(req).await?;
        decode(&body)
    }

    async fn fetch_page<T: DeserializeOwned>(&self, req: &ApiRequest) -> Result<Page<T>, ApiError> {
        let body = self.execute(req).await?;
        Page::from_body(&body)
    }

    async fn mutate(&self, req: &ApiRequest) -> Result<(), ApiError> {
        self.execute(req).await.map(|_| ())
    }

    // -------------------------------------------------------------------------
    // auth
    // -------------------------------------------------------------------------

    /// `POST /login`. A rejection carries the backend's message.
    ///
    /// # Errors
    ///
    /// `Network` when unreachable, `Server` for 5xx, `Rejected` otherwise.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let (status, body) = self.send_raw(&endpoints::login(email, password)).await?;
        interpret_login_response(status, &body)
    }

    /// Best-effort `POST /logout`.
    ///
    /// # Errors
    ///
    /// Propagates the transport or status failure; callers clear local state regardless.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.mutate(&endpoints::logout()).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn change_password(&self, body: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.mutate(&endpoints::change_password(body)).await
    }

    // -------------------------------------------------------------------------
    // lists
    // -------------------------------------------------------------------------

    /// Paginated GET against any list endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`]; a malformed body yields `Decode`.
    pub async fn list<T: DeserializeOwned>(&self, path: &str, query: &ListQuery) -> Result<Page<T>, ApiError> {
        self.fetch_page(&endpoints::list(path, query)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn lookup<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        self.fetch_page(&endpoints::lookup(path)).await.map(|p| p.data)
    }

    // -------------------------------------------------------------------------
    // users
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn save_user(&self, body: &UserPayload, create: bool) -> Result<(), ApiError> {
        let req = if create { endpoints::create_user(body) } else { endpoints::update_user(body) };
        self.mutate(&req).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.mutate(&endpoints::delete_user(id)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn users_in_role(&self, role_id: i64) -> Result<Vec<User>, ApiError> {
        self.fetch_page(&endpoints::users_in_role(role_id)).await.map(|p| p.data)
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn user_history(&self, id: i64) -> Result<Vec<UserHistory>, ApiError> {
        self.fetch_page(&endpoints::user_history(id)).await.map(|p| p.data)
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn kick_user(&self, email: &str) -> Result<(), ApiError> {
        self.mutate(&endpoints::kick_user(email)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn reset_failed_counter(&self, id: i64) -> Result<(), ApiError> {
        self.mutate(&endpoints::reset_failed_counter(id)).await
    }

    // -------------------------------------------------------------------------
    // roles
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn save_role(&self, body: &RolePayload, create: bool) -> Result<(), ApiError> {
        let req = if create { endpoints::create_role(body) } else { endpoints::update_role(body) };
        self.mutate(&req).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn delete_role(&self, id: i64) -> Result<(), ApiError> {
        self.mutate(&endpoints::delete_role(id)).await
    }

    /// All roles, for dropdowns.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn roles(&self) -> Result<Vec<Role>, ApiError> {
        self.lookup(endpoints::ROLES_PATH).await
    }

    // -------------------------------------------------------------------------
    // configs
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn save_config(&self, body: &ConfigPayload, create: bool) -> Result<(), ApiError> {
        let req = if create { endpoints::create_config(body) } else { endpoints::update_config(body) };
        self.mutate(&req).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn delete_config(&self, id: i64) -> Result<(), ApiError> {
        self.mutate(&endpoints::delete_config(id)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn config_history(&self, id: i64) -> Result<Vec<ConfigHistory>, ApiError> {
        self.fetch_page(&endpoints::config_history(id)).await.map(|p| p.data)
    }

    /// Config entries whose key matches `key`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn configs_by_key(&self, key: &str) -> Result<Vec<Config>, ApiError> {
        self.fetch_page(&endpoints::config_by_key(key)).await.map(|p| p.data)
    }

    // -------------------------------------------------------------------------
    // logs / profile
    // -------------------------------------------------------------------------

    /// CSV of every activity log matching the report filters.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn export_activity_logs(&self, query: &ListQuery) -> Result<String, ApiError> {
        self.execute(&endpoints::export_activity_logs(query)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn change_log(&self) -> Result<Vec<Commit>, ApiError> {
        self.fetch_page(&endpoints::change_log()).await.map(|p| p.data)
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.fetch(&endpoints::profile()).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn profile_activity(&self, limit: u32, offset: u32) -> Result<Vec<ActivityLog>, ApiError> {
        self.fetch_page(&endpoints::profile_activity(limit, offset)).await.map(|p| p.data)
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn remove_avatar(&self) -> Result<(), ApiError> {
        self.mutate(&endpoints::remove_avatar()).await
    }

    /// Multipart `POST /upload` with the picked image under `file`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    #[cfg(feature = "hydrate")]
    pub async fn upload_avatar(&self, file: &web_sys::File) -> Result<(), ApiError> {
        self.upload_file(endpoints::UPLOAD_AVATAR_PATH, file).await.map(|_| ())
    }

    /// Multipart `POST /api/upload-summary` with an Excel time report.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`]; the sheet-level complaint comes back as
    /// the `Rejected` message.
    #[cfg(feature = "hydrate")]
    pub async fn upload_summary(&self, file: &web_sys::File) -> Result<SummaryReport, ApiError> {
        let body = self.upload_file(endpoints::UPLOAD_SUMMARY_PATH, file).await?;
        decode(&body)
    }

    #[cfg(feature = "hydrate")]
    async fn upload_file(&self, path: &str, file: &web_sys::File) -> Result<String, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
        form.append_with_blob("file", file).map_err(|e| ApiError::Network(format!("{e:?}")))?;
        let mut builder = gloo_net::http::Request::post(&self.url(path));
        if let Some(auth) = self.authorization() {
            builder = builder.header("Authorization", &auth);
        }
        let resp = builder
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                log::warn!("POST {path} failed: {e}");
                ApiError::Network(e.to_string())
            })?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        classify_response(status, body)
    }

    // -------------------------------------------------------------------------
    // workspaces
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn save_workspace(&self, body: &WorkspacePayload, create: bool) -> Result<(), ApiError> {
        let req = if create { endpoints::create_workspace(body) } else { endpoints::update_workspace(body) };
        self.mutate(&req).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn delete_workspace(&self, id: i64) -> Result<(), ApiError> {
        self.mutate(&endpoints::delete_workspace(id)).await
    }
}

/// Map a completed response to its body or a classified failure.
///
/// # Errors
///
/// Any status outside 200..300.
pub fn classify_response(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::from_status(status, &body))
    }
}

/// Deserialize a 2xx body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] on shape mismatch.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a `/login` response. The backend answers both success and bad
/// credentials with `{success, message}`, the latter under 401.
///
/// # Errors
///
/// `Server` for 5xx, `Rejected` for any unsuccessful or tokenless answer.
pub fn interpret_login_response(status: u16, body: &str) -> Result<LoginResponse, ApiError> {
    if status >= 500 {
        return Err(ApiError::Server { status, message: parse_error_message(body) });
    }
    let parsed = serde_json::from_str::<LoginResponse>(body).ok();
    match parsed {
        Some(resp) if (200..300).contains(&status) && resp.success && resp.token.is_some() => Ok(resp),
        Some(resp) => Err(ApiError::Rejected {
            status,
            message: resp.message.filter(|m| !m.trim().is_empty()),
        }),
        None => Err(ApiError::Rejected { status, message: parse_error_message(body) }),
    }
}

fn log_failure(req: &ApiRequest, err: &ApiError) {
    #[cfg(feature = "hydrate")]
    log::warn!("{} {} -> {err}", req.method.as_str(), req.path);
    #[cfg(not(feature = "hydrate"))]
    let _ = (req, err);
}
