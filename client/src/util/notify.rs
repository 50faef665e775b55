//! App-wide notification sink and centralized API failure handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Notifier` is provided once through context. Views post success/error
//! toasts through it and hand every `ApiError` to `report_failure`, which is
//! the single place a 401 turns into a forced logout.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use super::format::now_ms;
use crate::net::error::ApiError;
use crate::state::form::{FormState, Validate};
use crate::state::session::{SESSION_EXPIRED_MESSAGE, SessionState};
use crate::state::toast::{ToastId, ToastKind, ToastState};

/// What `dispatch_failure` did with an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureOutcome {
    /// First 401 of the session: logged out, one notice posted.
    SessionExpired(ToastId),
    /// A 401 after the session already ended; nothing posted.
    Suppressed,
    Reported(ToastId),
}

/// Route a failure to the session and toast queue.
pub fn dispatch_failure(
    session: &mut SessionState,
    toasts: &mut ToastState,
    err: &ApiError,
    fallback: &str,
    now_ms: f64,
) -> FailureOutcome {
    if err.is_unauthorized() {
        return if session.expire() {
            FailureOutcome::SessionExpired(toasts.post(SESSION_EXPIRED_MESSAGE, ToastKind::Error, now_ms))
        } else {
            FailureOutcome::Suppressed
        };
    }
    FailureOutcome::Reported(toasts.post(err.user_message(fallback), ToastKind::Error, now_ms))
}

#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<ToastState>,
    session: RwSignal<SessionState>,
}

impl Notifier {
    #[must_use]
    pub fn new(toasts: RwSignal<ToastState>, session: RwSignal<SessionState>) -> Self {
        Self { toasts, session }
    }

    #[must_use]
    pub fn toasts(self) -> RwSignal<ToastState> {
        self.toasts
    }

    pub fn success(self, message: impl Into<String>) {
        self.post(message.into(), ToastKind::Success);
    }

    pub fn error(self, message: impl Into<String>) {
        self.post(message.into(), ToastKind::Error);
    }

    pub fn info(self, message: impl Into<String>) {
        self.post(message.into(), ToastKind::Info);
    }

    fn post(self, message: String, kind: ToastKind) {
        let now = now_ms();
        if self.toasts.try_update(|t| t.post(message, kind, now)).is_some() {
            self.schedule_expiry();
        }
    }

    /// Surface a failed call: 401 forces logout once, anything else becomes
    /// an error toast with the server message or `fallback`.
    pub fn report_failure(self, err: &ApiError, fallback: &str) {
        let now = now_ms();
        let outcome = self
            .session
            .try_update(|session| self.toasts.try_update(|toasts| dispatch_failure(session, toasts, err, fallback, now)))
            .flatten();
        match outcome {
            Some(FailureOutcome::SessionExpired(_)) => {
                super::storage::clear_session();
                #[cfg(feature = "hydrate")]
                log::warn!("session expired; cleared persisted token");
                self.schedule_expiry();
            }
            Some(FailureOutcome::Reported(_)) => {
                #[cfg(feature = "hydrate")]
                log::error!("{fallback}: {err}");
                self.schedule_expiry();
            }
            Some(FailureOutcome::Suppressed) | None => {}
        }
    }

    /// Success toast on `Ok`, `report_failure` on `Err`. Returns whether it succeeded.
    pub fn report<T>(self, result: &Result<T, ApiError>, success: &str, fallback: &str) -> bool {
        match result {
            Ok(_) => {
                self.success(success);
                true
            }
            Err(e) => {
                self.report_failure(e, fallback);
                false
            }
        }
    }

    /// A failed form save: 401 goes through `report_failure`, anything else
    /// stays inline on the still-open form.
    pub fn form_failure<D>(self, form: RwSignal<FormState<D>>, err: &ApiError, fallback: &str)
    where
        D: Default + Validate + Send + Sync + 'static,
    {
        if err.is_unauthorized() {
            form.try_update(FormState::close);
            self.report_failure(err, fallback);
            return;
        }
        #[cfg(feature = "hydrate")]
        log::warn!("{fallback}: {err}");
        let message = err.user_message(fallback);
        form.try_update(|f| f.save_failed(message));
    }

    /// One timer per posted toast; each sweep drops only entries past their own deadline.
    #[allow(clippy::unused_self)]
    fn schedule_expiry(self) {
        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            leptos::task::spawn_local(async move {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let ttl = std::time::Duration::from_millis(crate::state::toast::TOAST_TTL_MS as u64 + 10);
                gloo_timers::future::sleep(ttl).await;
                let now = now_ms();
                toasts.try_update(|t| t.expire(now));
            });
        }
    }
}
