//! Ephemeral notification queue.
//!
//! DESIGN
//! ======
//! Posting goes through `util::notify::Notifier`, which also schedules one
//! expiry timer per toast; `components::toast_stack` only renders the queue.
//! Entries carry their own deadline so expiry is independent per toast and
//! stacking never coalesces.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Lifetime of a toast after it is posted.
pub const TOAST_TTL_MS: f64 = 3000.0;

pub type ToastId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub expires_at_ms: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: ToastId,
}

impl ToastState {
    /// Append a toast posted at `now_ms` and return its id.
    pub fn post(&mut self, message: impl Into<String>, kind: ToastKind, now_ms: f64) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message: message.into(), kind, expires_at_ms: now_ms + TOAST_TTL_MS });
        id
    }

    /// Remove a toast early. Returns whether it was present.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose deadline has passed.
    pub fn expire(&mut self, now_ms: f64) {
        self.toasts.retain(|t| t.expires_at_ms > now_ms);
    }
}
