//! Add/edit modal workflow and confirmation-gated destructive actions.
//!
//! DESIGN
//! ======
//! The draft lives apart from the list rows. `begin_save` runs client-side
//! validation and only yields a payload when the network call may proceed;
//! the page then reports back through `save_succeeded` / `save_failed`.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Client-side validation failure. Blocks the request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("Password is required for new users")]
    PasswordRequiredOnCreate,
    #[error("Password cannot be empty")]
    EmptyPassword,
    #[error("Please fill in all fields")]
    IncompleteFields,
    #[error("New passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {0} characters long")]
    TooShort(usize),
    #[error("{0}")]
    Invalid(String),
    #[error("Save already in progress")]
    InFlight,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

impl FormMode {
    #[must_use]
    pub fn is_add(self) -> bool {
        self == Self::Add
    }
}

/// A draft that can be checked and turned into a request body.
pub trait Validate {
    type Payload;

    /// # Errors
    ///
    /// Returns the first failed rule.
    fn validate(&self, mode: FormMode) -> Result<Self::Payload, ValidationError>;
}

#[derive(Clone, Debug, Default)]
pub struct FormState<D> {
    pub open: bool,
    pub mode: FormMode,
    pub draft: D,
    pub saving: bool,
    pub error: Option<String>,
}

impl<D: Default + Validate> FormState<D> {
    pub fn open_add(&mut self) {
        self.open_with(FormMode::Add, D::default());
    }

    pub fn open_edit(&mut self, draft: D) {
        self.open_with(FormMode::Edit, draft);
    }

    fn open_with(&mut self, mode: FormMode, draft: D) {
        self.open = true;
        self.mode = mode;
        self.draft = draft;
        self.saving = false;
        self.error = None;
    }

    /// Close and reset the draft.
    pub fn close(&mut self) {
        self.open = false;
        self.draft = D::default();
        self.saving = false;
        self.error = None;
    }

    /// Validate the draft; on success the form is marked saving.
    ///
    /// # Errors
    ///
    /// The validation failure, also recorded in `error`.
    pub fn begin_save(&mut self) -> Result<D::Payload, ValidationError> {
        if self.saving {
            return Err(ValidationError::InFlight);
        }
        match self.draft.validate(self.mode) {
            Ok(payload) => {
                self.saving = true;
                self.error = None;
                Ok(payload)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn save_succeeded(&mut self) {
        self.close();
    }

    /// Keep the modal open with the failure shown.
    pub fn save_failed(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.error = Some(message.into());
    }
}

/// Pending destructive action awaiting explicit confirmation.
#[derive(Clone, Debug)]
pub struct ConfirmState<T> {
    pending: Option<T>,
}

impl<T> Default for ConfirmState<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> ConfirmState<T> {
    pub fn request(&mut self, target: T) {
        self.pending = Some(target);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the confirmed target. `None` when nothing was requested.
    pub fn confirm(&mut self) -> Option<T> {
        self.pending.take()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }
}
