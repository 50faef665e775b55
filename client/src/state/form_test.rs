use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct NameDraft {
    name: String,
}

impl Validate for NameDraft {
    type Payload = String;

    fn validate(&self, _mode: FormMode) -> Result<String, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required { field: "Role Name" });
        }
        Ok(self.name.trim().to_owned())
    }
}

#[test]
fn open_add_starts_from_defaults() {
    let mut form = FormState::<NameDraft>::default();
    form.open_edit(NameDraft { name: "old".to_owned() });
    form.close();
    form.open_add();
    assert!(form.open);
    assert_eq!(form.mode, FormMode::Add);
    assert_eq!(form.draft, NameDraft::default());
}

#[test]
fn invalid_draft_blocks_save_and_keeps_modal_open() {
    let mut form = FormState::<NameDraft>::default();
    form.open_add();
    let err = form.begin_save().unwrap_err();
    assert_eq!(err.to_string(), "Role Name is required");
    assert!(form.open);
    assert!(!form.saving);
    assert_eq!(form.error.as_deref(), Some("Role Name is required"));
}

#[test]
fn second_submit_while_saving_is_rejected() {
    let mut form = FormState::<NameDraft>::default();
    form.open_edit(NameDraft { name: "ops".to_owned() });
    assert_eq!(form.begin_save(), Ok("ops".to_owned()));
    assert_eq!(form.begin_save(), Err(ValidationError::InFlight));
}

#[test]
fn success_closes_and_resets_draft() {
    let mut form = FormState::<NameDraft>::default();
    form.open_edit(NameDraft { name: "ops".to_owned() });
    form.begin_save().unwrap();
    form.save_succeeded();
    assert!(!form.open);
    assert_eq!(form.draft, NameDraft::default());
}

#[test]
fn failure_keeps_draft_and_reports_message() {
    let mut form = FormState::<NameDraft>::default();
    form.open_edit(NameDraft { name: "ops".to_owned() });
    form.begin_save().unwrap();
    form.save_failed("Role already exists");
    assert!(form.open);
    assert!(!form.saving);
    assert_eq!(form.draft.name, "ops");
    assert_eq!(form.error.as_deref(), Some("Role already exists"));
}

#[test]
fn confirm_yields_target_once() {
    let mut confirm = ConfirmState::default();
    confirm.request(42_i64);
    assert!(confirm.is_open());
    assert_eq!(confirm.confirm(), Some(42));
    assert_eq!(confirm.confirm(), None);
}

#[test]
fn cancel_fires_nothing() {
    let mut confirm = ConfirmState::default();
    confirm.request(7_i64);
    confirm.cancel();
    assert!(!confirm.is_open());
    assert_eq!(confirm.confirm(), None);
}

#[test]
fn too_short_message_includes_minimum() {
    assert_eq!(ValidationError::TooShort(6).to_string(), "Password must be at least 6 characters long");
}
