//! Self-service password change, opened from the header user menu.

use leptos::prelude::*;

use super::dialog::{FormError, Modal};
use crate::net::api::ApiClient;
use crate::state::drafts::PasswordChangeDraft;
use crate::state::form::FormState;
use crate::state::ui::UiState;
use crate::util::notify::Notifier;

#[component]
pub fn ChangePasswordDialog() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();

    let form = RwSignal::new(FormState::<PasswordChangeDraft>::default());
    form.update(|f| f.open_edit(PasswordChangeDraft::default()));

    let close = Callback::new(move |()| {
        form.update(FormState::close);
        ui.update(|u| u.show_change_password = false);
    });

    let submit = Callback::new(move |()| {
        let Some(Ok(payload)) = form.try_update(FormState::begin_save) else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.change_password(&payload).await {
                Ok(()) => {
                    notifier.success("Password changed successfully!");
                    close.run(());
                }
                Err(e) if e.is_unauthorized() => notifier.report_failure(&e, "Failed to change password"),
                Err(e) => {
                    form.try_update(|f| f.save_failed(e.user_message("Failed to change password")));
                }
            }
        });
    });

    let field = move |label: &'static str, get: fn(&PasswordChangeDraft) -> String, set: fn(&mut PasswordChangeDraft, String)| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type="password"
                    required
                    prop:value=move || form.with(|f| get(&f.draft))
                    on:input=move |ev| form.update(|f| set(&mut f.draft, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <Modal title="Change Password" on_close=close>
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }>
                {field("Current Password", |d| d.old_password.clone(), |d, v| d.old_password = v)}
                {field("New Password", |d| d.new_password.clone(), |d, v| d.new_password = v)}
                {field("Confirm New Password", |d| d.confirm_password.clone(), |d, v| d.confirm_password = v)}
                <FormError message=Signal::derive(move || form.get().error) />
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || form.get().saving>
                        {move || if form.get().saving { "Saving..." } else { "Change Password" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
