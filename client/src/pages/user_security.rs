//! Login security: failed-attempt counters and administrator password resets.

#[cfg(test)]
#[path = "user_security_test.rs"]
mod user_security_test;

use leptos::prelude::*;

use crate::components::dialog::{ConfirmDialog, FormError, Modal};
use crate::components::loading::ListBody;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::net::api::ApiClient;
use crate::net::endpoints::USERS_PATH;
use crate::net::types::User;
use crate::state::drafts::ResetPasswordDraft;
use crate::state::form::{ConfirmState, FormState, Validate};
use crate::state::listing::Spinner;
use crate::util::format;
use crate::util::list_binding::ListBinding;
use crate::util::notify::Notifier;
use crate::util::page_size::COMPACT_PAGE_SIZE;

/// Status filter applied to the rows of the fetched page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    const ALL: [Self; 3] = [Self::All, Self::Active, Self::Inactive];

    fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.value() == raw).unwrap_or_default()
    }

    #[must_use]
    pub fn matches(self, user: &User) -> bool {
        match self {
            Self::All => true,
            Self::Active => user.is_active,
            Self::Inactive => !user.is_active,
        }
    }
}

#[component]
pub fn UserSecurityPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();

    let list = ListBinding::<User>::new(USERS_PATH, COMPACT_PAGE_SIZE, "Failed to fetch users");
    list.load_on_mount();
    list.adopt_config_page_size(COMPACT_PAGE_SIZE);

    let status = RwSignal::new(StatusFilter::All);
    let reset_counter = RwSignal::new(ConfirmState::<User>::default());
    let reset_password = RwSignal::new(FormState::<ResetPasswordDraft>::default());
    let password_confirm = RwSignal::new(ConfirmState::<()>::default());

    let api_counter = api.clone();
    let confirm_reset_counter = Callback::new(move |()| {
        let Some(Some(user)) = reset_counter.try_update(ConfirmState::confirm) else {
            return;
        };
        let api = api_counter.clone();
        leptos::task::spawn_local(async move {
            let result = api.reset_failed_counter(user.id).await;
            if notifier.report(&result, "Login failed counter reset successfully", "Failed to reset counter") {
                list.refresh();
            }
        });
    });

    // Validate first so the confirmation only appears for a sendable draft.
    let request_password_reset = Callback::new(move |()| {
        let valid = reset_password.try_update(|f| match f.draft.validate(f.mode) {
            Ok(_) => true,
            Err(e) => {
                f.error = Some(e.to_string());
                false
            }
        });
        if valid == Some(true) {
            password_confirm.update(|c| c.request(()));
        }
    });

    let save_password = Callback::new(move |()| {
        if password_confirm.try_update(ConfirmState::confirm).flatten().is_none() {
            return;
        }
        let Some(Ok(payload)) = reset_password.try_update(FormState::begin_save) else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.save_user(&payload, false).await {
                Ok(()) => {
                    reset_password.try_update(FormState::save_succeeded);
                    notifier.success("Password reset successfully");
                    list.refresh();
                }
                Err(e) => notifier.form_failure(reset_password, &e, "Failed to reset password"),
            }
        });
    });

    let rows = move || {
        let filter = status.get();
        let items: Vec<User> = list.state.with(|s| s.items.iter().filter(|u| filter.matches(u)).cloned().collect());
        if items.is_empty() {
            return view! {
                <tr>
                    <td colspan="5" class="table__empty">
                        "No users found"
                    </td>
                </tr>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|user| {
                let counter_user = user.clone();
                let password_user = user.clone();
                let attempts_class =
                    if user.failed_login_attempts > 0 { "badge badge--danger" } else { "badge badge--muted" };
                view! {
                    <tr>
                        <td>
                            <div class="user-cell">
                                <span class="avatar avatar--sm">{format::initials(&user.name)}</span>
                                <div>
                                    <div class="user-cell__name">{user.name.clone()}</div>
                                    <div class="user-cell__email">{user.email.clone()}</div>
                                </div>
                            </div>
                        </td>
                        <td>
                            <span class="badge">{user.role.clone()}</span>
                        </td>
                        <td>
                            <span class=if user.is_active { "status status--active" } else { "status status--inactive" }>
                                {if user.is_active { "Active" } else { "Inactive" }}
                            </span>
                        </td>
                        <td class="table__center">
                            <span class=attempts_class>{user.failed_login_attempts}</span>
                        </td>
                        <td class="table__actions">
                            <button
                                class="btn btn--sm"
                                disabled=user.failed_login_attempts == 0
                                on:click=move |_| reset_counter.update(|c| c.request(counter_user.clone()))
                            >
                                "Reset Counter"
                            </button>
                            <button
                                class="btn btn--sm btn--primary"
                                on:click=move |_| {
                                    let draft = ResetPasswordDraft { user: password_user.clone(), password: String::new() };
                                    reset_password.update(|f| f.open_edit(draft));
                                }
                            >
                                "Reset Password"
                            </button>
                        </td>
                    </tr>
                }
                .into_any()
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="page">
            <div class="page__toolbar">
                <SearchInput
                    value=Signal::derive(move || list.state.with(|s| s.query.search.clone()))
                    on_input=Callback::new(move |text| list.set_search(text))
                    busy=Signal::derive(move || list.state.with(|s| s.spinner() == Spinner::Overlay))
                    placeholder="Search users..."
                />
                <select
                    class="select"
                    prop:value=move || status.get().value()
                    on:change=move |ev| {
                        status.set(StatusFilter::parse(&event_target_value(&ev)));
                        list.restart();
                    }
                >
                    {StatusFilter::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.value()>{f.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <ListBody spinner=Signal::derive(move || list.state.with(|s| s.spinner()))>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"User"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                            <th class="table__center">"Failed Attempts"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <Pagination
                    state=Signal::derive(move || list.state.with(|s| s.pagination()))
                    on_page=Callback::new(move |page| list.set_page(page))
                />
            </ListBody>
            <Show when=move || reset_counter.with(ConfirmState::is_open)>
                <ConfirmDialog
                    title="Reset Login Counter"
                    message=Signal::derive(move || {
                        let name = reset_counter.with(|c| c.pending().map(|u| u.name.clone()).unwrap_or_default());
                        format!("Reset the failed login counter for {name}?")
                    })
                    confirm_label="Reset"
                    on_confirm=confirm_reset_counter
                    on_cancel=Callback::new(move |()| reset_counter.update(ConfirmState::cancel))
                />
            </Show>
            <Show when=move || reset_password.with(|f| f.open)>
                <ResetPasswordForm form=reset_password on_save=request_password_reset />
            </Show>
            <Show when=move || password_confirm.with(ConfirmState::is_open)>
                <ConfirmDialog
                    title="Reset Password"
                    message=Signal::derive(move || {
                        let name = reset_password.with(|f| f.draft.user.name.clone());
                        format!("Reset the password for {name}?")
                    })
                    confirm_label="Reset"
                    on_confirm=save_password
                    on_cancel=Callback::new(move |()| password_confirm.update(ConfirmState::cancel))
                />
            </Show>
        </section>
    }
}

#[component]
fn ResetPasswordForm(form: RwSignal<FormState<ResetPasswordDraft>>, on_save: Callback<()>) -> impl IntoView {
    let close = Callback::new(move |()| form.update(FormState::close));
    let target = form.with_untracked(|f| format!("{} ({})", f.draft.user.name, f.draft.user.email));

    view! {
        <Modal title="Reset Password" on_close=close>
            <form on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }>
                <p class="dialog__message">"Set a new password for " <strong>{target}</strong></p>
                <label class="dialog__label">
                    "New Password"
                    <input
                        class="dialog__input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.draft.password.clone())
                        on:input=move |ev| form.update(|f| f.draft.password = event_target_value(&ev))
                    />
                </label>
                <FormError message=Signal::derive(move || form.with(|f| f.error.clone())) />
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || form.with(|f| f.saving)>
                        "Reset Password"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
