//! Currently signed-in sessions, refreshed every 30 seconds.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::dialog::ConfirmDialog;
use crate::components::loading::ListBody;
use crate::net::api::ApiClient;
use crate::net::endpoints::{ACTIVE_USERS_PATH, LOOKUP_LIMIT};
use crate::net::types::User;
use crate::state::form::ConfirmState;
use crate::util::format;
use crate::util::list_binding::ListBinding;
use crate::util::notify::Notifier;

pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

#[component]
pub fn ActiveUsersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();

    let list = ListBinding::<User>::new(ACTIVE_USERS_PATH, u64::from(LOOKUP_LIMIT), "Failed to fetch active users");
    list.load_on_mount();
    list.poll_every(POLL_INTERVAL);

    let kick = RwSignal::new(ConfirmState::<User>::default());
    let confirm_kick = Callback::new(move |()| {
        let Some(Some(user)) = kick.try_update(ConfirmState::confirm) else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.kick_user(&user.email).await {
                Ok(()) => {
                    notifier.success(format!("User {} has been kicked.", user.email));
                    list.refresh();
                }
                Err(e) => notifier.report_failure(&e, "Failed to kick user"),
            }
        });
    });

    let rows = move || {
        let items = list.state.with(|s| s.items.clone());
        if items.is_empty() {
            return view! {
                <tr>
                    <td colspan="4" class="table__empty">
                        "No active sessions"
                    </td>
                </tr>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|user| {
                let target = user.clone();
                view! {
                    <tr>
                        <td>
                            <div class="user-cell">
                                <span class="avatar avatar--sm avatar--online">{format::initials(&user.name)}</span>
                                <div>
                                    <div class="user-cell__name">{user.name.clone()}</div>
                                    <div class="user-cell__email">{user.email.clone()}</div>
                                </div>
                            </div>
                        </td>
                        <td>
                            <span class="badge">{user.role.clone()}</span>
                        </td>
                        <td>{format::format_datetime(user.last_login.as_deref(), "-")}</td>
                        <td class="table__actions">
                            <button
                                class="btn btn--sm btn--danger"
                                on:click=move |_| kick.update(|c| c.request(target.clone()))
                            >
                                "Kick"
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
                <span class="page__count">
                    {move || format!("{} active", list.state.with(|s| s.items.len()))}
                </span>
                <button class="btn" on:click=move |_| list.refresh()>
                    "Refresh"
                </button>
            </div>
            <ListBody spinner=Signal::derive(move || list.state.with(|s| s.spinner()))>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"User"</th>
                            <th>"Role"</th>
                            <th>"Signed In"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </ListBody>
            <Show when=move || kick.with(ConfirmState::is_open)>
                <ConfirmDialog
                    title="Kick User"
                    message=Signal::derive(move || {
                        let email = kick.with(|c| c.pending().map(|u| u.email.clone()).unwrap_or_default());
                        format!("Are you sure you want to kick user {email}?")
                    })
                    confirm_label="Kick"
                    on_confirm=confirm_kick
                    on_cancel=Callback::new(move |()| kick.update(ConfirmState::cancel))
                />
            </Show>
        </section>
    }
}
