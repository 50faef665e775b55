//! User management: paginated list, role filter, add/edit/delete, history.

use leptos::prelude::*;

use crate::components::dialog::{ConfirmDialog, FormError, Modal};
use crate::components::loading::ListBody;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::net::api::ApiClient;
use crate::net::endpoints::USERS_PATH;
use crate::net::types::{Role, User, UserHistory};
use crate::state::drafts::UserDraft;
use crate::state::form::{ConfirmState, FormState};
use crate::state::listing::Spinner;
use crate::util::format;
use crate::util::list_binding::ListBinding;
use crate::util::notify::Notifier;
use crate::util::page_size::COMPACT_PAGE_SIZE;

/// Change-history modal contents; `logs` is `None` while loading.
#[derive(Clone)]
struct HistoryView {
    user_name: String,
    logs: Option<Vec<UserHistory>>,
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();
    let base_url = api.base_url().to_owned();

    let list = ListBinding::<User>::new(USERS_PATH, COMPACT_PAGE_SIZE, "Failed to fetch users");
    list.load_on_mount();
    list.adopt_config_page_size(COMPACT_PAGE_SIZE);

    let roles = RwSignal::new(Vec::<Role>::new());
    let api_roles = api.clone();
    Effect::new(move || {
        let api = api_roles.clone();
        leptos::task::spawn_local(async move {
            match api.roles().await {
                Ok(list) => {
                    roles.try_set(list);
                }
                Err(e) => notifier.report_failure(&e, "Failed to fetch roles"),
            }
        });
    });

    let form = RwSignal::new(FormState::<UserDraft>::default());
    let confirm = RwSignal::new(ConfirmState::<User>::default());
    let history = RwSignal::new(None::<HistoryView>);

    let api_save = api.clone();
    let save = Callback::new(move |()| {
        let Some(Ok(payload)) = form.try_update(FormState::begin_save) else {
            return;
        };
        let create = form.with_untracked(|f| f.mode.is_add());
        let api = api_save.clone();
        leptos::task::spawn_local(async move {
            match api.save_user(&payload, create).await {
                Ok(()) => {
                    form.try_update(FormState::save_succeeded);
                    notifier.success(if create { "User added successfully" } else { "User updated successfully" });
                    list.refresh();
                }
                Err(e) => notifier.form_failure(form, &e, "Failed to save user"),
            }
        });
    });

    let api_delete = api.clone();
    let delete = Callback::new(move |()| {
        let Some(Some(user)) = confirm.try_update(ConfirmState::confirm) else {
            return;
        };
        let api = api_delete.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_user(user.id).await;
            if notifier.report(&result, "User deleted successfully", "Failed to delete user") {
                list.refresh();
            }
        });
    });

    let api_history = api;
    let open_history = move |user: User| {
        history.set(Some(HistoryView { user_name: user.name.clone(), logs: None }));
        let api = api_history.clone();
        leptos::task::spawn_local(async move {
            match api.user_history(user.id).await {
                Ok(logs) => {
                    history.try_update(|h| {
                        if let Some(h) = h {
                            h.logs = Some(logs);
                        }
                    });
                }
                Err(e) => {
                    history.try_set(None);
                    notifier.report_failure(&e, "Failed to load user history");
                }
            }
        });
    };

    let rows = move || {
        let items = list.state.with(|s| s.items.clone());
        if items.is_empty() {
            return view! {
                <tr>
                    <td colspan="6" class="table__empty">
                        "No users found"
                    </td>
                </tr>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|user| {
                let avatar = match format::avatar_url(&base_url, &user) {
                    Some(src) => view! { <img class="avatar avatar--sm" src=src alt="" /> }.into_any(),
                    None => view! { <span class="avatar avatar--sm">{format::initials(&user.name)}</span> }.into_any(),
                };
                let edit_user = user.clone();
                let delete_user = user.clone();
                let history_user = user.clone();
                let open_history = open_history.clone();
                view! {
                    <tr>
                        <td>
                            <div class="user-cell">
                                {avatar}
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
                        <td>{format::format_datetime(user.last_login.as_deref(), "Never")}</td>
                        <td class="table__muted">{user.updated_by.clone().or(user.created_by.clone()).unwrap_or_else(|| "-".to_owned())}</td>
                        <td class="table__actions">
                            <button class="btn btn--sm" on:click=move |_| open_history(history_user.clone())>
                                "History"
                            </button>
                            <button
                                class="btn btn--sm"
                                on:click=move |_| form.update(|f| f.open_edit(UserDraft::from(&edit_user)))
                            >
                                "Edit"
                            </button>
                            <button
                                class="btn btn--sm btn--danger"
                                on:click=move |_| confirm.update(|c| c.request(delete_user.clone()))
                            >
                                "Delete"
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
                    prop:value=move || list.state.with(|s| s.filter("roleId").to_owned())
                    on:change=move |ev| list.set_filter("roleId", event_target_value(&ev))
                >
                    <option value="">"All Roles"</option>
                    {move || {
                        roles
                            .get()
                            .into_iter()
                            .map(|r| view! { <option value=r.id.to_string()>{r.name}</option> })
                            .collect_view()
                    }}
                </select>
                <button class="btn btn--primary" on:click=move |_| form.update(FormState::open_add)>
                    "Add User"
                </button>
            </div>
            <ListBody spinner=Signal::derive(move || list.state.with(|s| s.spinner()))>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"User"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                            <th>"Last Login"</th>
                            <th>"Updated By"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows.clone()}</tbody>
                </table>
                <Pagination
                    state=Signal::derive(move || list.state.with(|s| s.pagination()))
                    on_page=Callback::new(move |page| list.set_page(page))
                />
            </ListBody>
            <Show when=move || form.with(|f| f.open)>
                <UserForm form=form roles=roles on_save=save />
            </Show>
            <Show when=move || confirm.with(ConfirmState::is_open)>
                <ConfirmDialog
                    title="Delete User"
                    message=Signal::derive(move || {
                        let name = confirm.with(|c| c.pending().map(|u| u.name.clone()).unwrap_or_default());
                        format!("Are you sure you want to delete {name}? This cannot be undone.")
                    })
                    on_confirm=delete
                    on_cancel=Callback::new(move |()| confirm.update(ConfirmState::cancel))
                />
            </Show>
            <Show when=move || history.with(Option::is_some)>
                <HistoryModal history=history />
            </Show>
        </section>
    }
}

#[component]
fn UserForm(form: RwSignal<FormState<UserDraft>>, roles: RwSignal<Vec<Role>>, on_save: Callback<()>) -> impl IntoView {
    let title = move || if form.with(|f| f.mode.is_add()) { "Add User" } else { "Edit User" };
    let close = Callback::new(move |()| form.update(FormState::close));
    let password_hint = move || {
        if form.with(|f| f.mode.is_add()) { "Password" } else { "Password (leave blank to keep)" }
    };

    view! {
        <Modal title=title() on_close=close>
            <form on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.draft.name.clone())
                        on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || form.with(|f| f.draft.email.clone())
                        on:input=move |ev| form.update(|f| f.draft.email = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Role"
                    <select
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.draft.role_id.to_string())
                        on:change=move |ev| {
                            let id = event_target_value(&ev).parse().unwrap_or(0);
                            let all = roles.get_untracked();
                            form.update(|f| f.draft.select_role(&all, id));
                        }
                    >
                        <option value="0">"Select role"</option>
                        {move || {
                            roles
                                .get()
                                .into_iter()
                                .map(|r| view! { <option value=r.id.to_string()>{r.name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    {password_hint}
                    <input
                        class="dialog__input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.draft.password.clone())
                        on:input=move |ev| form.update(|f| f.draft.password = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.draft.is_active)
                        on:change=move |ev| form.update(|f| f.draft.is_active = event_target_checked(&ev))
                    />
                    "Active"
                </label>
                <FormError message=Signal::derive(move || form.with(|f| f.error.clone())) />
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || form.with(|f| f.saving)>
                        {move || if form.with(|f| f.saving) { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
fn HistoryModal(history: RwSignal<Option<HistoryView>>) -> impl IntoView {
    let title = history.with_untracked(|h| h.as_ref().map(|h| format!("History: {}", h.user_name)).unwrap_or_default());
    let body = move || match history.with(|h| h.as_ref().and_then(|h| h.logs.clone())) {
        None => view! { <div class="spinner"></div> }.into_any(),
        Some(logs) if logs.is_empty() => view! { <p class="table__empty">"No history recorded"</p> }.into_any(),
        Some(logs) => view! {
            <table class="table table--compact">
                <thead>
                    <tr>
                        <th>"Action"</th>
                        <th>"Changed By"</th>
                        <th>"Date"</th>
                        <th>"Details"</th>
                    </tr>
                </thead>
                <tbody>
                    {logs
                        .into_iter()
                        .map(|log| {
                            let badge = if log.is_delete() { "badge badge--danger" } else { "badge badge--warning" };
                            let summary = log.summary();
                            view! {
                                <tr>
                                    <td>
                                        <span class=badge>{log.action}</span>
                                    </td>
                                    <td>{log.changed_by}</td>
                                    <td>{format::format_datetime(log.changed_at.as_deref(), "-")}</td>
                                    <td>
                                        <small class="table__muted">{summary}</small>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };
    view! {
        <Modal title=title on_close=Callback::new(move |()| history.set(None)) wide=true>
            {body}
        </Modal>
    }
}
