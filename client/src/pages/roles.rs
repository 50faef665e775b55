//! Role management: list, add/edit/delete, and a members view per role.

use leptos::prelude::*;

use crate::components::dialog::{ConfirmDialog, FormError, Modal};
use crate::components::loading::ListBody;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::net::api::ApiClient;
use crate::net::endpoints::ROLES_PATH;
use crate::net::types::{Role, User};
use crate::state::drafts::RoleDraft;
use crate::state::form::{ConfirmState, FormState};
use crate::state::listing::Spinner;
use crate::util::format;
use crate::util::list_binding::ListBinding;
use crate::util::notify::Notifier;
use crate::util::page_size::COMPACT_PAGE_SIZE;

#[derive(Clone)]
struct MembersView {
    role_name: String,
    users: Option<Vec<User>>,
}

#[component]
pub fn RolesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();

    let list = ListBinding::<Role>::new(ROLES_PATH, COMPACT_PAGE_SIZE, "Failed to fetch roles");
    list.load_on_mount();
    list.adopt_config_page_size(COMPACT_PAGE_SIZE);

    let form = RwSignal::new(FormState::<RoleDraft>::default());
    let confirm = RwSignal::new(ConfirmState::<Role>::default());
    let members = RwSignal::new(None::<MembersView>);

    let api_save = api.clone();
    let save = Callback::new(move |()| {
        let Some(Ok(payload)) = form.try_update(FormState::begin_save) else {
            return;
        };
        let create = form.with_untracked(|f| f.mode.is_add());
        let api = api_save.clone();
        leptos::task::spawn_local(async move {
            match api.save_role(&payload, create).await {
                Ok(()) => {
                    form.try_update(FormState::save_succeeded);
                    notifier.success(if create { "Role added successfully" } else { "Role updated successfully" });
                    list.refresh();
                }
                Err(e) => notifier.form_failure(form, &e, "Failed to save role"),
            }
        });
    });

    let api_delete = api.clone();
    let delete = Callback::new(move |()| {
        let Some(Some(role)) = confirm.try_update(ConfirmState::confirm) else {
            return;
        };
        let api = api_delete.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_role(role.id).await;
            if notifier.report(&result, "Role deleted successfully", "Failed to delete role") {
                list.refresh();
            }
        });
    });

    let open_members = Callback::new(move |role: Role| {
        members.set(Some(MembersView { role_name: role.name.clone(), users: None }));
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.users_in_role(role.id).await {
                Ok(users) => {
                    members.try_update(|m| {
                        if let Some(m) = m {
                            m.users = Some(users);
                        }
                    });
                }
                Err(e) => {
                    members.try_set(None);
                    notifier.report_failure(&e, "Failed to load role members");
                }
            }
        });
    });

    let rows = move || {
        let items = list.state.with(|s| s.items.clone());
        if items.is_empty() {
            return view! {
                <tr>
                    <td colspan="6" class="table__empty">
                        "No roles found"
                    </td>
                </tr>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|role| {
                let edit_role = role.clone();
                let delete_role = role.clone();
                let members_role = role.clone();
                view! {
                    <tr>
                        <td class="table__strong">{role.name.clone()}</td>
                        <td class="table__muted">{role.description.clone()}</td>
                        <td>
                            <button class="link" on:click=move |_| open_members.run(members_role.clone())>
                                {format!("{} users", role.user_count)}
                            </button>
                        </td>
                        <td>
                            <span class=if role.is_active { "status status--active" } else { "status status--inactive" }>
                                {if role.is_active { "Active" } else { "Inactive" }}
                            </span>
                        </td>
                        <td>{format::format_date(role.created_at.as_deref())}</td>
                        <td class="table__actions">
                            <button
                                class="btn btn--sm"
                                on:click=move |_| form.update(|f| f.open_edit(RoleDraft::from(&edit_role)))
                            >
                                "Edit"
                            </button>
                            <button
                                class="btn btn--sm btn--danger"
                                on:click=move |_| confirm.update(|c| c.request(delete_role.clone()))
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
                    placeholder="Search roles..."
                />
                <button class="btn btn--primary" on:click=move |_| form.update(FormState::open_add)>
                    "Add Role"
                </button>
            </div>
            <ListBody spinner=Signal::derive(move || list.state.with(|s| s.spinner()))>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Role"</th>
                            <th>"Description"</th>
                            <th>"Members"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
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
            <Show when=move || form.with(|f| f.open)>
                <RoleForm form=form on_save=save />
            </Show>
            <Show when=move || confirm.with(ConfirmState::is_open)>
                <ConfirmDialog
                    title="Delete Role"
                    message=Signal::derive(move || {
                        let name = confirm.with(|c| c.pending().map(|r| r.name.clone()).unwrap_or_default());
                        format!("Are you sure you want to delete the role \"{name}\"?")
                    })
                    on_confirm=delete
                    on_cancel=Callback::new(move |()| confirm.update(ConfirmState::cancel))
                />
            </Show>
            <Show when=move || members.with(Option::is_some)>
                <MembersModal members=members />
            </Show>
        </section>
    }
}

#[component]
fn RoleForm(form: RwSignal<FormState<RoleDraft>>, on_save: Callback<()>) -> impl IntoView {
    let title = if form.with_untracked(|f| f.mode.is_add()) { "Add Role" } else { "Edit Role" };
    let close = Callback::new(move |()| form.update(FormState::close));

    view! {
        <Modal title=title on_close=close>
            <form on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }>
                <label class="dialog__label">
                    "Role Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.draft.name.clone())
                        on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        rows="3"
                        prop:value=move || form.with(|f| f.draft.description.clone())
                        on:input=move |ev| form.update(|f| f.draft.description = event_target_value(&ev))
                    ></textarea>
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
fn MembersModal(members: RwSignal<Option<MembersView>>) -> impl IntoView {
    let title =
        members.with_untracked(|m| m.as_ref().map(|m| format!("Users in {}", m.role_name)).unwrap_or_default());
    let body = move || match members.with(|m| m.as_ref().and_then(|m| m.users.clone())) {
        None => view! { <div class="spinner"></div> }.into_any(),
        Some(users) if users.is_empty() => view! { <p class="table__empty">"No users in this role"</p> }.into_any(),
        Some(users) => view! {
            <ul class="member-list">
                {users
                    .into_iter()
                    .map(|u| {
                        view! {
                            <li class="member-list__item">
                                <span class="avatar avatar--sm">{format::initials(&u.name)}</span>
                                <span class="member-list__name">{u.name}</span>
                                <span class="member-list__email">{u.email}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    };
    view! {
        <Modal title=title on_close=Callback::new(move |()| members.set(None))>
            {body}
        </Modal>
    }
}
