//! Client workspaces (tenants): list, status filter, add/edit/delete.

use leptos::prelude::*;

use crate::components::dialog::{ConfirmDialog, FormError, Modal};
use crate::components::loading::ListBody;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::net::api::ApiClient;
use crate::net::endpoints::WORKSPACES_PATH;
use crate::net::types::Workspace;
use crate::state::drafts::WorkspaceDraft;
use crate::state::form::{ConfirmState, FormState};
use crate::state::listing::Spinner;
use crate::util::list_binding::ListBinding;
use crate::util::notify::Notifier;
use crate::util::page_size::DEFAULT_PAGE_SIZE;

pub const WORKSPACE_STATUSES: [&str; 2] = ["active", "inactive"];

#[component]
pub fn WorkspacesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();

    let list = ListBinding::<Workspace>::new(WORKSPACES_PATH, DEFAULT_PAGE_SIZE, "Failed to fetch workspaces");
    list.load_on_mount();

    let form = RwSignal::new(FormState::<WorkspaceDraft>::default());
    let confirm = RwSignal::new(ConfirmState::<Workspace>::default());

    let api_save = api.clone();
    let save = Callback::new(move |()| {
        let Some(Ok(payload)) = form.try_update(FormState::begin_save) else {
            return;
        };
        let create = form.with_untracked(|f| f.mode.is_add());
        let api = api_save.clone();
        leptos::task::spawn_local(async move {
            match api.save_workspace(&payload, create).await {
                Ok(()) => {
                    form.try_update(FormState::save_succeeded);
                    notifier.success(if create { "Workspace added successfully" } else { "Workspace updated successfully" });
                    list.refresh();
                }
                Err(e) => notifier.form_failure(form, &e, "Failed to save workspace"),
            }
        });
    });

    let delete = Callback::new(move |()| {
        let Some(Some(ws)) = confirm.try_update(ConfirmState::confirm) else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_workspace(ws.id).await;
            if notifier.report(&result, "Workspace deleted successfully", "Failed to delete workspace") {
                list.refresh();
            }
        });
    });

    let rows = move || {
        let items = list.state.with(|s| s.items.clone());
        if items.is_empty() {
            return view! {
                <tr>
                    <td colspan="6" class="table__empty">
                        "No workspaces found"
                    </td>
                </tr>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|ws| {
                let edit_ws = ws.clone();
                let delete_ws = ws.clone();
                let active = ws.status == "active";
                view! {
                    <tr>
                        <td class="table__mono">{ws.code.clone()}</td>
                        <td>
                            <div class="user-cell__name">{ws.name.clone()}</div>
                            <div class="user-cell__email">{ws.description.clone()}</div>
                        </td>
                        <td>{ws.contact_email.clone()}</td>
                        <td class="table__muted">{ws.address.clone()}</td>
                        <td>
                            <span class=if active { "status status--active" } else { "status status--inactive" }>
                                {if active { "Active" } else { "Inactive" }}
                            </span>
                        </td>
                        <td class="table__actions">
                            <button
                                class="btn btn--sm"
                                on:click=move |_| form.update(|f| f.open_edit(WorkspaceDraft::from(&edit_ws)))
                            >
                                "Edit"
                            </button>
                            <button
                                class="btn btn--sm btn--danger"
                                on:click=move |_| confirm.update(|c| c.request(delete_ws.clone()))
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
                    placeholder="Search workspaces..."
                />
                <select
                    class="select"
                    prop:value=move || list.state.with(|s| s.filter("status").to_owned())
                    on:change=move |ev| list.set_filter("status", event_target_value(&ev))
                >
                    <option value="">"All Status"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
                <button class="btn btn--primary" on:click=move |_| form.update(FormState::open_add)>
                    "Add Workspace"
                </button>
            </div>
            <ListBody spinner=Signal::derive(move || list.state.with(|s| s.spinner()))>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Code"</th>
                            <th>"Name"</th>
                            <th>"Contact"</th>
                            <th>"Address"</th>
                            <th>"Status"</th>
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
                <WorkspaceForm form=form on_save=save />
            </Show>
            <Show when=move || confirm.with(ConfirmState::is_open)>
                <ConfirmDialog
                    title="Delete Workspace"
                    message=Signal::derive(move || {
                        let name = confirm.with(|c| c.pending().map(|w| w.name.clone()).unwrap_or_default());
                        format!("Are you sure you want to delete {name}?")
                    })
                    on_confirm=delete
                    on_cancel=Callback::new(move |()| confirm.update(ConfirmState::cancel))
                />
            </Show>
        </section>
    }
}

#[component]
fn WorkspaceForm(form: RwSignal<FormState<WorkspaceDraft>>, on_save: Callback<()>) -> impl IntoView {
    let title = if form.with_untracked(|f| f.mode.is_add()) { "Add Workspace" } else { "Edit Workspace" };
    let close = Callback::new(move |()| form.update(FormState::close));

    view! {
        <Modal title=title on_close=close>
            <form on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }>
                <div class="dialog__row">
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
                        "Code"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.with(|f| f.draft.code.clone())
                            on:input=move |ev| form.update(|f| f.draft.code = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.draft.description.clone())
                        on:input=move |ev| form.update(|f| f.draft.description = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Contact Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || form.with(|f| f.draft.contact_email.clone())
                        on:input=move |ev| form.update(|f| f.draft.contact_email = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Address"
                    <textarea
                        class="dialog__input"
                        rows="2"
                        prop:value=move || form.with(|f| f.draft.address.clone())
                        on:input=move |ev| form.update(|f| f.draft.address = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.draft.status.clone())
                        on:change=move |ev| form.update(|f| f.draft.status = event_target_value(&ev))
                    >
                        {WORKSPACE_STATUSES
                            .into_iter()
                            .map(|s| view! { <option value=s>{s}</option> })
                            .collect_view()}
                    </select>
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
