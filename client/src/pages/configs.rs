//! System configuration: typed key/value entries with change history.
//!
//! DESIGN
//! ======
//! Values are validated against their declared `DataType` before saving.
//! Edits carry an optional change reason that the backend records in the
//! entry's history.

use leptos::prelude::*;

use crate::components::dialog::{ConfirmDialog, FormError, Modal};
use crate::components::loading::ListBody;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::net::api::ApiClient;
use crate::net::endpoints::{CONFIGS_PATH, CONFIG_TYPE_FILTER};
use crate::net::types::{Config, ConfigHistory, DataType};
use crate::state::drafts::ConfigDraft;
use crate::state::form::{ConfirmState, FormState};
use crate::state::listing::Spinner;
use crate::util::format;
use crate::util::list_binding::ListBinding;
use crate::util::notify::Notifier;
use crate::util::page_size::DEFAULT_PAGE_SIZE;

#[derive(Clone)]
struct HistoryView {
    config_key: String,
    entries: Option<Vec<ConfigHistory>>,
}

#[component]
pub fn ConfigsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();

    let list = ListBinding::<Config>::new(CONFIGS_PATH, DEFAULT_PAGE_SIZE, "Failed to fetch configs");
    list.load_on_mount();

    let form = RwSignal::new(FormState::<ConfigDraft>::default());
    let confirm = RwSignal::new(ConfirmState::<Config>::default());
    let history = RwSignal::new(None::<HistoryView>);

    let api_save = api.clone();
    let save = Callback::new(move |()| {
        let Some(Ok(payload)) = form.try_update(FormState::begin_save) else {
            return;
        };
        let create = form.with_untracked(|f| f.mode.is_add());
        let api = api_save.clone();
        leptos::task::spawn_local(async move {
            match api.save_config(&payload, create).await {
                Ok(()) => {
                    form.try_update(FormState::save_succeeded);
                    notifier.success(if create { "Config added successfully" } else { "Config updated successfully" });
                    list.refresh();
                }
                Err(e) => notifier.form_failure(form, &e, "Failed to save config"),
            }
        });
    });

    let api_delete = api.clone();
    let delete = Callback::new(move |()| {
        let Some(Some(config)) = confirm.try_update(ConfirmState::confirm) else {
            return;
        };
        let api = api_delete.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_config(config.id).await;
            if notifier.report(&result, "Config deleted successfully", "Failed to delete config") {
                list.refresh();
            }
        });
    });

    let open_history = Callback::new(move |config: Config| {
        history.set(Some(HistoryView { config_key: config.config_key.clone(), entries: None }));
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.config_history(config.id).await {
                Ok(entries) => {
                    history.try_update(|h| {
                        if let Some(h) = h {
                            h.entries = Some(entries);
                        }
                    });
                }
                Err(e) => {
                    history.try_set(None);
                    notifier.report_failure(&e, "Failed to load config history");
                }
            }
        });
    });

    let rows = move || {
        let items = list.state.with(|s| s.items.clone());
        if items.is_empty() {
            return view! {
                <tr>
                    <td colspan="7" class="table__empty">
                        "No configs found"
                    </td>
                </tr>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|config| {
                let edit_config = config.clone();
                let delete_config = config.clone();
                let history_config = config.clone();
                view! {
                    <tr>
                        <td class="table__strong table__mono">{config.config_key.clone()}</td>
                        <td>
                            <span class="badge">{config.data_type.as_str()}</span>
                        </td>
                        <td class="table__mono">{config.main_value.clone()}</td>
                        <td class="table__mono table__muted">{config.alternative_value.clone()}</td>
                        <td>
                            <span class=if config.is_active { "status status--active" } else { "status status--inactive" }>
                                {if config.is_active { "Active" } else { "Inactive" }}
                            </span>
                        </td>
                        <td class="table__muted">
                            {format::format_datetime(config.updated_at.as_deref().or(config.created_at.as_deref()), "-")}
                        </td>
                        <td class="table__actions">
                            <button class="btn btn--sm" on:click=move |_| open_history.run(history_config.clone())>
                                "History"
                            </button>
                            <button
                                class="btn btn--sm"
                                on:click=move |_| form.update(|f| f.open_edit(ConfigDraft::from(&edit_config)))
                            >
                                "Edit"
                            </button>
                            <button
                                class="btn btn--sm btn--danger"
                                on:click=move |_| confirm.update(|c| c.request(delete_config.clone()))
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
                    placeholder="Search config keys..."
                />
                <select
                    class="select"
                    prop:value=move || list.state.with(|s| s.filter(CONFIG_TYPE_FILTER).to_owned())
                    on:change=move |ev| list.set_filter(CONFIG_TYPE_FILTER, event_target_value(&ev))
                >
                    <option value="">"All Types"</option>
                    {DataType::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn--primary" on:click=move |_| form.update(FormState::open_add)>
                    "Add Config"
                </button>
            </div>
            <ListBody spinner=Signal::derive(move || list.state.with(|s| s.spinner()))>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Key"</th>
                            <th>"Type"</th>
                            <th>"Main Value"</th>
                            <th>"Alternative"</th>
                            <th>"Status"</th>
                            <th>"Updated"</th>
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
                <ConfigForm form=form on_save=save />
            </Show>
            <Show when=move || confirm.with(ConfirmState::is_open)>
                <ConfirmDialog
                    title="Delete Config"
                    message=Signal::derive(move || {
                        let key = confirm.with(|c| c.pending().map(|c| c.config_key.clone()).unwrap_or_default());
                        format!("Are you sure you want to delete \"{key}\"?")
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
fn ConfigForm(form: RwSignal<FormState<ConfigDraft>>, on_save: Callback<()>) -> impl IntoView {
    let is_add = form.with_untracked(|f| f.mode.is_add());
    let identity_locked = form.with_untracked(|f| !ConfigDraft::identity_editable(f.mode));
    let close = Callback::new(move |()| form.update(FormState::close));

    view! {
        <Modal title=if is_add { "Add Config" } else { "Edit Config" } on_close=close>
            <form on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }>
                <label class="dialog__label">
                    "Config Key"
                    <input
                        class="dialog__input"
                        type="text"
                        disabled=identity_locked
                        prop:value=move || form.with(|f| f.draft.config_key.clone())
                        on:input=move |ev| form.update(|f| f.draft.config_key = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Data Type"
                    <select
                        class="dialog__input"
                        disabled=identity_locked
                        prop:value=move || form.with(|f| f.draft.data_type.as_str())
                        on:change=move |ev| {
                            if let Some(t) = DataType::parse(&event_target_value(&ev)) {
                                form.update(|f| f.draft.data_type = t);
                            }
                        }
                    >
                        {DataType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Main Value"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.draft.main_value.clone())
                        on:input=move |ev| form.update(|f| f.draft.main_value = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Alternative Value"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.draft.alternative_value.clone())
                        on:input=move |ev| form.update(|f| f.draft.alternative_value = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        rows="2"
                        prop:value=move || form.with(|f| f.draft.description.clone())
                        on:input=move |ev| form.update(|f| f.draft.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || !is_add>
                    <label class="dialog__label">
                        "Change Reason"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Why is this value changing?"
                            prop:value=move || form.with(|f| f.draft.change_reason.clone())
                            on:input=move |ev| form.update(|f| f.draft.change_reason = event_target_value(&ev))
                        />
                    </label>
                </Show>
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
    let title =
        history.with_untracked(|h| h.as_ref().map(|h| format!("History: {}", h.config_key)).unwrap_or_default());
    let body = move || match history.with(|h| h.as_ref().and_then(|h| h.entries.clone())) {
        None => view! { <div class="spinner"></div> }.into_any(),
        Some(entries) if entries.is_empty() => view! { <p class="table__empty">"No changes recorded"</p> }.into_any(),
        Some(entries) => view! {
            <table class="table table--compact">
                <thead>
                    <tr>
                        <th>"Changed"</th>
                        <th>"Old Value"</th>
                        <th>"New Value"</th>
                        <th>"Reason"</th>
                        <th>"By"</th>
                    </tr>
                </thead>
                <tbody>
                    {entries
                        .into_iter()
                        .map(|e| {
                            view! {
                                <tr>
                                    <td>{format::format_datetime(e.changed_at.as_deref(), "-")}</td>
                                    <td class="table__mono">{e.old_value}</td>
                                    <td class="table__mono">{e.new_value}</td>
                                    <td>{e.change_reason}</td>
                                    <td>{e.changed_by}</td>
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
