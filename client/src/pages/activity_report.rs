//! Audit trail of user actions, filtered by user and date range.

use leptos::prelude::*;

use crate::components::loading::ListBody;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::net::api::ApiClient;
use crate::net::endpoints::{ACTIVITY_LOGS_PATH, USERS_PATH};
use crate::net::types::{ActivityLog, User};
use crate::state::listing::Spinner;
use crate::util::list_binding::ListBinding;
use crate::util::notify::Notifier;
use crate::util::page_size::DEFAULT_PAGE_SIZE;
use crate::util::{download, format};

const USER_FILTER: &str = "userId";
const START_DATE: &str = "startDate";
const END_DATE: &str = "endDate";

#[component]
pub fn ActivityReportPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();

    let list = ListBinding::<ActivityLog>::new(ACTIVITY_LOGS_PATH, DEFAULT_PAGE_SIZE, "Failed to load activity logs");
    let today = format::today_iso();
    list.state.update(|s| {
        s.query.filters.insert(START_DATE.to_owned(), today.clone());
        s.query.filters.insert(END_DATE.to_owned(), today);
    });
    list.load_on_mount();

    let exporting = RwSignal::new(false);
    let api_export = api.clone();
    let export = move |_| {
        if exporting.get_untracked() {
            return;
        }
        exporting.set(true);
        notifier.info("Preparing export...");
        let query = list.state.with_untracked(|s| s.query.clone());
        let api = api_export.clone();
        leptos::task::spawn_local(async move {
            let result = api.export_activity_logs(&query).await;
            exporting.try_set(false);
            match result {
                Ok(csv) => {
                    let name = download::export_filename("activity_logs", format::now_local());
                    match download::save_text(&name, "text/csv", &csv) {
                        Ok(()) => notifier.success("Export downloaded"),
                        Err(e) => notifier.error(format!("Failed to export activity logs: {e}")),
                    }
                }
                Err(e) => notifier.report_failure(&e, "Failed to export activity logs"),
            }
        });
    };

    let users = RwSignal::new(Vec::<User>::new());
    Effect::new(move || {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.lookup::<User>(USERS_PATH).await {
                Ok(all) => {
                    users.try_set(all);
                }
                Err(e) => notifier.report_failure(&e, "Failed to fetch users"),
            }
        });
    });

    let rows = move || {
        let (items, offset) = list.state.with(|s| (s.items.clone(), (s.query.page.max(1) - 1) * s.query.limit));
        if items.is_empty() {
            return view! {
                <tr>
                    <td colspan="5" class="table__empty">
                        "No activity found for this period"
                    </td>
                </tr>
            }
            .into_any();
        }
        items
            .into_iter()
            .zip(offset + 1..)
            .map(|(log, n)| {
                let who = log.user_name.clone().unwrap_or_else(|| format!("User #{}", log.user_id));
                view! {
                    <tr>
                        <td class="table__muted">{n}</td>
                        <td>
                            <div class="user-cell__name">{who}</div>
                            <div class="user-cell__email">{log.user_email.clone().unwrap_or_default()}</div>
                        </td>
                        <td>
                            <span class="badge">{log.action.clone()}</span>
                        </td>
                        <td>{log.details.clone()}</td>
                        <td class="table__muted">{format::format_datetime(log.created_at.as_deref(), "-")}</td>
                    </tr>
                }
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
                    placeholder="Search activity..."
                />
                <select
                    class="select"
                    prop:value=move || list.state.with(|s| s.filter(USER_FILTER).to_owned())
                    on:change=move |ev| list.set_filter(USER_FILTER, event_target_value(&ev))
                >
                    <option value="">"All Users"</option>
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|u| view! { <option value=u.id.to_string()>{u.name}</option> })
                            .collect_view()
                    }}
                </select>
                <label class="date-field">
                    "From"
                    <input
                        type="date"
                        class="input"
                        prop:value=move || list.state.with(|s| s.filter(START_DATE).to_owned())
                        on:change=move |ev| list.set_filter(START_DATE, event_target_value(&ev))
                    />
                </label>
                <label class="date-field">
                    "To"
                    <input
                        type="date"
                        class="input"
                        prop:value=move || list.state.with(|s| s.filter(END_DATE).to_owned())
                        on:change=move |ev| list.set_filter(END_DATE, event_target_value(&ev))
                    />
                </label>
                <button class="btn" disabled=move || exporting.get() on:click=export>
                    {move || if exporting.get() { "Exporting..." } else { "Export CSV" }}
                </button>
            </div>
            <ListBody spinner=Signal::derive(move || list.state.with(|s| s.spinner()))>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"User"</th>
                            <th>"Action"</th>
                            <th>"Details"</th>
                            <th>"Time"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <Pagination
                    state=Signal::derive(move || list.state.with(|s| s.pagination()))
                    on_page=Callback::new(move |page| list.set_page(page))
                />
            </ListBody>
        </section>
    }
}
