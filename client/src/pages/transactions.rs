//! Workspace transactions, filtered by workspace and status.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use leptos::prelude::*;

use crate::components::loading::ListBody;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::net::api::ApiClient;
use crate::net::endpoints::{TRANSACTIONS_PATH, WORKSPACES_PATH};
use crate::net::types::{Transaction, Workspace};
use crate::state::listing::Spinner;
use crate::util::format;
use crate::util::list_binding::ListBinding;
use crate::util::notify::Notifier;
use crate::util::page_size::DEFAULT_PAGE_SIZE;

pub const TRANSACTION_STATUSES: [&str; 4] = ["completed", "pending", "failed", "cancelled"];

/// Badge class for a transaction status; unknown values get the neutral badge.
#[must_use]
pub fn status_class(status: &str) -> &'static str {
    match status {
        "completed" => "badge badge--success",
        "pending" => "badge badge--warning",
        "failed" => "badge badge--danger",
        "cancelled" => "badge badge--muted",
        _ => "badge",
    }
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();

    let list = ListBinding::<Transaction>::new(TRANSACTIONS_PATH, DEFAULT_PAGE_SIZE, "Failed to fetch transactions");
    list.load_on_mount();

    let workspaces = RwSignal::new(Vec::<Workspace>::new());
    Effect::new(move || {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.lookup::<Workspace>(WORKSPACES_PATH).await {
                Ok(all) => {
                    workspaces.try_set(all);
                }
                Err(e) => notifier.report_failure(&e, "Failed to fetch workspaces"),
            }
        });
    });

    let workspace_name = move |id: i64| {
        workspaces
            .with(|all| all.iter().find(|w| w.id == id).map(|w| w.name.clone()))
            .unwrap_or_else(|| format!("#{id}"))
    };

    let rows = move || {
        let items = list.state.with(|s| s.items.clone());
        if items.is_empty() {
            return view! {
                <tr>
                    <td colspan="7" class="table__empty">
                        "No transactions found"
                    </td>
                </tr>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|trx| {
                view! {
                    <tr>
                        <td>{format::format_date(Some(&trx.date))}</td>
                        <td class="table__mono">{trx.ref_no.clone()}</td>
                        <td>{workspace_name(trx.workspace_id)}</td>
                        <td>{trx.description.clone()}</td>
                        <td class="table__amount">{format::format_amount(trx.amount)}</td>
                        <td>
                            <span class=status_class(&trx.status)>{trx.status.clone()}</span>
                        </td>
                        <td class="table__muted">{trx.created_by.clone()}</td>
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
                    placeholder="Search reference or description..."
                />
                <select
                    class="select"
                    prop:value=move || list.state.with(|s| s.filter("workspaceId").to_owned())
                    on:change=move |ev| list.set_filter("workspaceId", event_target_value(&ev))
                >
                    <option value="">"All Workspaces"</option>
                    {move || {
                        workspaces
                            .get()
                            .into_iter()
                            .map(|w| view! { <option value=w.id.to_string()>{w.name}</option> })
                            .collect_view()
                    }}
                </select>
                <select
                    class="select"
                    prop:value=move || list.state.with(|s| s.filter("status").to_owned())
                    on:change=move |ev| list.set_filter("status", event_target_value(&ev))
                >
                    <option value="">"All Status"</option>
                    {TRANSACTION_STATUSES
                        .into_iter()
                        .map(|s| view! { <option value=s>{s}</option> })
                        .collect_view()}
                </select>
            </div>
            <ListBody spinner=Signal::derive(move || list.state.with(|s| s.spinner()))>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Ref No"</th>
                            <th>"Workspace"</th>
                            <th>"Description"</th>
                            <th>"Amount"</th>
                            <th>"Status"</th>
                            <th>"Created By"</th>
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
