//! Weight summary built server-side from an uploaded spreadsheet.
//!
//! Nothing is persisted: the report lives in page state until the next upload.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::SummaryReport;
use crate::state::summary::{ReportStats, detail_anchor, format_weight};
use crate::util::notify::Notifier;

#[cfg(feature = "hydrate")]
const HIGHLIGHT_MS: u64 = 2000;

#[component]
pub fn SummaryReportPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();

    let file_name = RwSignal::new(None::<String>);
    let processing = RwSignal::new(false);
    let report = RwSignal::new(None::<SummaryReport>);
    let highlighted = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    let picked = StoredValue::new_local(None::<web_sys::File>);

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let file = input.files().and_then(|files| files.get(0));
            file_name.set(file.as_ref().map(web_sys::File::name));
            picked.set_value(file);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let process = move |_| {
        if processing.get_untracked() {
            return;
        }
        if file_name.with_untracked(Option::is_none) {
            notifier.error("Please select a file first");
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = picked.get_value() else {
                notifier.error("Please select a file first");
                return;
            };
            processing.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.upload_summary(&file).await;
                processing.try_set(false);
                if notifier.report(&result, "Report generated successfully", "Failed to process file") {
                    report.try_set(result.ok());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &api;
    };

    let jump_to = move |finish_date: String| {
        let anchor = detail_anchor(&finish_date);
        #[cfg(feature = "hydrate")]
        {
            if let Some(row) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(&anchor))
            {
                row.scroll_into_view();
            }
            let target = anchor.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(HIGHLIGHT_MS)).await;
                highlighted.try_update(|h| {
                    if h.as_deref() == Some(target.as_str()) {
                        *h = None;
                    }
                });
            });
        }
        highlighted.set(Some(anchor));
    };

    let stats = move || {
        report.with(|r| r.as_ref().map(ReportStats::from_report)).map(|s| {
            view! {
                <div class="stat-grid">
                    <div class="stat-card">
                        <span class="stat-card__label">"TOTAL WEIGHT"</span>
                        <span class="stat-card__value">{format_weight(s.total_weight)}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"TOTAL TASKS"</span>
                        <span class="stat-card__value">{s.task_count}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"TOTAL DAYS"</span>
                        <span class="stat-card__value">{s.total_days}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"PERIOD"</span>
                        <span class="stat-card__value stat-card__value--small">{s.period}</span>
                    </div>
                </div>
            }
        })
    };

    let summary_rows = move || {
        let rows = report.with(|r| r.as_ref().map(|r| r.summary.clone()).unwrap_or_default());
        if rows.is_empty() {
            return view! {
                <tr>
                    <td colspan="3" class="table__empty">"No summary rows"</td>
                </tr>
            }
            .into_any();
        }
        rows.into_iter()
            .zip(1..)
            .map(|(row, n)| {
                let date = row.finish_date.clone();
                view! {
                    <tr class="table__row--link" on:click=move |_| jump_to(date.clone())>
                        <td class="table__muted">{n}</td>
                        <td>{row.finish_date.clone()}</td>
                        <td class="table__amount">{format_weight(row.total_weight)}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    let detail_rows = move || {
        let rows = report.with(|r| r.as_ref().map(|r| r.detail.clone()).unwrap_or_default());
        if rows.is_empty() {
            return view! {
                <tr>
                    <td colspan="4" class="table__empty">"No detail rows"</td>
                </tr>
            }
            .into_any();
        }
        let mut previous = None::<String>;
        rows.into_iter()
            .map(|row| {
                let opens_group = previous.as_deref() != Some(row.finish_date.as_str());
                previous = Some(row.finish_date.clone());
                let anchor = opens_group.then(|| detail_anchor(&row.finish_date));
                let watched = anchor.clone();
                let lit = move || watched.is_some() && highlighted.with(|h| *h == watched);
                let badge = if row.is_total() {
                    view! { <span class="badge badge--success">"Daily Total"</span> }.into_any()
                } else {
                    view! { <span class="badge">{row.sheet_name.clone()}</span> }.into_any()
                };
                view! {
                    <tr id=anchor class:table__row--total=row.is_total() class:table__row--highlight=lit>
                        <td>{row.finish_date.clone()}</td>
                        <td>{row.task_name.clone()}</td>
                        <td>{badge}</td>
                        <td class="table__amount">{format_weight(row.weight)}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="page">
            <div class="page__toolbar">
                <label class="btn">
                    "Choose File"
                    <input type="file" accept=".xlsx,.xls" class="visually-hidden" on:change=on_file />
                </label>
                <span class="table__muted">{move || file_name.get().unwrap_or_else(|| "No file selected".to_owned())}</span>
                <button class="btn btn--primary" disabled=move || processing.get() on:click=process>
                    {move || if processing.get() { "Processing..." } else { "Process" }}
                </button>
            </div>
            <Show
                when=move || report.with(Option::is_some)
                fallback=|| view! { <p class="table__empty">"Upload an Excel workbook to build the report"</p> }
            >
                {stats}
                <h3 class="page__subtitle">"Summary"</h3>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Finish Date"</th>
                            <th>"Total Weight"</th>
                        </tr>
                    </thead>
                    <tbody>{summary_rows}</tbody>
                </table>
                <h3 class="page__subtitle">"Detail"</h3>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Finish Date"</th>
                            <th>"Task"</th>
                            <th>"Sheet"</th>
                            <th>"Weight"</th>
                        </tr>
                    </thead>
                    <tbody>{detail_rows}</tbody>
                </table>
            </Show>
        </section>
    }
}
