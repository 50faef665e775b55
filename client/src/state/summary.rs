//! Headline figures derived from an uploaded summary report.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::net::types::SummaryReport;

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const PERIOD_DATE: &[BorrowedFormatItem<'_>] =
    format_description!("[day padding:none] [month repr:short] [year]");

#[derive(Clone, Debug, PartialEq)]
pub struct ReportStats {
    pub total_weight: f64,
    /// Task lines, daily totals excluded.
    pub task_count: usize,
    pub total_days: usize,
    /// `10 Jan 2025 - 14 Jan 2025`, a single date, or `-`.
    pub period: String,
}

impl ReportStats {
    #[must_use]
    pub fn from_report(report: &SummaryReport) -> Self {
        let total_weight = report.summary.iter().map(|r| r.total_weight).sum();
        let task_count = report.detail.iter().filter(|r| !r.is_total()).count();
        let dates = report.summary.iter().filter_map(|r| Date::parse(r.finish_date.trim(), ISO_DATE).ok());
        let (first, last) = dates.fold((None::<Date>, None::<Date>), |(lo, hi), d| {
            (Some(lo.map_or(d, |lo| lo.min(d))), Some(hi.map_or(d, |hi| hi.max(d))))
        });
        let period = match (first, last) {
            (Some(a), Some(b)) if a == b => show(a),
            (Some(a), Some(b)) => format!("{} - {}", show(a), show(b)),
            _ => "-".to_owned(),
        };
        Self { total_weight, task_count, total_days: report.summary.len(), period }
    }
}

fn show(date: Date) -> String {
    date.format(PERIOD_DATE).unwrap_or_default()
}

/// DOM id of the first detail row of `finish_date`, the scroll target of a
/// summary row.
#[must_use]
pub fn detail_anchor(finish_date: &str) -> String {
    let slug: String = finish_date
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    format!("detail-date-{slug}")
}

/// Two-decimal weight display.
#[must_use]
pub fn format_weight(weight: f64) -> String {
    format!("{weight:.2}")
}
