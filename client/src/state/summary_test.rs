use super::*;
use crate::net::types::{DetailRow, SummaryRow};

fn summary(date: &str, weight: f64) -> SummaryRow {
    SummaryRow { finish_date: date.to_owned(), total_weight: weight }
}

fn detail(date: &str, task: &str) -> DetailRow {
    DetailRow { finish_date: date.to_owned(), weight: 1.0, task_name: task.to_owned(), sheet_name: String::new() }
}

#[test]
fn stats_sum_weights_and_skip_daily_totals() {
    let report = SummaryReport {
        summary: vec![summary("2025-01-14", 2.5), summary("2025-01-10", 1.25)],
        detail: vec![
            detail("2025-01-10", "Total"),
            detail("2025-01-10", "Cutting"),
            detail("2025-01-14", "Total"),
            detail("2025-01-14", "Sewing"),
            detail("2025-01-14", "Packing"),
        ],
    };
    let stats = ReportStats::from_report(&report);
    assert!((stats.total_weight - 3.75).abs() < f64::EPSILON);
    assert_eq!(stats.task_count, 3);
    assert_eq!(stats.total_days, 2);
    assert_eq!(stats.period, "10 Jan 2025 - 14 Jan 2025");
}

#[test]
fn single_day_period_and_unparseable_dates() {
    let one = SummaryReport { summary: vec![summary("2025-03-02", 1.0)], detail: Vec::new() };
    assert_eq!(ReportStats::from_report(&one).period, "2 Mar 2025");

    let odd = SummaryReport { summary: vec![summary("Q1 week 3", 1.0)], detail: Vec::new() };
    assert_eq!(ReportStats::from_report(&odd).period, "-");
    assert_eq!(ReportStats::from_report(&SummaryReport::default()).period, "-");
}

#[test]
fn anchor_ids_are_dom_safe() {
    assert_eq!(detail_anchor("2025-01-10"), "detail-date-2025-01-10");
    assert_eq!(detail_anchor("10 Jan/25"), "detail-date-10-Jan25");
}

#[test]
fn weights_show_two_decimals() {
    assert_eq!(format_weight(3.0), "3.00");
    assert_eq!(format_weight(2.0 / 3.0), "0.67");
}
