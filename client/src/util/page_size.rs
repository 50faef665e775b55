//! Page size override from the `pagination_limit` config entry.

#[cfg(test)]
#[path = "page_size_test.rs"]
mod page_size_test;

use crate::net::types::Config;

pub const PAGINATION_LIMIT_KEY: &str = "pagination_limit";
/// Default page size for report-style lists.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Default page size for user and role management lists.
pub const COMPACT_PAGE_SIZE: u64 = 5;

/// Page size from the `pagination_limit` entry, or `fallback` when the entry
/// is absent, non-numeric, or not positive.
#[must_use]
pub fn resolve_page_size(configs: &[Config], fallback: u64) -> u64 {
    configs
        .iter()
        .find(|c| c.config_key == PAGINATION_LIMIT_KEY)
        .and_then(|c| c.main_value.trim().parse::<i64>().ok())
        .and_then(|n| u64::try_from(n).ok())
        .filter(|n| *n > 0)
        .unwrap_or(fallback)
}
