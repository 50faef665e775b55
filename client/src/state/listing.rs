//! Remote list binding state: query parameters, rows, and fetch lifecycle.
//!
//! DESIGN
//! ======
//! One `ListState` per list view. Parameter setters report whether the change
//! should fetch now or after the search debounce; every issued fetch gets a
//! sequence number and only the latest one may replace the rows. Responses
//! always replace, never merge.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::collections::BTreeMap;

use super::pagination::PaginationView;
use crate::net::error::ApiError;
use crate::net::types::Page;

/// Parameters sent with a paginated GET.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u64,
    pub limit: u64,
    pub search: String,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    #[must_use]
    pub fn new(limit: u64) -> Self {
        Self { page: 1, limit, search: String::new(), filters: BTreeMap::new() }
    }

    /// Query-string pairs in send order. Blank search and blank filter values
    /// are omitted.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("page".to_owned(), self.page.to_string()), ("limit".to_owned(), self.limit.to_string())];
        if !self.search.is_empty() {
            pairs.push(("search".to_owned(), self.search.clone()));
        }
        pairs.extend(
            self.filters
                .iter()
                .filter(|(_, v)| !v.is_empty())
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        pairs
    }
}

/// When a parameter change should hit the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchTrigger {
    Immediate,
    Debounced,
}

/// Which loading indicator the view shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spinner {
    None,
    /// Nothing has loaded yet.
    FullPage,
    /// Rows are on screen and a refresh is running.
    Overlay,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer fetch was issued; the response was dropped.
    Stale,
    Failed(ApiError),
}

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub query: ListQuery,
    pub items: Vec<T>,
    pub total: u64,
    pub loading: bool,
    pub first_load: bool,
    pub error: Option<ApiError>,
    seq: u64,
}

impl<T> ListState<T> {
    #[must_use]
    pub fn new(page_size: u64) -> Self {
        Self {
            query: ListQuery::new(page_size),
            items: Vec::new(),
            total: 0,
            loading: false,
            first_load: true,
            error: None,
            seq: 0,
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) -> FetchTrigger {
        self.query.search = text.into();
        self.query.page = 1;
        FetchTrigger::Debounced
    }

    /// Set or clear (empty value) a filter parameter.
    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) -> FetchTrigger {
        let value = value.into();
        if value.is_empty() {
            self.query.filters.remove(key);
        } else {
            self.query.filters.insert(key.to_owned(), value);
        }
        self.query.page = 1;
        FetchTrigger::Immediate
    }

    #[must_use]
    pub fn filter(&self, key: &str) -> &str {
        self.query.filters.get(key).map_or("", String::as_str)
    }

    pub fn set_page(&mut self, page: u64) -> FetchTrigger {
        self.query.page = page.max(1);
        FetchTrigger::Immediate
    }

    /// A filter the view applies itself changed; start over from page 1.
    pub fn restart(&mut self) -> FetchTrigger {
        self.query.page = 1;
        FetchTrigger::Immediate
    }

    pub fn set_page_size(&mut self, size: u64) -> FetchTrigger {
        self.query.limit = size.max(1);
        self.query.page = 1;
        FetchTrigger::Immediate
    }

    /// Mark a fetch as issued; returns its sequence number and the query to send.
    pub fn begin_fetch(&mut self) -> (u64, ListQuery) {
        self.seq += 1;
        self.loading = true;
        (self.seq, self.query.clone())
    }

    /// Apply a completed fetch. Only the most recently issued sequence is
    /// accepted; older responses leave state untouched.
    pub fn apply(&mut self, seq: u64, result: Result<Page<T>, ApiError>) -> ApplyOutcome {
        if seq != self.seq {
            return ApplyOutcome::Stale;
        }
        self.loading = false;
        self.first_load = false;
        match result {
            Ok(page) => {
                self.items = page.data;
                self.total = page.total;
                self.error = None;
                ApplyOutcome::Applied
            }
            Err(e) => {
                self.error = Some(e.clone());
                ApplyOutcome::Failed(e)
            }
        }
    }

    #[must_use]
    pub fn spinner(&self) -> Spinner {
        match (self.loading, self.first_load) {
            (false, _) => Spinner::None,
            (true, true) => Spinner::FullPage,
            (true, false) => Spinner::Overlay,
        }
    }

    #[must_use]
    pub fn pagination(&self) -> PaginationView {
        PaginationView::compute(self.query.page, self.total, self.query.limit)
    }
}
