//! Leptos binding of a paginated list endpoint to a `ListState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list view creates one `ListBinding` and drives it from its inputs.
//! The binding owns the fetch lifecycle: debounced search, immediate
//! page/filter fetches, optional polling, and sequence-checked application
//! of responses. Timers stop when the owning view unmounts.

#[cfg(test)]
#[path = "list_binding_test.rs"]
mod list_binding_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use super::debounce::Debouncer;
use super::notify::Notifier;
use super::page_size::{PAGINATION_LIMIT_KEY, resolve_page_size};
use crate::net::api::ApiClient;
use crate::state::listing::{ApplyOutcome, FetchTrigger, ListState};

pub struct ListBinding<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState<T>>,
    path: StoredValue<String>,
    api: StoredValue<ApiClient>,
    notifier: Notifier,
    fallback: &'static str,
    debouncer: StoredValue<Debouncer>,
    alive: StoredValue<Arc<AtomicBool>>,
}

impl<T: Send + Sync + 'static> Clone for ListBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListBinding<T> {}

impl<T> ListBinding<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Bind `path` with an initial page size. `fallback` is the toast shown
    /// when a fetch fails without a server message.
    pub fn new(path: impl Into<String>, page_size: u64, fallback: &'static str) -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let flag = alive.clone();
        on_cleanup(move || flag.store(false, Ordering::Relaxed));
        Self {
            state: RwSignal::new(ListState::new(page_size)),
            path: StoredValue::new(path.into()),
            api: StoredValue::new(expect_context::<ApiClient>()),
            notifier: expect_context::<Notifier>(),
            fallback,
            debouncer: StoredValue::new(Debouncer::default()),
            alive: StoredValue::new(alive),
        }
    }

    fn is_alive(self) -> bool {
        self.alive.try_with_value(|a| a.load(Ordering::Relaxed)).unwrap_or(false)
    }

    /// Fetch once after mount (effects never run during SSR).
    pub fn load_on_mount(self) {
        Effect::new(move || self.refresh());
    }

    /// Issue a fetch for the current query now.
    pub fn refresh(self) {
        if !self.is_alive() {
            return;
        }
        let Some((seq, query)) = self.state.try_update(ListState::begin_fetch) else {
            return;
        };
        let (Some(api), Some(path)) = (self.api.try_get_value(), self.path.try_get_value()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api.list::<T>(&path, &query).await;
            if let Some(ApplyOutcome::Failed(err)) = self.state.try_update(|s| s.apply(seq, result)) {
                self.notifier.report_failure(&err, self.fallback);
            }
        });
    }

    fn trigger(self, trigger: FetchTrigger) {
        match trigger {
            FetchTrigger::Immediate => {
                self.debouncer.try_update_value(Debouncer::cancel);
                self.refresh();
            }
            FetchTrigger::Debounced => self.debounce(),
        }
    }

    fn debounce(self) {
        let Some(ticket) = self.debouncer.try_update_value(Debouncer::schedule) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let delay = std::time::Duration::from_millis(u64::from(super::debounce::SEARCH_DEBOUNCE_MS));
            gloo_timers::future::sleep(delay).await;
            let current = self.debouncer.try_with_value(|d| d.is_current(ticket)).unwrap_or(false);
            if current {
                self.refresh();
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    }

    pub fn set_search(self, text: String) {
        if let Some(trigger) = self.state.try_update(|s| s.set_search(text)) {
            self.trigger(trigger);
        }
    }

    pub fn set_filter(self, key: &'static str, value: String) {
        if let Some(trigger) = self.state.try_update(|s| s.set_filter(key, value)) {
            self.trigger(trigger);
        }
    }

    pub fn set_page(self, page: u64) {
        if let Some(trigger) = self.state.try_update(|s| s.set_page(page)) {
            self.trigger(trigger);
        }
    }

    /// Back to page 1 with an immediate fetch, for filters applied client-side.
    pub fn restart(self) {
        if let Some(trigger) = self.state.try_update(ListState::restart) {
            self.trigger(trigger);
        }
    }

    pub fn set_page_size(self, size: u64) {
        if let Some(trigger) = self.state.try_update(|s| s.set_page_size(size)) {
            self.trigger(trigger);
        }
    }

    /// Re-fetch every `interval` until unmount.
    pub fn poll_every(self, interval: std::time::Duration) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(interval).await;
                if !self.is_alive() {
                    break;
                }
                self.refresh();
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = interval;
    }

    /// Look up the `pagination_limit` config entry and switch to it when it
    /// differs from the current page size.
    pub fn adopt_config_page_size(self, fallback: u64) {
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        Effect::new(move || {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let size = match api.configs_by_key(PAGINATION_LIMIT_KEY).await {
                    Ok(configs) => resolve_page_size(&configs, fallback),
                    Err(_) => return,
                };
                let current = self.state.try_with_untracked(|s| s.query.limit);
                if current.is_some_and(|c| c != size) {
                    self.set_page_size(size);
                }
            });
        });
    }
}
