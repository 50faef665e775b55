//! Generation-counter debouncing for search input.
//!
//! Each keystroke schedules a ticket and starts a timer; when the timer fires
//! it proceeds only if its ticket is still the latest. No timer is ever
//! cancelled, superseded ones simply find themselves stale.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Quiet period after the last keystroke before a search fetch.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    /// Supersede any pending ticket and return a new one.
    pub fn schedule(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.generation
    }

    /// Invalidate the pending ticket without issuing a new one.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }
}
