use super::*;
use crate::state::listing::{FetchTrigger, ListState};

#[test]
fn rapid_typing_yields_one_fetch_with_final_text() {
    let mut state = ListState::<u8>::new(10);
    let mut debouncer = Debouncer::default();
    let mut tickets = Vec::new();
    for text in ["a", "ab", "abc"] {
        assert_eq!(state.set_search(text), FetchTrigger::Debounced);
        tickets.push(debouncer.schedule());
    }

    // Timers fire in order after the quiet period.
    let fetched: Vec<String> = tickets
        .into_iter()
        .filter(|t| debouncer.is_current(*t))
        .map(|_| state.begin_fetch().1.search)
        .collect();
    assert_eq!(fetched, vec!["abc".to_owned()]);
}

#[test]
fn cancel_invalidates_pending_ticket() {
    let mut debouncer = Debouncer::default();
    let ticket = debouncer.schedule();
    debouncer.cancel();
    assert!(!debouncer.is_current(ticket));
}
