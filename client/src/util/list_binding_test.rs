use std::sync::Arc;

use leptos::prelude::*;

use leptos::reactive::owner::Owner;

use super::*;
use crate::net::api::TokenSource;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

struct NoSession;

impl TokenSource for NoSession {
    fn token(&self) -> Option<String> {
        None
    }
}

fn with_binding(test: impl FnOnce(ListBinding<u8>)) {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(ApiClient::new("http://api.test", Arc::new(NoSession)));
        provide_context(Notifier::new(
            RwSignal::new(ToastState::default()),
            RwSignal::new(SessionState::default()),
        ));
        test(ListBinding::new("/api/users", 10, "Failed to fetch users"));
    });
}

#[test]
fn typing_abc_leaves_one_pending_search_for_the_final_text() {
    with_binding(|binding| {
        for text in ["a", "ab", "abc"] {
            binding.set_search(text.to_owned());
        }
        let debouncer = binding.debouncer.get_value();
        let live: Vec<u64> = (1..=3).filter(|t| debouncer.is_current(*t)).collect();
        assert_eq!(live, vec![3]);
        binding.state.with_untracked(|s| {
            assert_eq!(s.query.search, "abc");
            assert_eq!(s.query.page, 1);
            assert!(!s.loading);
        });
    });
}
