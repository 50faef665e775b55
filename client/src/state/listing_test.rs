use super::*;

fn page(ids: &[i64], total: u64) -> Page<i64> {
    Page { data: ids.to_vec(), total }
}

#[test]
fn query_pairs_skip_blank_search_and_filters() {
    let mut query = ListQuery::new(5);
    query.filters.insert("roleId".to_owned(), String::new());
    assert_eq!(query.query_pairs(), vec![("page".to_owned(), "1".to_owned()), ("limit".to_owned(), "5".to_owned())]);
}

#[test]
fn filter_change_on_page_three_resets_to_page_one() {
    let mut state = ListState::<i64>::new(10);
    state.set_page(3);
    assert_eq!(state.query.page, 3);
    assert_eq!(state.set_filter("roleId", "2"), FetchTrigger::Immediate);
    assert_eq!(state.query.page, 1);
    assert_eq!(state.filter("roleId"), "2");
}

#[test]
fn search_resets_page_and_is_debounced() {
    let mut state = ListState::<i64>::new(10);
    state.set_page(4);
    assert_eq!(state.set_search("ad"), FetchTrigger::Debounced);
    assert_eq!(state.query.page, 1);
}

#[test]
fn page_size_change_resets_page() {
    let mut state = ListState::<i64>::new(10);
    state.set_page(2);
    state.set_page_size(25);
    assert_eq!(state.query.limit, 25);
    assert_eq!(state.query.page, 1);
}

#[test]
fn clearing_a_filter_removes_it() {
    let mut state = ListState::<i64>::new(10);
    state.set_filter("type", "json");
    state.set_filter("type", "");
    assert_eq!(state.filter("type"), "");
    assert!(state.query.filters.is_empty());
}

#[test]
fn only_latest_response_is_applied() {
    let mut state = ListState::<i64>::new(10);
    let (first, _) = state.begin_fetch();
    let (second, _) = state.begin_fetch();

    assert_eq!(state.apply(second, Ok(page(&[2], 1))), ApplyOutcome::Applied);
    assert_eq!(state.apply(first, Ok(page(&[1, 1], 2))), ApplyOutcome::Stale);
    assert_eq!(state.items, vec![2]);
    assert_eq!(state.total, 1);
}

#[test]
fn responses_replace_rows() {
    let mut state = ListState::<i64>::new(10);
    let (seq, _) = state.begin_fetch();
    state.apply(seq, Ok(page(&[1, 2, 3], 3)));
    let (seq, _) = state.begin_fetch();
    state.apply(seq, Ok(page(&[9], 1)));
    assert_eq!(state.items, vec![9]);
}

#[test]
fn spinner_is_full_page_until_first_completion() {
    let mut state = ListState::<i64>::new(10);
    assert_eq!(state.spinner(), Spinner::None);
    let (seq, _) = state.begin_fetch();
    assert_eq!(state.spinner(), Spinner::FullPage);
    state.apply(seq, Err(ApiError::Network("offline".to_owned())));
    assert!(!state.first_load);
    state.begin_fetch();
    assert_eq!(state.spinner(), Spinner::Overlay);
}

#[test]
fn failure_keeps_previous_rows() {
    let mut state = ListState::<i64>::new(10);
    let (seq, _) = state.begin_fetch();
    state.apply(seq, Ok(page(&[1], 1)));
    let (seq, _) = state.begin_fetch();
    let outcome = state.apply(seq, Err(ApiError::Unauthorized));
    assert_eq!(outcome, ApplyOutcome::Failed(ApiError::Unauthorized));
    assert_eq!(state.items, vec![1]);
    assert!(!state.loading);
}

#[test]
fn begin_fetch_snapshots_query() {
    let mut state = ListState::<i64>::new(10);
    state.set_search("abc");
    let (_, query) = state.begin_fetch();
    state.set_search("zzz");
    assert_eq!(query.search, "abc");
}

#[test]
fn pagination_reflects_total() {
    let mut state = ListState::<i64>::new(10);
    let (seq, _) = state.begin_fetch();
    state.apply(seq, Ok(page(&[], 47)));
    state.set_page(5);
    let view = state.pagination();
    assert_eq!(view.total_pages, 5);
    assert_eq!(view.label(), "Showing 41 to 47 of 47 entries");
}

#[test]
fn client_side_filter_change_on_page_three_restarts_at_page_one() {
    let mut state = ListState::<i64>::new(5);
    state.set_page(3);
    assert_eq!(state.restart(), FetchTrigger::Immediate);
    assert_eq!(state.query.page, 1);
    assert_eq!(state.begin_fetch().1.page, 1);
}

#[test]
fn last_page_of_forty_seven_holds_seven_rows() {
    let mut state = ListState::<i64>::new(10);
    state.set_page(5);
    let (seq, query) = state.begin_fetch();
    assert_eq!(query.query_pairs()[0], ("page".to_owned(), "5".to_owned()));
    state.apply(seq, Ok(page(&[41, 42, 43, 44, 45, 46, 47], 47)));
    assert_eq!(state.items.len(), 7);
    assert_eq!(state.items.first(), Some(&41));
    let view = state.pagination();
    assert_eq!(view.total_pages, 5);
    assert!(view.next_disabled);
    assert_eq!(view.label(), "Showing 41 to 47 of 47 entries");
}
