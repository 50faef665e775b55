use super::*;

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(47, 10), 5);
    assert_eq!(total_pages(50, 10), 5);
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(3, 0), 0);
}

#[test]
fn last_partial_page_shows_remaining_rows() {
    let view = PaginationView::compute(5, 47, 10);
    assert_eq!(view.total_pages, 5);
    assert_eq!((view.showing_from, view.showing_to), (41, 47));
    assert_eq!(view.label(), "Showing 41 to 47 of 47 entries");
    assert!(view.next_disabled);
    assert!(view.last_disabled);
    assert!(!view.prev_disabled);
}

#[test]
fn first_page_disables_back_controls() {
    let view = PaginationView::compute(1, 47, 10);
    assert!(view.first_disabled);
    assert!(view.prev_disabled);
    assert!(!view.next_disabled);
    assert_eq!(view.pages, vec![1, 2, 3, 4, 5]);
}

#[test]
fn zero_total_disables_everything() {
    let view = PaginationView::compute(1, 0, 10);
    assert_eq!(view.total_pages, 0);
    assert!(view.pages.is_empty());
    assert!(view.first_disabled && view.prev_disabled && view.next_disabled && view.last_disabled);
    assert_eq!(view.label(), "Showing 0 to 0 of 0 entries");
}

#[test]
fn window_centers_on_current_page() {
    let view = PaginationView::compute(10, 200, 10);
    assert_eq!(view.pages, vec![7, 8, 9, 10, 11, 12, 13]);
}

#[test]
fn window_clamps_at_the_end() {
    let view = PaginationView::compute(19, 200, 10);
    assert_eq!(view.pages, vec![14, 15, 16, 17, 18, 19, 20]);
}

#[test]
fn window_clamps_at_the_start() {
    let view = PaginationView::compute(2, 200, 10);
    assert_eq!(view.pages, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn single_page_disables_both_directions() {
    let view = PaginationView::compute(1, 4, 10);
    assert_eq!(view.pages, vec![1]);
    assert!(view.prev_disabled && view.next_disabled);
}

#[test]
fn out_of_range_page_is_clamped() {
    let view = PaginationView::compute(9, 47, 10);
    assert_eq!(view.current, 5);
}
