use super::*;

fn user(active: bool) -> User {
    User { id: 1, name: "A".to_owned(), is_active: active, ..User::default() }
}

#[test]
fn status_filter_parses_known_values() {
    assert_eq!(StatusFilter::parse("active"), StatusFilter::Active);
    assert_eq!(StatusFilter::parse("inactive"), StatusFilter::Inactive);
    assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
    assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
}

#[test]
fn status_filter_matches_on_active_flag() {
    assert!(StatusFilter::All.matches(&user(false)));
    assert!(StatusFilter::Active.matches(&user(true)));
    assert!(!StatusFilter::Active.matches(&user(false)));
    assert!(StatusFilter::Inactive.matches(&user(false)));
    assert!(!StatusFilter::Inactive.matches(&user(true)));
}
