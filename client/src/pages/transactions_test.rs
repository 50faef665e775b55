use super::*;

#[test]
fn known_statuses_get_distinct_badges() {
    let classes: Vec<_> = TRANSACTION_STATUSES.iter().map(|s| status_class(s)).collect();
    assert_eq!(classes[0], "badge badge--success");
    assert_eq!(classes[2], "badge badge--danger");
    let mut unique = classes.clone();
    unique.dedup();
    assert_eq!(unique.len(), TRANSACTION_STATUSES.len());
}

#[test]
fn unknown_status_falls_back_to_plain_badge() {
    assert_eq!(status_class("refunded"), "badge");
    assert_eq!(status_class(""), "badge");
}
