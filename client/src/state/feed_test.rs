use super::*;

#[test]
fn chunks_advance_offset() {
    let mut feed = FeedState::<u8>::new(2);
    assert_eq!(feed.begin_next(), Some((2, 0)));
    assert_eq!(feed.begin_next(), None);
    feed.apply(Ok(vec![1, 2]));
    assert!(feed.has_more);
    assert_eq!(feed.begin_next(), Some((2, 2)));
}

#[test]
fn short_chunk_exhausts_feed() {
    let mut feed = FeedState::<u8>::new(2);
    feed.begin_next();
    feed.apply(Ok(vec![1]));
    assert!(!feed.has_more);
    assert_eq!(feed.begin_next(), None);
}

#[test]
fn failure_allows_retry() {
    let mut feed = FeedState::<u8>::new(2);
    feed.begin_next();
    feed.apply(Err(ApiError::Network("offline".to_owned())));
    assert!(feed.error.is_some());
    assert_eq!(feed.begin_next(), Some((2, 0)));
}

#[test]
fn reset_starts_over() {
    let mut feed = FeedState::<u8>::new(2);
    feed.begin_next();
    feed.apply(Ok(vec![1]));
    feed.reset();
    assert!(feed.items.is_empty());
    assert_eq!(feed.begin_next(), Some((2, 0)));
}
