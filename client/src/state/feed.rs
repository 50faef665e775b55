//! Offset-paged "load more" feed (profile activity).

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::error::ApiError;

pub const FEED_PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug)]
pub struct FeedState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub has_more: bool,
    pub error: Option<ApiError>,
    page_size: u32,
}

impl<T> FeedState<T> {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self { items: Vec::new(), loading: false, has_more: true, error: None, page_size: page_size.max(1) }
    }

    /// Start loading the next chunk; returns `(limit, offset)` or `None` when
    /// a load is running or the feed is exhausted.
    pub fn begin_next(&mut self) -> Option<(u32, u32)> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        let offset = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        Some((self.page_size, offset))
    }

    /// Append a chunk. A short chunk marks the feed exhausted.
    pub fn apply(&mut self, result: Result<Vec<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(chunk) => {
                self.has_more = chunk.len() >= self.page_size as usize;
                self.items.extend(chunk);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// Drop everything and start over from offset 0.
    pub fn reset(&mut self) {
        self.items.clear();
        self.loading = false;
        self.has_more = true;
        self.error = None;
    }
}
