//! Page-number windowing shared by every list view.
//!
//! DESIGN
//! ======
//! Pure arithmetic over `(current, total_items, page_size)`. The component in
//! `components::pagination` renders whatever `PaginationView` says; it never
//! computes bounds itself.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Maximum number of numbered page buttons shown at once.
pub const PAGE_WINDOW: u64 = 7;

/// Number of pages needed for `total_items` rows at `page_size` per page.
#[must_use]
pub fn total_pages(total_items: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Everything the pagination bar needs to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    pub current: u64,
    pub total_pages: u64,
    pub pages: Vec<u64>,
    pub first_disabled: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub last_disabled: bool,
    /// 1-based index of the first row on this page (0 when empty).
    pub showing_from: u64,
    pub showing_to: u64,
    pub total_items: u64,
}

impl PaginationView {
    #[must_use]
    pub fn compute(current: u64, total_items: u64, page_size: u64) -> Self {
        let total_pages = total_pages(total_items, page_size);
        if total_pages == 0 {
            return Self {
                current,
                total_pages,
                pages: Vec::new(),
                first_disabled: true,
                prev_disabled: true,
                next_disabled: true,
                last_disabled: true,
                showing_from: 0,
                showing_to: 0,
                total_items,
            };
        }

        let current = current.clamp(1, total_pages);
        let mut start = current.saturating_sub(PAGE_WINDOW / 2).max(1);
        let mut end = start + PAGE_WINDOW - 1;
        if end > total_pages {
            end = total_pages;
            start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
        }
        let (showing_from, showing_to) = showing_range(current, page_size, total_items);

        Self {
            current,
            total_pages,
            pages: (start..=end).collect(),
            first_disabled: current == 1,
            prev_disabled: current == 1,
            next_disabled: current == total_pages,
            last_disabled: current == total_pages,
            showing_from,
            showing_to,
            total_items,
        }
    }

    /// "Showing X to Y of Z entries".
    #[must_use]
    pub fn label(&self) -> String {
        format!("Showing {} to {} of {} entries", self.showing_from, self.showing_to, self.total_items)
    }
}

/// Inclusive 1-based row range displayed on `page`.
#[must_use]
pub fn showing_range(page: u64, page_size: u64, total_items: u64) -> (u64, u64) {
    if total_items == 0 || page_size == 0 || page == 0 {
        return (0, 0);
    }
    let from = (page - 1) * page_size + 1;
    let to = (page * page_size).min(total_items);
    if from > total_items {
        return (0, 0);
    }
    (from, to)
}
