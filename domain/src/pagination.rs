use std::ops::Range;

/// Bounded page cursor over a list of `item_count` items.
///
/// The page index can be moved by buttons (`next`/`previous`) or reported back
/// by a scrolling carousel (`sync_to`/`sync_to_scroll`). Both paths clamp to
/// the valid range, so the index never points past the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    item_count: usize,
    page_size: usize,
    current: usize,
}

impl Pager {
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            item_count,
            page_size: page_size.max(1),
            current: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Zero for an empty list
    pub fn page_count(&self) -> usize {
        self.item_count.div_ceil(self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Item indices on the given page, empty when the page does not exist
    pub fn page_range(&self, page: usize) -> Range<usize> {
        let start = page.saturating_mul(self.page_size).min(self.item_count);
        let end = start.saturating_add(self.page_size).min(self.item_count);
        start..end
    }

    pub fn current_range(&self) -> Range<usize> {
        self.page_range(self.current)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.page_count()
    }

    /// Returns false when already on the last page
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Returns false when already on the first page
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Adopt a page index reported from outside, clamped to the last page.
    /// Returns whether the current page changed.
    pub fn sync_to(&mut self, page: usize) -> bool {
        let clamped = page.min(self.page_count().saturating_sub(1));
        let changed = clamped != self.current;
        self.current = clamped;
        changed
    }

    /// Adopt the page a carousel is scrolled to, one viewport per page
    pub fn sync_to_scroll(&mut self, scroll_left: f64, viewport_width: f64) -> bool {
        if !viewport_width.is_finite() || viewport_width <= 0.0 || !scroll_left.is_finite() {
            return false;
        }
        let page = (scroll_left.max(0.0) / viewport_width).round() as usize;
        self.sync_to(page)
    }

    /// Update the item count, keeping the current page when it still exists
    pub fn resize(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.sync_to(self.current);
    }
}
