//! Page slicing and the windowed page-number strip.
//!
//! Page numbers are 1-based throughout. Only `window_size` consecutive page
//! buttons are exposed at once; the window moves in whole blocks.

use std::ops::{Range, RangeInclusive};

use tracing::debug;

/// Number of page buttons shown at once.
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// `max(1, ceil(len / page_size))`.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// First page of the aligned window containing `page`.
pub fn window_start_for(page: usize, window_size: usize) -> usize {
    let window_size = window_size.max(1);
    (page.max(1) - 1) / window_size * window_size + 1
}

/// Everything the renderer needs to draw the pager for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Bounds of the displayed slice within the filtered sequence.
    pub range: Range<usize>,
    pub total_items: usize,
    pub total_pages: usize,
    /// Requested page after clamping into `1..=total_pages`.
    pub current_page: usize,
    pub window_start: usize,
    pub window_end: usize,
    pub range_label: String,
}

impl PageWindow {
    /// Page numbers to render as buttons.
    pub fn pages(&self) -> RangeInclusive<usize> {
        self.window_start..=self.window_end
    }

    pub fn has_previous_window(&self) -> bool {
        self.window_start > 1
    }

    pub fn has_next_window(&self) -> bool {
        self.window_end < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// One page of a sequence plus its pager metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub window: PageWindow,
}

/// Slices `filtered` to the requested page.
///
/// `current_page` is clamped rather than rejected. The window is kept when it
/// still contains the clamped page, otherwise it snaps to the aligned window
/// that does.
pub fn paginate<T>(
    filtered: &[T],
    page_size: usize,
    current_page: usize,
    window_start: usize,
    window_size: usize,
) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let window_size = window_size.max(1);
    let total_items = filtered.len();
    let total_pages = total_pages(total_items, page_size);
    let current_page = current_page.clamp(1, total_pages);

    let mut window_start = window_start.max(1);
    if window_start > total_pages
        || current_page < window_start
        || current_page >= window_start + window_size
    {
        window_start = window_start_for(current_page, window_size);
    }
    let window_end = (window_start + window_size - 1).min(total_pages);

    let start = ((current_page - 1) * page_size).min(total_items);
    let end = (current_page * page_size).min(total_items);

    Page {
        items: &filtered[start..end],
        window: PageWindow {
            range: start..end,
            total_items,
            total_pages,
            current_page,
            window_start,
            window_end,
            range_label: range_label(start, end, total_items),
        },
    }
}

fn range_label(start: usize, end: usize, total: usize) -> String {
    if start == end {
        format!("Showing 0 of {}", total)
    } else {
        format!("Showing {}-{} of {}", start + 1, end, total)
    }
}

/// Page cursor for the current result set.
///
/// `page_size` and `window_size` survive result-set changes; the cursor does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_size: usize,
    window_size: usize,
    current_page: usize,
    window_start: usize,
}

impl PaginationState {
    pub fn new(page_size: usize, window_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            window_size: window_size.max(1),
            current_page: 1,
            window_start: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Back to page 1. Called whenever the filtered sequence changes.
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.window_start = 1;
    }

    /// Changes the page size and resets the cursor. Zero is ignored.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            debug!("Ignoring page size of zero");
            return false;
        }
        self.page_size = page_size;
        self.reset();
        true
    }

    /// Jumps to `page` if it exists; out-of-range pages are ignored.
    pub fn goto_page(&mut self, page: usize, total_items: usize) -> bool {
        let total = total_pages(total_items, self.page_size);
        if page < 1 || page > total {
            debug!(page, total, "Ignoring out-of-range page");
            return false;
        }
        self.current_page = page;
        self.window_start = window_start_for(page, self.window_size);
        true
    }

    pub fn next_page(&mut self, total_items: usize) -> bool {
        self.goto_page(self.current_page + 1, total_items)
    }

    pub fn previous_page(&mut self, total_items: usize) -> bool {
        self.current_page > 1 && self.goto_page(self.current_page - 1, total_items)
    }

    /// Shifts the window forward one block and lands on its first page.
    /// The new start is clamped to the last page.
    pub fn next_window(&mut self, total_items: usize) -> bool {
        let total = total_pages(total_items, self.page_size);
        let start = (self.window_start + self.window_size).min(total);
        if start == self.window_start {
            return false;
        }
        self.window_start = start;
        self.current_page = start;
        true
    }

    /// Shifts the window back one block, stopping at page 1.
    pub fn previous_window(&mut self, total_items: usize) -> bool {
        let total = total_pages(total_items, self.page_size);
        let start = self
            .window_start
            .min(total)
            .saturating_sub(self.window_size)
            .max(1);
        if start == self.window_start {
            return false;
        }
        self.window_start = start;
        self.current_page = start;
        true
    }

    /// The page of `filtered` this cursor points at.
    pub fn page<'a, T>(&self, filtered: &'a [T]) -> Page<'a, T> {
        paginate(
            filtered,
            self.page_size,
            self.current_page,
            self.window_start,
            self.window_size,
        )
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(12, DEFAULT_WINDOW_SIZE)
    }
}
