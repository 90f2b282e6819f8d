//! Page index bookkeeping for the news feed.

use std::ops::Range;

/// News items requested per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// What: Zero-based page index plus the total page count reported by the server.
///
/// Details:
/// - `total_pages` is never below 1, so an empty feed is a single page.
/// - Navigation helpers refuse to move below 0, past `total_pages - 1`, or onto the
///   current page; they return whether the page actually changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    page: u32,
    total_pages: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 0,
            total_pages: 1,
        }
    }
}

/// One control in the pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageButton {
    /// Go to the previous page.
    Prev {
        /// `false` at page 0.
        enabled: bool,
    },
    /// Jump to a specific page.
    Page {
        /// Zero-based page index.
        index: u32,
        /// Whether this is the page being shown.
        current: bool,
    },
    /// Go to the next page.
    Next {
        /// `false` at the last page.
        enabled: bool,
    },
}

impl PageState {
    /// Current zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Total number of pages (at least 1).
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Back to page 0 with a single assumed page, as on a fresh feed.
    pub const fn reset(&mut self) {
        self.page = 0;
        self.total_pages = 1;
    }

    /// What: Record the page count from a response; zero is treated as one.
    ///
    /// Output:
    /// - `true` when the current page fell out of range and was moved to the last page.
    pub fn set_total_pages(&mut self, total: u32) -> bool {
        self.total_pages = total.max(1);
        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
            true
        } else {
            false
        }
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn can_prev(&self) -> bool {
        self.page > 0
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages
    }

    /// What: Move to page `target` if it is in range and differs from the current page.
    ///
    /// Output:
    /// - `true` when the page changed and a fetch should follow.
    pub const fn go_to(&mut self, target: u32) -> bool {
        if target < self.total_pages && target != self.page {
            self.page = target;
            true
        } else {
            false
        }
    }

    /// Step back one page.
    pub const fn prev(&mut self) -> bool {
        if self.can_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one page.
    pub const fn next(&mut self) -> bool {
        if self.can_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Jump to the first page.
    pub const fn first(&mut self) -> bool {
        self.go_to(0)
    }

    /// Jump to the last page.
    pub const fn last(&mut self) -> bool {
        self.go_to(self.total_pages - 1)
    }

    /// What: Build the pagination bar: previous, the pages in `window`, next.
    ///
    /// Inputs:
    /// - `window`: Page indices to show, usually from [`visible_page_window`]; clipped
    ///   to `0..total_pages`.
    ///
    /// Output:
    /// - `Prev`/`Next` carry their enabled state; at most one `Page` is `current`.
    #[must_use]
    pub fn buttons(&self, window: Range<u32>) -> Vec<PageButton> {
        let window = window.start.min(self.total_pages)..window.end.min(self.total_pages);
        let mut out = Vec::with_capacity(window.len() + 2);
        out.push(PageButton::Prev {
            enabled: self.can_prev(),
        });
        out.extend(window.map(|index| PageButton::Page {
            index,
            current: index == self.page,
        }));
        out.push(PageButton::Next {
            enabled: self.can_next(),
        });
        out
    }
}

/// What: Choose which page numbers fit in a bar of limited width.
///
/// Inputs:
/// - `total`: Total page count.
/// - `current`: Current page index.
/// - `max_numbers`: How many page buttons fit (at least 1 is assumed).
///
/// Output:
/// - Contiguous half-open range of page indices containing `current`, as centred as
///   the bounds allow.
#[must_use]
pub fn visible_page_window(total: u32, current: u32, max_numbers: u32) -> Range<u32> {
    let max_numbers = max_numbers.max(1);
    if total <= max_numbers {
        return 0..total;
    }
    let half = max_numbers / 2;
    let start = current
        .saturating_sub(half)
        .min(total.saturating_sub(max_numbers));
    start..start + max_numbers
}
