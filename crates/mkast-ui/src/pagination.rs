//! Page arithmetic shared by the main grid and the admin list

use std::ops::Range;

/// Number of pages needed for `total` items; never less than one
pub fn page_count(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size).max(1)
}

/// A page cursor over a list whose length is supplied on each call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
}

impl Pagination {
    pub const fn new(page_size: usize) -> Self {
        Self {
            current_page: 0,
            page_size: if page_size == 0 { 1 } else { page_size },
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, total: usize) -> usize {
        page_count(total, self.page_size)
    }

    /// Move by `delta` pages if the target page starts inside the list.
    ///
    /// Returns whether the page changed.
    pub fn change_page(&mut self, delta: i32, total: usize) -> bool {
        let target = self.current_page as i64 + i64::from(delta);
        if target < 0 {
            return false;
        }
        let target = target as usize;
        match target.checked_mul(self.page_size) {
            Some(start) if start < total => {
                self.current_page = target;
                true
            }
            _ => false,
        }
    }

    /// Pull the cursor back after the list shrank
    pub fn clamp(&mut self, total: usize) {
        let count = self.page_count(total);
        if self.current_page >= count {
            self.current_page = count - 1;
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 0;
    }

    /// Indices shown on the current page
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.current_page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        (self.current_page + 1) * self.page_size < total
    }
}
