//! Pagination types for list operations.
//!
//! Pages are 1-indexed to match the storefront's URL scheme. Out-of-range
//! page numbers are clamped rather than rejected, and an empty result set
//! still reports one (empty) page, so the clamp range `[1, total_pages]` is
//! always valid.

use serde::{Deserialize, Serialize};

/// A page of results together with the page number actually served.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// The 1-indexed page number actually served (after clamping).
    pub page: u32,
    /// The total number of pages. At least 1, even with no items.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Slices `items` into the requested page.
    ///
    /// `requested_page` is clamped into `[1, total_pages]`; page 0 serves
    /// page 1 and a page beyond the last serves the last page.
    /// `total_pages` is `ceil(items.len() / page_size)` with a floor of 1.
    ///
    /// # Panics
    ///
    /// Panics when `page_size` is zero; configuration loading rejects that
    /// value before any request is served.
    #[must_use]
    pub fn paginate(items: Vec<T>, requested_page: u32, page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");

        let total = items.len();
        let total_pages = (total.div_ceil(page_size)).max(1) as u32;
        let page = requested_page.clamp(1, total_pages);

        let start = (page as usize - 1) * page_size;
        let items = items
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect();

        Self {
            items,
            page,
            total_pages,
        }
    }

    /// Maps the page items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there is a page after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns true if there is a page before this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
