//! Pagination of filtered results.

use serde::{Deserialize, Serialize};

/// Pagination window applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Maximum number of items returned (0 = unbounded).
    pub limit: usize,
    /// Number of leading matches skipped.
    pub offset: usize,
}

impl FilterOptions {
    /// Creates a window with the given limit and offset.
    #[must_use]
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Sets the limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the offset.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// Filtered, paginated items plus the number of matches before pagination.
///
/// `count >= items.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResult<T> {
    /// Matching items inside the pagination window, in input order.
    pub items: Vec<T>,
    /// Number of items that matched the filter, ignoring pagination.
    pub count: usize,
}

impl<T> FilterResult<T> {
    /// True when no item is inside the window.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Skips `offset` items, then keeps at most `limit` (0 = all).
///
/// An offset past the end yields an empty vector.
#[must_use]
pub fn paginate<T>(mut items: Vec<T>, options: &FilterOptions) -> Vec<T> {
    if options.offset >= items.len() {
        return Vec::new();
    }
    items.drain(..options.offset);
    if options.limit > 0 {
        items.truncate(options.limit);
    }
    items
}
