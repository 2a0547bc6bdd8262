//! Pagination types for list queries.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 10;
/// Default upper bound for the page size.
const DEFAULT_MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
///
/// `page_size` is clamped to `[1, max_page_size]` when deriving
/// skip/take, so a hostile or sloppy client can never request an
/// oversized page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based; values below 1 are treated as 1).
    #[serde(default = "default_page_number")]
    pub page_number: u64,
    /// Requested number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Upper bound for `page_size`. Overridable per request, but keep a
    /// sane default.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl PageRequest {
    /// Create a page request with the default `max_page_size`.
    pub fn new(page_number: u64, page_size: u64) -> Self {
        Self {
            page_number,
            page_size,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }

    /// Number of items to take after clamping; always at least 1 and
    /// never above `max_page_size`. A `max_page_size` below 1 is
    /// treated as 1.
    pub fn take(&self) -> u64 {
        self.page_size.clamp(1, self.max_page_size.max(1))
    }

    /// Number of items to skip; never negative.
    pub fn skip(&self) -> u64 {
        (self.page_number.max(1) - 1) * self.take()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper returning items and counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of matching items across all pages.
    pub total_count: u64,
    /// Current page number (1-based).
    pub page_number: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of pages; 0 when there are no items.
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// Create a paginated response, deriving `total_pages`.
    pub fn new(items: Vec<T>, total_count: u64, page_number: u64, page_size: u64) -> Self {
        let total_pages = if total_count == 0 || page_size == 0 {
            0
        } else {
            total_count.div_ceil(page_size)
        };
        Self {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
        }
    }

    /// Create an empty response for the given request.
    pub fn empty(page: &PageRequest) -> Self {
        Self::new(Vec::new(), 0, page.page_number.max(1), page.take())
    }
}

fn default_page_number() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> u64 {
    DEFAULT_MAX_PAGE_SIZE
}
