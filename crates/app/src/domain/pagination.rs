//! Page/limit normalisation for list endpoints.

/// Page size used when the caller asks for none or an invalid one.
pub const DEFAULT_LIMIT: u32 = 20;

/// Upper bound on page size.
pub const MAX_LIMIT: u32 = 100;

/// A normalised, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Page below 1 becomes 1, limit below 1 becomes [`DEFAULT_LIMIT`], and
    /// limit above [`MAX_LIMIT`] is clamped.
    #[must_use]
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        let page = page.filter(|page| *page >= 1).unwrap_or(1);

        let limit = limit
            .filter(|limit| *limit >= 1)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);

        Self { page, limit }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus the totals needed to render pagination controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            items,
            page: pagination.page(),
            limit: pagination.limit(),
            total,
            total_pages: total.div_ceil(u64::from(pagination.limit())),
        }
    }
}
