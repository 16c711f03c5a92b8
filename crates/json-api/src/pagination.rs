//! Query-string pagination.

use storefront_app::domain::pagination::Pagination;

/// Negative or oversized values fall back to the defaults.
pub(crate) fn from_query(page: Option<i64>, limit: Option<i64>) -> Pagination {
    Pagination::new(positive(page), positive(limit))
}

fn positive(value: Option<i64>) -> Option<u32> {
    value.and_then(|value| u32::try_from(value).ok())
}
