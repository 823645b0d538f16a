//! Page metadata derived from offset, limit and total.

use crate::domain::repositories::DEFAULT_PAGE_SIZE;

/// Pagination metadata for one page of a list.
///
/// The page number is always derived from the offset, so page-based and
/// offset-based requests report consistently. With zero results,
/// `has_previous` still follows the offset: an offset past the first page
/// reports a previous page even though nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u64,
    pub limit: u32,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageInfo {
    /// Computes page metadata. A `limit` of 0 is treated as the default page size.
    pub fn compute(offset: u64, limit: u32, total: u64) -> Self {
        let limit = if limit == 0 { DEFAULT_PAGE_SIZE } else { limit };
        let per_page = u64::from(limit);

        let page = (offset / per_page).saturating_add(1);
        let total_pages = total.div_ceil(per_page);

        Self {
            page,
            limit,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }
}
