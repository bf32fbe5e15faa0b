use serde::{Deserialize, Serialize};

use super::pagination::Pagination;

/// One page of a paginated list plus the total record count.
///
/// Deserialization is tolerant: a response with either field absent
/// normalizes to an empty list and a zero total.
///
/// # Example
/// ```
/// use paging_core_api::domain::page::PageData;
/// use paging_core_api::domain::pagination::Pagination;
///
/// let page = PageData::new(vec![1, 2, 3], 100);
/// let pagination = Pagination::new().with_size(20);
///
/// assert!(page.has_more(&pagination));
/// assert_eq!(page.total_pages(&pagination), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData<T> {
    /// The items in this page
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    /// Total number of items across all pages
    #[serde(default)]
    pub total: i64,
}

impl<T> PageData<T> {
    pub fn new(list: Vec<T>, total: i64) -> Self {
        Self { list, total }
    }

    /// An empty page with nothing counted.
    pub fn empty() -> Self {
        Self {
            list: Vec::new(),
            total: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Check if pages remain after the one described by `pagination`.
    pub fn has_more(&self, pagination: &Pagination) -> bool {
        let offset = (pagination.index() - 1) * pagination.size();
        offset + (self.list.len() as i64) < self.total
    }

    /// Total number of pages at the pagination's page size.
    pub fn total_pages(&self, pagination: &Pagination) -> i64 {
        // size is clamped to >= 1, so the division is safe
        // div_ceil for signed ints is unstable; equivalent for size >= 1
        self.total / pagination.size() + (self.total % pagination.size() > 0) as i64
    }
}

impl<T> Default for PageData<T> {
    fn default() -> Self {
        Self::empty()
    }
}
