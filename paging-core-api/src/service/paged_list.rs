use async_trait::async_trait;

use crate::domain::page::PageData;
use crate::domain::pagination::Pagination;
use crate::error::ApiResult;

/// A paginated list data source.
///
/// This is the boundary a list view talks to: it sends its current
/// [`Pagination`] and receives one page of items plus the total record
/// count. Implementations decide how the sort specification is applied
/// and what an out-of-range page yields.
///
/// # Example
/// ```ignore
/// let page = source.fetch_page(&pagination).await?;
/// pagination.set_total(page.total);
/// ```
#[async_trait]
pub trait PagedList<T>: Send + Sync {
    /// Fetch the page described by `pagination`.
    ///
    /// # Arguments
    /// * `pagination` - 1-based page number, page size and optional sort
    ///
    /// # Returns
    /// * `Ok(PageData<T>)` - the requested page and the total record count
    /// * `Err` - a data-source failure
    async fn fetch_page(&self, pagination: &Pagination) -> ApiResult<PageData<T>>;
}
