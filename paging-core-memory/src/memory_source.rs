use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use paging_core_api::domain::page::PageData;
use paging_core_api::domain::pagination::Pagination;
use paging_core_api::domain::sort::{SortOrder, SortSpec};
use paging_core_api::error::ApiResult;
use paging_core_api::service::paged_list::PagedList;

type Comparator<T> = fn(&T, &T) -> Ordering;

/// In-memory paginated list source.
///
/// Holds the full collection and serves it one page at a time: order by
/// the registered key named in the pagination's sort specification, skip
/// `(index - 1) * size` items, take `size`. A page past the end of the
/// collection yields an empty list with the total still filled in.
///
/// # Example
/// ```ignore
/// let source = InMemorySource::new(accounts)
///     .with_sort_key("name", |a: &Account, b: &Account| a.name.cmp(&b.name));
/// let page = source.fetch_page(&pagination).await?;
/// ```
pub struct InMemorySource<T> {
    items: Vec<T>,
    sort_keys: HashMap<String, Comparator<T>>,
}

impl<T> InMemorySource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            sort_keys: HashMap::new(),
        }
    }

    /// Register a comparator under a sort field name. A descending sort
    /// reverses it.
    pub fn with_sort_key(mut self, field: &str, compare: Comparator<T>) -> Self {
        self.sort_keys.insert(field.to_string(), compare);
        self
    }
}

impl<T: Clone> InMemorySource<T> {
    /// Clone the collection in the requested order. A sort naming an
    /// unregistered field is ignored, keeping the source as tolerant as
    /// the pagination state that feeds it.
    fn ordered(&self, sort: Option<&SortSpec>) -> Vec<T> {
        let mut items = self.items.clone();
        if let Some(spec) = sort {
            match self.sort_keys.get(spec.by.as_str()) {
                Some(&compare) => {
                    items.sort_by(|a, b| match spec.order {
                        SortOrder::Asc => compare(a, b),
                        SortOrder::Desc => compare(a, b).reverse(),
                    });
                }
                None => {
                    tracing::warn!(field = %spec.by, "ignoring unknown sort field");
                }
            }
        }
        items
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> PagedList<T> for InMemorySource<T> {
    async fn fetch_page(&self, pagination: &Pagination) -> ApiResult<PageData<T>> {
        let total = self.items.len() as i64;
        let offset = (pagination.index() - 1) * pagination.size();

        tracing::debug!(
            index = pagination.index(),
            size = pagination.size(),
            total,
            "serving page"
        );

        let list = self
            .ordered(pagination.sort_spec())
            .into_iter()
            .skip(offset as usize)
            .take(pagination.size() as usize)
            .collect();

        Ok(PageData::new(list, total))
    }
}
