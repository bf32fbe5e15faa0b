use serde::{Deserialize, Serialize};

use super::page_event::PageEvent;
use super::sort::SortSpec;

/// Pagination state carried between a list view and a paginated-list
/// data source.
///
/// The object is always valid: a page number or page size below 1 is
/// clamped on write and a malformed sort specification degrades to "no
/// sort". No setter ever signals an error.
///
/// # Example
/// ```
/// use paging_core_api::domain::pagination::Pagination;
///
/// let mut pagination = Pagination::new();
/// pagination.set_index(0); // clamped
/// pagination.set_sort("created_at desc");
///
/// assert_eq!(pagination.index(), 1);
/// assert_eq!(pagination.sort().as_deref(), Some("created_at desc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PaginationInit", into = "PaginationInit")]
pub struct Pagination {
    index: i64,
    size: i64,
    total: i64,
    sort: Option<SortSpec>,
}

impl Pagination {
    pub const DEFAULT_PAGE_SIZE: i64 = 10;

    /// Create pagination state for the first page:
    /// `index = 1, size = 10, total = 0`, no sort.
    pub fn new() -> Self {
        Self {
            index: 1,
            size: Self::DEFAULT_PAGE_SIZE,
            total: 0,
            sort: None,
        }
    }

    /// Current page number (1-based).
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Set the page number. Values below 1 are stored as 1; no upper
    /// bound is enforced, the data source constrains it through `total`.
    pub fn set_index(&mut self, value: i64) {
        self.index = value.max(1);
    }

    /// Items requested per page.
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Set the page size. Values below 1 are stored as 1.
    pub fn set_size(&mut self, value: i64) {
        self.size = value.max(1);
    }

    /// Total record count across all pages.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Set the total record count. Informational only, stored as given.
    pub fn set_total(&mut self, value: i64) {
        self.total = value;
    }

    /// Current sort in `"<field> <asc|desc>"` form, if any.
    pub fn sort(&self) -> Option<String> {
        self.sort.as_ref().map(SortSpec::to_string)
    }

    /// Structured view of the current sort, for consumers that order by
    /// it without re-parsing.
    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Replace the sort specification.
    ///
    /// Accepts `"<field> <asc|desc>"`; anything else (including `None`
    /// and the empty string) clears the current sort. A rejected value
    /// never leaves the previous sort behind.
    pub fn set_sort<'a>(&mut self, value: impl Into<Option<&'a str>>) {
        self.sort = value.into().and_then(SortSpec::parse);
    }

    /// Adopt page number, page size and (when present) total from a
    /// paginator event, through the usual clamping setters.
    pub fn apply_event(&mut self, event: &PageEvent) {
        self.set_index(event.page_index);
        self.set_size(event.page_size);
        if let Some(length) = event.length {
            self.set_total(length);
        }
    }

    pub fn with_index(mut self, value: i64) -> Self {
        self.set_index(value);
        self
    }

    pub fn with_size(mut self, value: i64) -> Self {
        self.set_size(value);
        self
    }

    pub fn with_total(mut self, value: i64) -> Self {
        self.set_total(value);
        self
    }

    pub fn with_sort<'a>(mut self, value: impl Into<Option<&'a str>>) -> Self {
        self.set_sort(value);
        self
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial initial values for [`Pagination`].
///
/// Every present field is applied through the corresponding validating
/// setter, so seeding follows the same rules as later mutation. Also
/// serves as the deserialization shape of `Pagination`, keeping its
/// invariants intact on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationInit {
    pub index: Option<i64>,
    pub size: Option<i64>,
    pub total: Option<i64>,
    pub sort: Option<String>,
}

impl From<PaginationInit> for Pagination {
    fn from(init: PaginationInit) -> Self {
        let mut pagination = Pagination::new();
        if let Some(index) = init.index {
            pagination.set_index(index);
        }
        if let Some(size) = init.size {
            pagination.set_size(size);
        }
        if let Some(total) = init.total {
            pagination.set_total(total);
        }
        if let Some(sort) = init.sort {
            pagination.set_sort(sort.as_str());
        }
        pagination
    }
}

impl From<Pagination> for PaginationInit {
    fn from(pagination: Pagination) -> Self {
        let sort = pagination.sort();
        Self {
            index: Some(pagination.index),
            size: Some(pagination.size),
            total: Some(pagination.total),
            sort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_construction() {
        let pagination = Pagination::new();

        assert_eq!(pagination.index(), 1);
        assert_eq!(pagination.size(), 10);
        assert_eq!(pagination.total(), 0);
        assert_eq!(pagination.sort(), None);
    }

    #[test]
    fn test_index_clamps_to_one() {
        let mut pagination = Pagination::new();

        for value in [-100, -1, 0] {
            pagination.set_index(value);
            assert_eq!(pagination.index(), 1);
        }
        for value in [1, 2, 7000] {
            pagination.set_index(value);
            assert_eq!(pagination.index(), value);
        }
    }

    #[test]
    fn test_size_clamps_to_one() {
        let mut pagination = Pagination::new();

        for value in [-100, -1, 0] {
            pagination.set_size(value);
            assert_eq!(pagination.size(), 1);
        }
        for value in [1, 25, 500] {
            pagination.set_size(value);
            assert_eq!(pagination.size(), value);
        }
    }

    #[test]
    fn test_sort_round_trip() {
        let mut pagination = Pagination::new();

        for spec in ["name asc", "created_at desc", "x desc"] {
            pagination.set_sort(spec);
            assert_eq!(pagination.sort().as_deref(), Some(spec));
        }
    }

    #[test]
    fn test_invalid_sort_clears() {
        let mut pagination = Pagination::new();

        for bad in ["", "name", "name ascending", "name  asc", " desc"] {
            pagination.set_sort("name asc");
            pagination.set_sort(bad);
            assert_eq!(pagination.sort(), None, "input {bad:?} should clear the sort");
        }

        pagination.set_sort("name asc");
        pagination.set_sort(None);
        assert_eq!(pagination.sort(), None);
    }

    #[test]
    fn test_seeding_routes_through_setters() {
        let pagination = Pagination::from(PaginationInit {
            index: Some(0),
            size: Some(-5),
            sort: Some("createdAt desc".to_string()),
            ..Default::default()
        });

        assert_eq!(pagination.index(), 1);
        assert_eq!(pagination.size(), 1);
        assert_eq!(pagination.total(), 0);
        assert_eq!(pagination.sort().as_deref(), Some("createdAt desc"));
    }

    #[test]
    fn test_builder_style_seeding() {
        let pagination = Pagination::new()
            .with_index(3)
            .with_size(0)
            .with_total(120)
            .with_sort("balance desc");

        assert_eq!(pagination.index(), 3);
        assert_eq!(pagination.size(), 1);
        assert_eq!(pagination.total(), 120);
        assert_eq!(pagination.sort().as_deref(), Some("balance desc"));
    }

    #[test]
    fn test_deserialize_keeps_invariants() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pagination: Pagination =
            serde_json::from_str(r#"{"index": 0, "size": -5, "sort": "createdAt desc"}"#)?;

        assert_eq!(pagination.index(), 1);
        assert_eq!(pagination.size(), 1);
        assert_eq!(pagination.sort().as_deref(), Some("createdAt desc"));

        let pagination: Pagination = serde_json::from_str("{}")?;
        assert_eq!(pagination, Pagination::new());
        Ok(())
    }

    #[test]
    fn test_serde_round_trip() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pagination = Pagination::new()
            .with_index(3)
            .with_total(40)
            .with_sort("name desc");

        let json = serde_json::to_string(&pagination)?;
        let back: Pagination = serde_json::from_str(&json)?;

        assert_eq!(back, pagination);
        Ok(())
    }

    #[test]
    fn test_apply_event() {
        let mut pagination = Pagination::new().with_sort("name asc");

        pagination.apply_event(&PageEvent {
            page_index: 4,
            previous_page_index: Some(3),
            page_size: 25,
            length: Some(92),
        });

        assert_eq!(pagination.index(), 4);
        assert_eq!(pagination.size(), 25);
        assert_eq!(pagination.total(), 92);
        // Sort is untouched by page navigation.
        assert_eq!(pagination.sort().as_deref(), Some("name asc"));

        pagination.apply_event(&PageEvent {
            page_index: 0,
            previous_page_index: None,
            page_size: 0,
            length: None,
        });

        assert_eq!(pagination.index(), 1);
        assert_eq!(pagination.size(), 1);
        assert_eq!(pagination.total(), 92);
    }
}
