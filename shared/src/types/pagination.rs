//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_PAGE: u32 = 1;
pub(crate) const DEFAULT_PAGE_SIZE: u32 = 20;

/// Pagination request parameters
///
/// Values are stored as given; `PaginationDefaults::clamp` bounds them on request.
/// Both fields are unsigned integers, narrower than a plain JSON number:
/// negative or fractional values fail to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Create a pagination without adjusting the values
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Offset for storage queries
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Get the limit for storage queries
    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }
}

/// One page of results
///
/// `list` may be shorter than `page_size` on the last page; `total` counts
/// items across all pages. `total` is a `u64` and, like the page fields,
/// rejects negative or fractional numbers on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub list: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PaginatedResponse<T> {
    /// Create a paginated response
    pub fn new(list: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            list,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }

    /// Create an empty paginated response
    pub fn empty(pagination: Pagination) -> Self {
        Self::new(Vec::new(), pagination, 0)
    }

    /// Total number of pages, 0 when there is nothing to page over
    pub fn total_pages(&self) -> u64 {
        if self.total == 0 || self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }

    /// Whether there's a next page
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    /// Whether there's a previous page
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Pagination request that produced this page
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size)
    }

    /// Transform the items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            list: self.list.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_pagination() {
        let p = Pagination::default();
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, 20);
        assert!(p.is_first_page());
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_offset_and_limit() {
        let p = Pagination::new(3, 25);
        assert_eq!(p.offset(), 50);
        assert_eq!(p.limit(), 25);

        // page 0 is kept as given but does not underflow
        let zero = Pagination::new(0, 10);
        assert_eq!(zero.page, 0);
        assert_eq!(zero.offset(), 0);
    }

    #[test]
    fn test_pagination_wire_names() {
        let p: Pagination = serde_json::from_value(json!({"page": 2, "pageSize": 50})).unwrap();
        assert_eq!(p, Pagination::new(2, 50));
        assert_eq!(serde_json::to_value(p).unwrap(), json!({"page": 2, "pageSize": 50}));
    }

    #[test]
    fn test_last_page_shorter_than_page_size() {
        let page = PaginatedResponse::new(vec!["a", "b"], Pagination::new(3, 5), 12);
        assert_eq!(page.len(), 2);
        assert_eq!(page.total_pages(), 3);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn test_empty_page() {
        let page: PaginatedResponse<u8> = PaginatedResponse::empty(Pagination::default());
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_next());
        assert!(!page.has_prev());
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"list": [], "total": 0, "page": 1, "pageSize": 20})
        );
    }

    #[test]
    fn test_unsigned_fields_reject_negative_and_fractional_numbers() {
        assert!(serde_json::from_value::<Pagination>(json!({"page": -1, "pageSize": 20})).is_err());
        assert!(serde_json::from_value::<Pagination>(json!({"page": 1, "pageSize": 2.5})).is_err());
        assert!(serde_json::from_value::<PaginatedResponse<u8>>(
            json!({"list": [], "total": -3, "page": 1, "pageSize": 20})
        )
        .is_err());
    }

    #[test]
    fn test_zero_page_size_has_no_pages() {
        let page: PaginatedResponse<u8> = PaginatedResponse::new(vec![], Pagination::new(1, 0), 10);
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn test_map_items() {
        let page = PaginatedResponse::new(vec![1, 2, 3], Pagination::new(1, 3), 7)
            .map(|n| n * 10);
        assert_eq!(page.list, vec![10, 20, 30]);
        assert_eq!(page.total, 7);
        assert!(page.has_next());
        assert_eq!(page.pagination(), Pagination::new(1, 3));
    }
}
