//! Server-side pagination metadata.
//!
//! The plays table and the public catalog are paginated by the backend,
//! which returns one page of rows together with this metadata.

use serde::{Deserialize, Serialize};

/// Page metadata returned alongside a page of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page, 1-based.
    #[serde(alias = "currentPage")]
    pub page: u32,
    /// Rows per page.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Total rows across all pages.
    #[serde(alias = "totalProducts")]
    pub total: u64,
    /// Number of pages.
    pub total_pages: u32,
    /// Whether a later page exists.
    pub has_next_page: bool,
    /// Whether an earlier page exists.
    pub has_prev_page: bool,
}

fn default_limit() -> u32 {
    5
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: default_limit(),
            total: 0,
            total_pages: 0,
            has_next_page: false,
            has_prev_page: false,
        }
    }
}

impl Pagination {
    /// The page after this one, if any.
    pub fn next_page(&self) -> Option<u32> {
        if self.has_next_page {
            self.page.checked_add(1)
        } else {
            None
        }
    }

    /// The page before this one, if any.
    pub fn prev_page(&self) -> Option<u32> {
        (self.has_prev_page && self.page > 1).then(|| self.page - 1)
    }

    /// The page to reload after deleting a row.
    ///
    /// Deleting the only row on a page past the first steps back one page,
    /// since that page no longer exists.
    pub fn page_after_removal(&self, rows_on_page: usize) -> u32 {
        if rows_on_page == 1 && self.page > 1 {
            self.page - 1
        } else {
            self.page
        }
    }
}

/// A page of rows with its metadata, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Rows on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Page metadata; absent metadata means an empty first page.
    #[serde(default)]
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, total_pages: u32) -> Pagination {
        Pagination {
            page,
            limit: 5,
            total: u64::from(total_pages) * 5,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }

    #[test]
    fn test_navigation_at_edges() {
        assert_eq!(page(1, 3).prev_page(), None);
        assert_eq!(page(1, 3).next_page(), Some(2));
        assert_eq!(page(3, 3).next_page(), None);
        assert_eq!(page(3, 3).prev_page(), Some(2));
    }

    #[test]
    fn test_next_page_at_largest_page_number() {
        let meta = Pagination {
            page: u32::MAX,
            has_next_page: true,
            ..Pagination::default()
        };
        assert_eq!(meta.next_page(), None);
    }

    #[test]
    fn test_removing_last_row_steps_back() {
        assert_eq!(page(3, 3).page_after_removal(1), 2);
        assert_eq!(page(3, 3).page_after_removal(4), 3);
        assert_eq!(page(1, 1).page_after_removal(1), 1);
    }

    #[test]
    fn test_reads_plays_metadata() {
        let meta: Pagination = serde_json::from_value(serde_json::json!({
            "page": 2, "limit": 5, "total": 12, "totalPages": 3,
            "hasNextPage": true, "hasPrevPage": true
        }))
        .unwrap();
        assert_eq!(meta, page_with_total(2, 3, 12));
    }

    #[test]
    fn test_reads_public_catalog_metadata() {
        let meta: Pagination = serde_json::from_value(serde_json::json!({
            "totalProducts": 30, "totalPages": 3, "currentPage": 1,
            "hasNextPage": true, "hasPrevPage": false
        }))
        .unwrap();
        assert_eq!(meta.page, 1);
        assert_eq!(meta.total, 30);
        assert_eq!(meta.next_page(), Some(2));
    }

    #[test]
    fn test_missing_metadata_defaults_to_empty_first_page() {
        let page: Page<String> = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination, Pagination::default());
    }

    fn page_with_total(page_no: u32, total_pages: u32, total: u64) -> Pagination {
        Pagination {
            total,
            ..page(page_no, total_pages)
        }
    }
}
