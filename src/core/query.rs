//! Query parameters and pagination response types

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_current_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

fn default_ascending() -> bool {
    true
}

fn default_sort_by() -> String {
    "name".to_string()
}

/// Paging parameters of a collection request
///
/// Extracted from query strings such as `?currentPage=2&pageSize=5`.
/// `currentPage=0` asks for every item on one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResourceParameter {
    /// Page number (starts at 1, 0 = unpaged)
    #[serde(default = "default_current_page")]
    pub current_page: usize,

    /// Number of items per page
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page_size: usize,

    /// Sort direction
    #[serde(default = "default_ascending")]
    pub is_ascending: bool,
}

impl Default for ResourceParameter {
    fn default() -> Self {
        Self {
            current_page: default_current_page(),
            page_size: default_page_size(),
            is_ascending: default_ascending(),
        }
    }
}

/// Parameters of the customer listing
///
/// # Example
/// ```text
/// GET /customers?currentPage=1&pageSize=2&searchText=Jane
/// GET /customers?sortBy=name&isAscending=false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResourceParameter {
    #[serde(default = "default_current_page")]
    pub current_page: usize,

    /// Absent means the configured default page size
    #[serde(default)]
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page_size: Option<usize>,

    #[serde(default = "default_ascending")]
    pub is_ascending: bool,

    /// Sort field; unknown fields fall back to the customer's last name
    #[serde(default = "default_sort_by")]
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    pub sort_by: String,

    /// Substring searched in "first last"; absent or empty matches everyone
    #[serde(default)]
    pub search_text: Option<String>,
}

impl CustomerResourceParameter {
    /// The paging part of these parameters, `default_page_size` filling a
    /// missing page size
    pub fn paging(&self, default_page_size: usize) -> ResourceParameter {
        ResourceParameter {
            current_page: self.current_page,
            page_size: self.page_size.unwrap_or(default_page_size),
            is_ascending: self.is_ascending,
        }
    }
}

impl Default for CustomerResourceParameter {
    fn default() -> Self {
        Self {
            current_page: default_current_page(),
            page_size: None,
            is_ascending: default_ascending(),
            sort_by: default_sort_by(),
            search_text: None,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    /// Total number of items (after filters)
    pub total_count: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Current page number (starts at 1, 0 = unpaged)
    pub current_page: usize,

    /// Total number of pages
    pub total_pages: usize,
}

/// A page of results with its pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResource<T> {
    pub pagination: PaginationMetadata,

    pub results: Vec<T>,
}
