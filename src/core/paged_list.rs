//! One page of results plus pagination metadata

use crate::core::error::PagingError;
use crate::core::query::PaginationMetadata;
use crate::core::queryable::QueryExecutor;
use serde::Serialize;
use std::ops::Deref;

/// Page number meaning "no pagination, return every item"
pub const UNPAGED: usize = 0;

/// A page of items sliced from a larger result set
///
/// `total_count` is always the number of items before slicing. Pages are
/// 1-based; [`UNPAGED`] returns the whole source while still reporting
/// `total_pages` for the requested page size.
///
/// # Example
///
/// ```rust
/// use crud::core::paged_list::PagedList;
///
/// let page = PagedList::create(vec!["a", "b", "c", "d", "e"], 3, 2).unwrap();
/// assert_eq!(page.items(), &["e"]);
/// assert_eq!(page.total_count(), 5);
/// assert_eq!(page.total_pages(), 3);
/// assert!(page.has_previous());
/// assert!(!page.has_next());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    items: Vec<T>,
    current_page: usize,
    total_pages: usize,
    page_size: usize,
    total_count: usize,
}

impl<T> PagedList<T> {
    /// Assemble a page from already sliced items
    pub fn new(
        items: Vec<T>,
        total_count: usize,
        current_page: usize,
        page_size: usize,
    ) -> Result<Self, PagingError> {
        if page_size == 0 {
            return Err(PagingError::InvalidPageSize { page_size });
        }

        Ok(Self {
            items,
            current_page,
            total_pages: total_count.div_ceil(page_size),
            page_size,
            total_count,
        })
    }

    /// Slice an in-memory source
    pub fn create(
        source: Vec<T>,
        current_page: usize,
        page_size: usize,
    ) -> Result<Self, PagingError> {
        if page_size == 0 {
            return Err(PagingError::InvalidPageSize { page_size });
        }

        let total_count = source.len();
        let items = slice(source, current_page, page_size);

        tracing::debug!(
            current_page,
            page_size,
            total_count,
            returned = items.len(),
            "created paged list"
        );

        Self::new(items, total_count, current_page, page_size)
    }

    /// Run `source` once and slice the materialized result
    ///
    /// Paging arguments are validated before the source is touched. Errors
    /// raised by the source are returned unchanged.
    pub async fn create_async<Q>(
        source: Q,
        current_page: usize,
        page_size: usize,
    ) -> anyhow::Result<Self>
    where
        Q: QueryExecutor<T>,
    {
        if page_size == 0 {
            return Err(PagingError::InvalidPageSize { page_size }.into());
        }

        let items = source.to_list().await?;
        Ok(Self::create(items, current_page, page_size)?)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Pagination metadata of this page
    pub fn metadata(&self) -> PaginationMetadata {
        PaginationMetadata {
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }

    /// Convert every item, keeping the metadata
    pub fn map<U, F>(self, f: F) -> PagedList<U>
    where
        F: FnMut(T) -> U,
    {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}

fn slice<T>(source: Vec<T>, current_page: usize, page_size: usize) -> Vec<T> {
    if current_page == UNPAGED {
        return source;
    }

    let offset = (current_page - 1).saturating_mul(page_size);
    source.into_iter().skip(offset).take(page_size).collect()
}

impl<T> Deref for PagedList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
