use paginator_api::{PaginationRequest, PaginationResult};
use paginator_core::{compute_pagination, AsyncRangeFetcher, RangeFetcher};
use serde::Serialize;
use std::ops::Index;
use tracing::{debug, warn};

use crate::error::PagedListError;

/// # Documentation
/// One page of items together with the pagination it was fetched for.
///
/// The list is read-only: it is built by [`PagedList::fetch`] or
/// [`PagedList::fetch_async`], which compute the pagination first and then
/// ask the fetcher for exactly the items of the current page.
///
/// # Example
/// ```
/// use paginator_api::PaginationRequest;
/// use paginator_list::{PagedList, SliceSource};
///
/// let source = SliceSource::new(vec!["a", "b", "c", "d", "e"]);
/// let request = PaginationRequest::new(source.total_item_count(), 2, 3);
/// let page = PagedList::fetch(&request, &source).unwrap();
///
/// assert_eq!(page.as_slice(), &["e"]);
/// assert!(page.paging_info().is_last_page);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedList<T> {
    paging_info: PaginationResult,
    items: Vec<T>,
}

impl<T> PagedList<T> {
    /// Compute the pagination for `request` and fetch the items of the current page
    ///
    /// The fetcher is not called for an empty collection.
    ///
    /// # Returns
    /// * `Ok(PagedList)` - The page and its pagination
    /// * `Err(PagedListError::Pagination)` - The request was rejected
    /// * `Err(PagedListError::Fetch)` - The fetcher failed
    pub fn fetch<F>(request: &PaginationRequest, fetcher: &F) -> Result<Self, PagedListError>
    where
        F: RangeFetcher<T> + ?Sized,
    {
        let paging_info = compute_pagination(request)?;
        if paging_info.is_empty() {
            return Ok(Self::empty(paging_info));
        }

        let (index, count) = (paging_info.index, paging_info.count);
        debug!(index, count, page = paging_info.current_page, "Fetching page items");

        let items = fetcher
            .fetch_range(index, count)
            .map_err(|source| PagedListError::Fetch {
                index,
                count,
                source,
            })?;

        Ok(Self::from_fetched(paging_info, items))
    }

    /// Async counterpart of [`PagedList::fetch`]
    pub async fn fetch_async<F>(
        request: &PaginationRequest,
        fetcher: &F,
    ) -> Result<Self, PagedListError>
    where
        T: Send,
        F: AsyncRangeFetcher<T> + ?Sized,
    {
        let paging_info = compute_pagination(request)?;
        if paging_info.is_empty() {
            return Ok(Self::empty(paging_info));
        }

        let (index, count) = (paging_info.index, paging_info.count);
        debug!(index, count, page = paging_info.current_page, "Fetching page items");

        let items = fetcher
            .fetch_range(index, count)
            .await
            .map_err(|source| PagedListError::Fetch {
                index,
                count,
                source,
            })?;

        Ok(Self::from_fetched(paging_info, items))
    }

    fn empty(paging_info: PaginationResult) -> Self {
        Self {
            paging_info,
            items: Vec::new(),
        }
    }

    fn from_fetched(paging_info: PaginationResult, items: Vec<T>) -> Self {
        if items.len() != paging_info.count {
            warn!(
                expected = paging_info.count,
                actual = items.len(),
                index = paging_info.index,
                "Fetched item count does not match the page; backing source disagrees with total_item_count"
            );
        }
        Self { paging_info, items }
    }

    pub fn paging_info(&self) -> &PaginationResult {
        &self.paging_info
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Position of `item` within this page
    pub fn position(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|candidate| candidate == item)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn into_parts(self) -> (PaginationResult, Vec<T>) {
        (self.paging_info, self.items)
    }
}

impl<T> Index<usize> for PagedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
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
