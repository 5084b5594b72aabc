use async_trait::async_trait;
use paginator_core::{AsyncRangeFetcher, FetchError, RangeFetcher};

/// In-memory backing source over an owned vector.
///
/// Ranges past the end are truncated rather than rejected, so a page
/// request never panics on a source that shrank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceSource<T> {
    items: Vec<T>,
}

impl<T> SliceSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Item count in the form a `PaginationRequest` expects
    pub fn total_item_count(&self) -> i64 {
        i64::try_from(self.items.len()).unwrap_or(i64::MAX)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    fn range(&self, index: usize, count: usize) -> &[T] {
        let end = index.saturating_add(count).min(self.items.len());
        &self.items[index.min(end)..end]
    }
}

impl<T> From<Vec<T>> for SliceSource<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for SliceSource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Clone + Send + Sync> RangeFetcher<T> for SliceSource<T> {
    fn fetch_range(&self, index: usize, count: usize) -> Result<Vec<T>, FetchError> {
        Ok(self.range(index, count).to_vec())
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> AsyncRangeFetcher<T> for SliceSource<T> {
    async fn fetch_range(&self, index: usize, count: usize) -> Result<Vec<T>, FetchError> {
        Ok(self.range(index, count).to_vec())
    }
}
