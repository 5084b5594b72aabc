use async_trait::async_trait;

use super::FetchError;

/// Asynchronous source of items for a computed page
///
/// The async counterpart of [`RangeFetcher`](super::RangeFetcher), for
/// sources that suspend on I/O. Calls carry no ordering requirement
/// relative to other pagination computations.
///
/// # Type Parameters
/// * `T` - The item type
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl AsyncRangeFetcher<Customer> for CustomerRepository {
///     async fn fetch_range(&self, index: usize, count: usize) -> Result<Vec<Customer>, FetchError> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait AsyncRangeFetcher<T: Send>: Send + Sync {
    /// Retrieve items starting at an offset
    ///
    /// # Arguments
    /// * `index` - Zero-based offset of the first item
    /// * `count` - Number of items to retrieve
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The retrieved items
    /// * `Err` - An error if the items could not be retrieved
    async fn fetch_range(&self, index: usize, count: usize) -> Result<Vec<T>, FetchError>;
}
