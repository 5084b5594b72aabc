use super::FetchError;

/// Synchronous source of items for a computed page
///
/// This trait is the seam between the pagination computation and whatever
/// holds the items (a vector, a file, a query). It is called with the
/// `index` and `count` of the current page.
///
/// Any closure `Fn(usize, usize) -> Result<Vec<T>, FetchError>` is a fetcher.
///
/// # Type Parameters
/// * `T` - The item type
///
/// # Example
/// ```ignore
/// impl RangeFetcher<Customer> for CustomerStore {
///     fn fetch_range(&self, index: usize, count: usize) -> Result<Vec<Customer>, FetchError> {
///         // Implementation
///     }
/// }
/// ```
pub trait RangeFetcher<T>: Send + Sync {
    /// Retrieve items starting at an offset
    ///
    /// # Arguments
    /// * `index` - Zero-based offset of the first item
    /// * `count` - Number of items to retrieve
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - Exactly `count` items, fewer only when the source is
    ///   inconsistent with the total item count it reported
    /// * `Err` - An error if the items could not be retrieved
    fn fetch_range(&self, index: usize, count: usize) -> Result<Vec<T>, FetchError>;
}

impl<T, F> RangeFetcher<T> for F
where
    F: Fn(usize, usize) -> Result<Vec<T>, FetchError> + Send + Sync,
{
    fn fetch_range(&self, index: usize, count: usize) -> Result<Vec<T>, FetchError> {
        self(index, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_through<F: RangeFetcher<u32>>(fetcher: &F) -> Result<Vec<u32>, FetchError> {
        fetcher.fetch_range(2, 3)
    }

    #[test]
    fn test_closure_is_a_fetcher() -> Result<(), FetchError> {
        let items: Vec<u32> = (0..10).collect();
        let fetcher = |index: usize, count: usize| -> Result<Vec<u32>, FetchError> {
            Ok(items[index..index + count].to_vec())
        };

        assert_eq!(fetch_through(&fetcher)?, vec![2, 3, 4]);
        Ok(())
    }

    #[test]
    fn test_closure_errors_pass_through() {
        let fetcher =
            |_: usize, _: usize| -> Result<Vec<u32>, FetchError> { Err("offline".into()) };

        let error = fetch_through(&fetcher).unwrap_err();
        assert_eq!(error.to_string(), "offline");
    }
}
