pub mod fetch_range;
pub mod fetch_range_async;

pub use fetch_range::*;
pub use fetch_range_async::*;

/// Error returned by a backing source while retrieving a range of items.
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;
