use paginator_api::PaginationError;
use paginator_core::FetchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagedListError {
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error("Failed to fetch {count} items at index {index}: {source}")]
    Fetch {
        index: usize,
        count: usize,
        #[source]
        source: FetchError,
    },
}
