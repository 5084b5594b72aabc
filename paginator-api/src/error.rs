use thiserror::Error;

/// Reasons a pagination request can be rejected.
///
/// An empty collection is not an error; it produces an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid parameters: total_item_count={total_item_count}, items_per_page={items_per_page}, current_page={current_page}")]
    InvalidParameters {
        total_item_count: i64,
        items_per_page: i64,
        current_page: i64,
    },

    #[error("Invalid page: {0} (pages are 1-based)")]
    InvalidPage(i64),

    #[error("Page out of range: {current_page} (total pages: {total_page_count})")]
    PageOutOfRange {
        current_page: i64,
        total_page_count: i64,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

pub type PaginationOutcome<T> = Result<T, PaginationError>;
