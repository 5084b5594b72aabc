use serde::{Deserialize, Serialize};

use super::options::{PaginationOptions, DEFAULT_MAX_DISPLAY_PAGES};

/// Inputs for a single pagination computation.
///
/// Integer fields are signed so that a caller's raw input (a query string
/// page of `0` or `-1`) can be passed through and rejected or clamped by
/// the builder rather than by the caller.
///
/// # Example
/// ```
/// use paginator_api::PaginationRequest;
///
/// let request = PaginationRequest::new(11, 3, 2).with_max_display_pages(12);
/// assert_eq!(request.current_page, 2);
/// assert!(request.fix_out_of_range_page);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Total number of items in the source collection
    pub total_item_count: i64,
    /// Number of items per page, must be at least 1
    pub items_per_page: i64,
    /// Requested page, 1-based
    pub current_page: i64,
    #[serde(default = "default_max_display_pages")]
    pub max_display_pages: i64,
    #[serde(default = "default_true")]
    pub show_first_last_pages: bool,
    #[serde(default = "default_true")]
    pub fix_out_of_range_page: bool,
}

fn default_max_display_pages() -> i64 {
    DEFAULT_MAX_DISPLAY_PAGES
}

fn default_true() -> bool {
    true
}

impl PaginationRequest {
    /// Create a request with default display options
    ///
    /// # Arguments
    /// * `total_item_count` - Total number of items in the source collection
    /// * `items_per_page` - Number of items per page
    /// * `current_page` - Requested page number (1-based)
    pub fn new(total_item_count: i64, items_per_page: i64, current_page: i64) -> Self {
        let options = PaginationOptions::default();
        Self {
            total_item_count,
            items_per_page,
            current_page,
            max_display_pages: options.max_display_pages,
            show_first_last_pages: options.show_first_last_pages,
            fix_out_of_range_page: options.fix_out_of_range_page,
        }
    }

    pub fn with_options(mut self, options: &PaginationOptions) -> Self {
        self.max_display_pages = options.max_display_pages;
        self.show_first_last_pages = options.show_first_last_pages;
        self.fix_out_of_range_page = options.fix_out_of_range_page;
        self
    }

    pub fn with_max_display_pages(mut self, max_display_pages: i64) -> Self {
        self.max_display_pages = max_display_pages;
        self
    }

    pub fn with_show_first_last_pages(mut self, show_first_last_pages: bool) -> Self {
        self.show_first_last_pages = show_first_last_pages;
        self
    }

    pub fn with_fix_out_of_range_page(mut self, fix_out_of_range_page: bool) -> Self {
        self.fix_out_of_range_page = fix_out_of_range_page;
        self
    }

    /// The display and clamping settings carried by this request
    pub fn options(&self) -> PaginationOptions {
        PaginationOptions {
            max_display_pages: self.max_display_pages,
            show_first_last_pages: self.show_first_last_pages,
            fix_out_of_range_page: self.fix_out_of_range_page,
        }
    }
}
