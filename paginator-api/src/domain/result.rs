use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Computed pagination for one request: the item slice of the current page
/// and the window of page numbers to offer for navigation.
///
/// Produced fresh by each computation and never mutated afterwards.
///
/// # Example
/// ```
/// use paginator_api::PaginationResult;
///
/// let result = PaginationResult {
///     current_page: 4,
///     index: 9,
///     count: 2,
///     items_per_page: 3,
///     total_item_count: 11,
///     total_page_count: 4,
///     pages_count: 4,
///     page_numbers: vec![1, 2, 3, 4],
///     is_last_page: true,
///     has_gap_before_window_end: false,
///     has_gap_after_window_start: false,
///     show_first_last_pages: true,
/// };
///
/// assert_eq!(result.page_range(), 9..11);
/// assert!(result.is_page_in_range(4));
/// assert!(!result.is_page_in_range(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationResult {
    /// Current page (1-based), after any clamping
    pub current_page: usize,
    /// Zero-based index of the first item on the current page
    pub index: usize,
    /// Number of items on the current page
    pub count: usize,
    /// Items per page, never more than the total item count
    pub items_per_page: usize,
    /// Total number of items in the source collection
    pub total_item_count: usize,
    /// Total number of pages, 0 for an empty collection
    pub total_page_count: usize,
    /// Length of `page_numbers`; differs from `total_page_count` once the window is cropped
    pub pages_count: usize,
    /// Ascending page numbers to display
    pub page_numbers: Vec<usize>,
    pub is_last_page: bool,
    /// Hidden pages exist between the second-to-last and the last displayed page
    pub has_gap_before_window_end: bool,
    /// Hidden pages exist between the first and the second displayed page
    pub has_gap_after_window_start: bool,
    pub show_first_last_pages: bool,
}

impl PaginationResult {
    /// Check if `page` is a real page of this collection
    pub fn is_page_in_range(&self, page: usize) -> bool {
        page > 0 && page <= self.total_page_count
    }

    /// Item range of the current page, suitable for slicing the backing collection
    pub fn page_range(&self) -> Range<usize> {
        self.index..self.index + self.count
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Check if the collection had no items at all
    pub fn is_empty(&self) -> bool {
        self.total_item_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_result() -> PaginationResult {
        PaginationResult {
            current_page: 1,
            index: 0,
            count: 0,
            items_per_page: 0,
            total_item_count: 0,
            total_page_count: 0,
            pages_count: 0,
            page_numbers: Vec::new(),
            is_last_page: true,
            has_gap_before_window_end: false,
            has_gap_after_window_start: false,
            show_first_last_pages: true,
        }
    }

    #[test]
    fn test_empty_result_has_no_pages_in_range() {
        let result = empty_result();
        assert!(result.is_empty());
        assert!(!result.is_page_in_range(0));
        assert!(!result.is_page_in_range(1));
        assert_eq!(result.page_range(), 0..0);
    }

    #[test]
    fn test_serializes_to_snake_case_fields() -> Result<(), Box<dyn std::error::Error>> {
        let value = serde_json::to_value(empty_result())?;
        assert_eq!(value["total_page_count"], 0);
        assert_eq!(value["page_numbers"], serde_json::json!([]));
        assert_eq!(value["has_gap_before_window_end"], false);
        Ok(())
    }
}
