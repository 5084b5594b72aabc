use paginator_api::PaginationResult;

use super::resolve::ResolvedParams;
use super::slice::PageSlice;

/// Package resolved values, the page slice and the window into a result,
/// deriving the renderer hints from the final window.
pub fn assemble(
    resolved: &ResolvedParams,
    page_slice: PageSlice,
    page_numbers: Vec<usize>,
    show_first_last_pages: bool,
) -> PaginationResult {
    let pages_count = page_numbers.len();
    let total_page_count = resolved.total_page_count;

    let has_gap_after_window_start = pages_count > 2 && page_numbers[1] > 2;
    let has_gap_before_window_end =
        pages_count > 2 && page_numbers[pages_count - 2] < total_page_count - 1;
    let is_last_page = total_page_count < 1 || resolved.current_page >= total_page_count;

    PaginationResult {
        current_page: resolved.current_page,
        index: page_slice.index,
        count: page_slice.count,
        items_per_page: page_slice.items_per_page,
        total_item_count: resolved.total_item_count,
        total_page_count,
        pages_count,
        page_numbers,
        is_last_page,
        has_gap_before_window_end,
        has_gap_after_window_start,
        show_first_last_pages,
    }
}
