pub mod assemble;
pub mod resolve;
pub mod slice;
pub mod window;

pub use assemble::assemble;
pub use resolve::{resolve, ResolvedParams};
pub use slice::{slice, PageSlice};
pub use window::page_window;

use paginator_api::{PaginationOutcome, PaginationRequest, PaginationResult};

/// Compute the current page slice and the page number window for a request.
///
/// Parameters are resolved exactly once; the slice and the window are both
/// derived from that single resolution.
///
/// # Returns
/// * `Ok(PaginationResult)` - The computed pagination, empty when `total_item_count == 0`
/// * `Err(PaginationError)` - The request is invalid, or the page is out of range and clamping is off
///
/// # Example
/// ```
/// use paginator_api::PaginationRequest;
/// use paginator_core::compute_pagination;
///
/// let result = compute_pagination(&PaginationRequest::new(11, 3, 30)).unwrap();
/// assert_eq!(result.current_page, 4);
/// assert_eq!((result.index, result.count), (9, 2));
/// ```
pub fn compute_pagination(request: &PaginationRequest) -> PaginationOutcome<PaginationResult> {
    let resolved = resolve(
        request.total_item_count,
        request.items_per_page,
        request.current_page,
        request.fix_out_of_range_page,
    )?;

    let page_slice = slice(&resolved);
    let page_numbers = page_window(
        resolved.current_page,
        resolved.total_page_count,
        request.max_display_pages,
        request.show_first_last_pages,
    );

    Ok(assemble(
        &resolved,
        page_slice,
        page_numbers,
        request.show_first_last_pages,
    ))
}
