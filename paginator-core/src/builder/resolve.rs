use paginator_api::{PaginationError, PaginationOutcome};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Validated request values, all non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedParams {
    pub total_item_count: usize,
    /// Requested page size; 0 only for an empty collection
    pub items_per_page: usize,
    /// 1-based, clamped into `1..=total_page_count` when clamping is on
    pub current_page: usize,
    pub total_page_count: usize,
}

/// Validate the raw request values and compute the total page count.
///
/// Rules are applied in order:
/// 1. An empty collection always resolves, with zero pages and page 1.
/// 2. A page below 1 is clamped to 1, or rejected with `InvalidPage`.
/// 3. A negative item count or a page size below 1 is `InvalidParameters`.
/// 4. The page count is `ceil(total_item_count / items_per_page)`.
/// 5. A page past the end is clamped to the last page, or rejected with `PageOutOfRange`.
pub fn resolve(
    total_item_count: i64,
    items_per_page: i64,
    current_page: i64,
    fix_out_of_range_page: bool,
) -> PaginationOutcome<ResolvedParams> {
    if total_item_count == 0 {
        return Ok(ResolvedParams {
            total_item_count: 0,
            items_per_page: 0,
            current_page: 1,
            total_page_count: 0,
        });
    }

    let mut current_page = current_page;
    if current_page < 1 {
        if !fix_out_of_range_page {
            return Err(PaginationError::InvalidPage(current_page));
        }
        current_page = 1;
    }

    let invalid = move || PaginationError::InvalidParameters {
        total_item_count,
        items_per_page,
        current_page,
    };

    if total_item_count < 1 || items_per_page < 1 {
        return Err(invalid());
    }

    let total_page_count =
        ceil_page_count(total_item_count, items_per_page).ok_or_else(invalid)?;

    if current_page > total_page_count {
        if !fix_out_of_range_page || total_page_count < 1 {
            return Err(PaginationError::PageOutOfRange {
                current_page,
                total_page_count,
            });
        }
        current_page = total_page_count;
    }

    Ok(ResolvedParams {
        total_item_count: to_usize(total_item_count).ok_or_else(invalid)?,
        items_per_page: to_usize(items_per_page).ok_or_else(invalid)?,
        current_page: to_usize(current_page).ok_or_else(invalid)?,
        total_page_count: to_usize(total_page_count).ok_or_else(invalid)?,
    })
}

fn ceil_page_count(total_item_count: i64, items_per_page: i64) -> Option<i64> {
    Decimal::from(total_item_count)
        .checked_div(Decimal::from(items_per_page))?
        .ceil()
        .to_i64()
}

fn to_usize(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
