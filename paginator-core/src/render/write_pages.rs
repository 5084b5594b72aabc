use paginator_api::PaginationResult;

use super::writer::{NavDirection, PaginatorWriter};

/// Smallest distance of a chapter jump.
pub const MIN_CHAPTER_JUMP: usize = 3;

/// Number of pages a chapter jump moves: the count of window pages that
/// are not pinned behind a gap, but at least [`MIN_CHAPTER_JUMP`].
pub fn chapter_jump(info: &PaginationResult) -> usize {
    let pinned = usize::from(info.has_gap_after_window_start)
        + usize::from(info.has_gap_before_window_end);
    info.pages_count.saturating_sub(pinned).max(MIN_CHAPTER_JUMP)
}

/// Drive a writer over a computed pagination
///
/// Events are emitted in display order: previous chapter, previous, the
/// page links (with gap markers after the first and before the last link
/// where pages are hidden), next, next chapter.
///
/// # Returns
/// * `true` - Navigation was written
/// * `false` - Nothing to navigate (no items, or a single page); the writer was not called
pub fn write_pages<W: PaginatorWriter + ?Sized>(info: &PaginationResult, writer: &mut W) -> bool {
    if info.total_item_count == 0 || info.total_page_count <= 1 {
        return false;
    }

    let current = info.current_page;
    let jump = chapter_jump(info);

    let has_prev = writer.can_show_previous() && current > 1;
    let has_next = writer.can_show_next() && current < info.total_page_count;

    if writer.chapters() && info.has_gap_after_window_start {
        let target = current.saturating_sub(jump).max(1);
        writer.write_prev_next_page(target, NavDirection::Previous, false, true);
    }

    if writer.always_show_prev_next() || has_prev {
        writer.write_prev_next_page(current - 1, NavDirection::Previous, !has_prev, false);
    }

    let show_gap = writer.show_gap();
    let last_idx = info.page_numbers.len().saturating_sub(1);

    for (i, &page) in info.page_numbers.iter().enumerate() {
        if show_gap && i == last_idx && info.has_gap_before_window_end {
            writer.write_gap();
        }

        writer.write_page(page, page == current, false);

        if show_gap && i == 0 && info.has_gap_after_window_start {
            writer.write_gap();
        }
    }

    if writer.always_show_prev_next() || has_next {
        writer.write_prev_next_page(current + 1, NavDirection::Next, !has_next, false);
    }

    if writer.chapters() && info.has_gap_before_window_end {
        let target = (current + jump).min(info.total_page_count);
        writer.write_prev_next_page(target, NavDirection::Next, false, true);
    }

    true
}
