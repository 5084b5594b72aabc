use paginator_api::MIN_DISPLAY_PAGES;

/// Build the ascending window of page numbers to display.
///
/// The window holds `min(max(max_display_pages, 3), total_page_count)`
/// pages. When every page fits it is simply `1..=total_page_count`.
/// Otherwise it is centered on `current_page`, shifted left to fit at the
/// end of the collection, and with `show_first_last_pages` its first and
/// last slots are overwritten by page 1 and the last page.
///
/// Centering uses truncating division, so an even-sized window has one
/// more slot left of the current page than right of it.
///
/// # Example
/// ```
/// use paginator_core::builder::page_window;
///
/// assert_eq!(page_window(6, 20, 7, true), vec![1, 4, 5, 6, 7, 8, 20]);
/// assert_eq!(page_window(2, 3, 13, true), vec![1, 2, 3]);
/// ```
pub fn page_window(
    current_page: usize,
    total_page_count: usize,
    max_display_pages: i64,
    show_first_last_pages: bool,
) -> Vec<usize> {
    if total_page_count == 0 {
        return Vec::new();
    }

    let max_display_pages =
        usize::try_from(max_display_pages.max(MIN_DISPLAY_PAGES)).unwrap_or(usize::MAX);
    let cnt = max_display_pages.min(total_page_count);

    if total_page_count <= cnt {
        return (1..=total_page_count).collect();
    }

    let sides = cnt / 2;

    // start is a page number, not an index
    let mut start = current_page.saturating_sub(sides).max(1);
    if start + cnt > total_page_count {
        start = total_page_count - cnt + 1;
    }

    let mut pages: Vec<usize> = (start..start + cnt).collect();

    if show_first_last_pages {
        pages[0] = 1;
        pages[cnt - 1] = total_page_count;
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pages() {
        assert!(page_window(1, 0, 13, true).is_empty());
    }

    #[test]
    fn test_all_pages_fit() {
        assert_eq!(page_window(3, 5, 13, true), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(1, 1, 13, true), vec![1]);
        assert_eq!(page_window(13, 13, 13, false), (1..=13).collect::<Vec<_>>());
    }

    #[test]
    fn test_minimum_window_is_three() {
        assert_eq!(page_window(1, 2, 0, true), vec![1, 2]);
        assert_eq!(page_window(50, 100, 1, false), vec![49, 50, 51]);
        assert_eq!(page_window(50, 100, -4, true), vec![1, 50, 100]);
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(page_window(1, 20, 5, false), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(1, 20, 5, true), vec![1, 2, 3, 4, 20]);
        assert_eq!(page_window(3, 20, 5, true), vec![1, 2, 3, 4, 20]);
    }

    #[test]
    fn test_window_at_end_is_shifted_left() {
        assert_eq!(page_window(20, 20, 5, false), vec![16, 17, 18, 19, 20]);
        assert_eq!(page_window(20, 20, 5, true), vec![1, 17, 18, 19, 20]);
        assert_eq!(page_window(18, 20, 5, true), vec![1, 17, 18, 19, 20]);
    }

    #[test]
    fn test_window_in_the_middle() {
        assert_eq!(page_window(10, 20, 5, false), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(10, 20, 5, true), vec![1, 9, 10, 11, 20]);
    }

    #[test]
    fn test_even_window_leans_left() {
        // Pinned behavior: truncating `cnt / 2` gives two slots before the
        // current page and one after it.
        assert_eq!(page_window(5, 10, 4, false), vec![3, 4, 5, 6]);
        assert_eq!(page_window(5, 10, 4, true), vec![1, 4, 5, 10]);
        assert_eq!(page_window(50, 100, 6, false), vec![47, 48, 49, 50, 51, 52]);
    }

    #[test]
    fn test_pinned_window_keeps_current_page() {
        for total in 4..40 {
            for max_display in 3..12 {
                for current in 1..=total {
                    let pages = page_window(current, total, max_display, true);
                    assert!(pages.contains(&current), "current={current} total={total} max={max_display}");
                    assert!(pages.windows(2).all(|w| w[0] < w[1]));
                }
            }
        }
    }
}
