use super::resolve::ResolvedParams;

/// Item range of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    /// Zero-based index of the first item on the page
    pub index: usize,
    /// Number of items on the page
    pub count: usize,
    /// Page size actually used, never more than the total item count
    pub items_per_page: usize,
}

/// Derive the start index and item count of the current page.
pub fn slice(resolved: &ResolvedParams) -> PageSlice {
    let items_per_page = resolved.items_per_page.min(resolved.total_item_count);
    let page_count = resolved.total_page_count;

    if page_count == 0 {
        return PageSlice {
            index: 0,
            count: items_per_page,
            items_per_page,
        };
    }

    let index = items_per_page * (resolved.current_page - 1);
    let count = if page_count < 2 || resolved.current_page < page_count {
        items_per_page
    } else {
        // last page holds the remainder
        items_per_page - (page_count * items_per_page - resolved.total_item_count)
    };

    PageSlice {
        index,
        count,
        items_per_page,
    }
}
