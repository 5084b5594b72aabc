/// Direction of a previous/next navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Previous,
    Next,
}

/// Output side of pagination rendering
///
/// A writer turns the events emitted by [`write_pages`](super::write_pages)
/// into links, HTML, terminal text or anything else. The capability flags
/// decide which events are emitted; the `write_*` callbacks receive them in
/// display order.
///
/// # Example
/// ```ignore
/// impl PaginatorWriter for HtmlNav {
///     fn write_page(&mut self, page: usize, is_current: bool, is_disabled: bool) {
///         // Implementation
///     }
///     // ...
/// }
/// ```
pub trait PaginatorWriter {
    /// Emit a previous link when the current page is not the first
    fn can_show_previous(&self) -> bool {
        true
    }

    /// Emit a next link when the current page is not the last
    fn can_show_next(&self) -> bool {
        true
    }

    /// Emit previous/next links even when they cannot be followed, as disabled links
    fn always_show_prev_next(&self) -> bool {
        false
    }

    /// Emit gap markers where pages are hidden
    fn show_gap(&self) -> bool {
        true
    }

    /// Emit chapter jumps past the gaps
    fn chapters(&self) -> bool {
        false
    }

    fn write_page(&mut self, page: usize, is_current: bool, is_disabled: bool);

    /// Write a previous/next link
    ///
    /// # Arguments
    /// * `page` - Target page; may fall outside the collection when `is_disabled`
    /// * `direction` - Previous or next
    /// * `is_disabled` - The link cannot be followed
    /// * `is_for_chapter` - The link jumps past a gap rather than by one page
    fn write_prev_next_page(
        &mut self,
        page: usize,
        direction: NavDirection,
        is_disabled: bool,
        is_for_chapter: bool,
    );

    fn write_gap(&mut self);
}
