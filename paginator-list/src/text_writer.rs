use paginator_api::PaginationResult;
use paginator_core::{write_pages, NavDirection, PaginatorWriter};

/// Renders pagination as a single line of plain text.
///
/// The current page is shown as `[n]`, a gap as `...`, previous/next links
/// as `<`/`>`, chapter jumps as `<<`/`>>`. Disabled links are wrapped in
/// parentheses.
///
/// # Example
/// ```
/// use paginator_api::PaginationRequest;
/// use paginator_core::compute_pagination;
/// use paginator_list::TextPaginatorWriter;
///
/// let info = compute_pagination(&PaginationRequest::new(200, 10, 6).with_max_display_pages(7)).unwrap();
/// let text = TextPaginatorWriter::new().with_prev_next(false).render(&info);
/// assert_eq!(text.as_deref(), Some("1 ... 4 5 [6] 7 8 ... 20"));
/// ```
#[derive(Debug, Clone)]
pub struct TextPaginatorWriter {
    prev_next: bool,
    always_show_prev_next: bool,
    show_gap: bool,
    chapters: bool,
    tokens: Vec<String>,
}

impl Default for TextPaginatorWriter {
    fn default() -> Self {
        Self {
            prev_next: true,
            always_show_prev_next: false,
            show_gap: true,
            chapters: false,
            tokens: Vec::new(),
        }
    }
}

impl TextPaginatorWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prev_next(mut self, prev_next: bool) -> Self {
        self.prev_next = prev_next;
        self
    }

    pub fn with_always_show_prev_next(mut self, always_show_prev_next: bool) -> Self {
        self.always_show_prev_next = always_show_prev_next;
        self
    }

    pub fn with_gaps(mut self, show_gap: bool) -> Self {
        self.show_gap = show_gap;
        self
    }

    pub fn with_chapters(mut self, chapters: bool) -> Self {
        self.chapters = chapters;
        self
    }

    /// Render `info` from scratch
    ///
    /// # Returns
    /// * `Some(String)` - The navigation line
    /// * `None` - There is nothing to navigate (no items, or a single page)
    pub fn render(&mut self, info: &PaginationResult) -> Option<String> {
        self.tokens.clear();
        if write_pages(info, self) {
            Some(self.as_text())
        } else {
            None
        }
    }

    /// Everything written so far, tokens separated by single spaces
    pub fn as_text(&self) -> String {
        self.tokens.join(" ")
    }

    fn push(&mut self, token: String, is_disabled: bool) {
        if is_disabled {
            self.tokens.push(format!("({token})"));
        } else {
            self.tokens.push(token);
        }
    }
}

impl PaginatorWriter for TextPaginatorWriter {
    fn can_show_previous(&self) -> bool {
        self.prev_next
    }

    fn can_show_next(&self) -> bool {
        self.prev_next
    }

    fn always_show_prev_next(&self) -> bool {
        self.always_show_prev_next
    }

    fn show_gap(&self) -> bool {
        self.show_gap
    }

    fn chapters(&self) -> bool {
        self.chapters
    }

    fn write_page(&mut self, page: usize, is_current: bool, is_disabled: bool) {
        let token = if is_current {
            format!("[{page}]")
        } else {
            page.to_string()
        };
        self.push(token, is_disabled);
    }

    fn write_prev_next_page(
        &mut self,
        _page: usize,
        direction: NavDirection,
        is_disabled: bool,
        is_for_chapter: bool,
    ) {
        let token = match (direction, is_for_chapter) {
            (NavDirection::Previous, false) => "<",
            (NavDirection::Previous, true) => "<<",
            (NavDirection::Next, false) => ">",
            (NavDirection::Next, true) => ">>",
        };
        self.push(token.to_string(), is_disabled);
    }

    fn write_gap(&mut self) {
        self.tokens.push("...".to_string());
    }
}
