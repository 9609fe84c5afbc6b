//! Results panel scroll state
//!
//! The renderer reports how many lines the panel content occupies and how
//! many fit; scroll operations clamp against the last reported sizes.

/// Scroll state for the results panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsViewState {
    /// First visible line
    pub offset: usize,
    /// Total wrapped content lines at last render
    pub total_lines: usize,
    /// Lines that fit in the viewport at last render
    pub visible_lines: usize,
}

impl ResultsViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Record the sizes from the latest render and pull the offset back
    /// into range if the content shrank.
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
