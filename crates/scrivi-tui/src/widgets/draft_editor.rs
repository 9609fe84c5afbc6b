//! Draft editor widget
//!
//! Renders the draft soft-wrapped to the pane width and scrolled so the
//! cursor row stays visible.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use scrivi_app::DraftEditor;

use crate::theme::{palette, styles};
use crate::wrap::{wrap_draft, WrappedDraft};

/// Hint shown in an empty editor
pub const PLACEHOLDER: &str = "Start writing here...";

pub struct DraftEditorView<'a> {
    editor: &'a DraftEditor,
    focused: bool,
}

impl<'a> DraftEditorView<'a> {
    pub fn new(editor: &'a DraftEditor) -> Self {
        Self {
            editor,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn block(&self) -> ratatui::widgets::Block<'static> {
        let title_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        styles::glass_block(self.focused)
            .title(Span::styled(" Draft ", title_style))
            .style(Style::default().bg(palette::CARD_BG))
    }

    fn layout(&self, inner: Rect) -> (WrappedDraft, usize) {
        let wrapped = wrap_draft(
            self.editor.text(),
            self.editor.cursor(),
            inner.width as usize,
        );
        let height = (inner.height as usize).max(1);
        let scroll = wrapped.cursor_row.saturating_sub(height - 1);
        (wrapped, scroll)
    }

    /// Screen position of the text cursor when this view is drawn in `area`
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let inner = self.block().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let (wrapped, scroll) = self.layout(inner);
        let row = (wrapped.cursor_row - scroll) as u16;
        let col = (wrapped.cursor_col as u16).min(inner.width - 1);
        Some(Position::new(inner.x + col, inner.y + row))
    }
}

impl Widget for DraftEditorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.editor.is_empty() {
            Paragraph::new(Span::styled(PLACEHOLDER, styles::text_muted())).render(inner, buf);
            return;
        }

        let (wrapped, scroll) = self.layout(inner);
        let lines: Vec<Line> = wrapped
            .rows
            .into_iter()
            .skip(scroll)
            .take(inner.height as usize)
            .map(|row| Line::styled(row, styles::text_primary()))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
