//! Status bar widget
//!
//! Credit line on the left; analysis status and draft counts on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use scrivi_app::AppState;

use crate::theme::{palette, styles};

pub const CREDIT: &str = "Made by Gunika, Anushka, and Manan.";

/// Status bar widget showing analysis status and draft size
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn status_spans(&self) -> Vec<Span<'static>> {
        let status = &self.state.analysis.status;
        let (icon, icon_style) = styles::analysis_indicator(status);
        let words = self.state.draft.word_count();
        let chars = self.state.draft.char_count();

        vec![
            Span::styled(icon, icon_style),
            Span::raw(" "),
            Span::styled(status.label(), styles::text_secondary()),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled(
                format!("{} {}", words, plural(words, "word", "words")),
                styles::text_primary(),
            ),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(
                format!("{} {}", chars, plural(chars, "char", "chars")),
                styles::text_primary(),
            ),
            Span::raw(" "),
        ]
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let right = Line::from(self.status_spans());
        let right_width = right.width() as u16;

        // Credit only when it fits beside the status
        let credit_width = CREDIT.len() as u16 + 1;
        if credit_width + right_width < area.width {
            let left = Line::from(vec![
                Span::raw(" "),
                Span::styled(CREDIT, styles::text_muted()),
            ]);
            Paragraph::new(left).render(area, buf);
        }

        let right_width = right_width.min(area.width);
        let right_area = Rect::new(
            area.x + area.width - right_width,
            area.y,
            right_width,
            1,
        );
        Paragraph::new(right).render(right_area, buf);
    }
}
