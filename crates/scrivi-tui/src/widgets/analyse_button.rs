//! Trigger control for analysis

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Label while idle
pub const LABEL_IDLE: &str = "Analyse";
/// Label while a request is in flight
pub const LABEL_BUSY: &str = "Analysing...";

/// The "Analyse" button. Disabled (and relabelled) while busy.
pub struct AnalyseButton {
    busy: bool,
}

impl AnalyseButton {
    pub fn new(busy: bool) -> Self {
        Self { busy }
    }
}

impl Widget for AnalyseButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line = if self.busy {
            Line::from(vec![Span::styled(
                format!(" ↻ {} ", LABEL_BUSY),
                styles::status_yellow(),
            )])
        } else {
            Line::from(vec![
                Span::styled(format!(" {} ", LABEL_IDLE), styles::focused_selected()),
                Span::raw(" "),
                Span::styled("^S", styles::keybinding()),
            ])
        };

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
