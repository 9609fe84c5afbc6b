//! Confirmation dialog widget for the quit flow

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use scrivi_app::ConfirmDialogState;

use crate::theme::styles;

const MODAL_WIDTH: u16 = 44;
const MODAL_HEIGHT: u16 = 8;

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    /// Calculate centered modal rect
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = Self::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);

        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
            Constraint::Length(1), // Detail
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(styles::status_yellow())
            .render(chunks[1], buf);

        Paragraph::new(self.state.detail.as_str())
            .alignment(Alignment::Center)
            .style(styles::text_secondary())
            .render(chunks[2], buf);

        let buttons = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("y", styles::accent().add_modifier(Modifier::BOLD)),
            Span::styled("] Yes  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("n", styles::status_red().add_modifier(Modifier::BOLD)),
            Span::styled("] No", styles::text_muted()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_quit_confirmation() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::quit_confirmation(3);

        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Quit scrivi?"));
        assert!(term.buffer_contains("Your draft has 3 words."));
        assert!(term.buffer_contains("Drafts are not saved."));
    }

    #[test]
    fn test_shows_options() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::quit_confirmation(1);

        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("[y] Yes"));
        assert!(term.buffer_contains("[n] No"));
    }

    #[test]
    fn test_dialog_is_centered() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::quit_confirmation(1);

        term.render_widget(ConfirmDialog::new(&state), term.area());

        let (_, y) = term.find_text("Quit scrivi?").unwrap();
        assert_eq!(y, (24 - MODAL_HEIGHT) / 2);
    }

    #[test]
    fn test_compact_terminal_does_not_panic() {
        let mut term = TestTerminal::compact();
        let state = ConfirmDialogState::quit_confirmation(12);

        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Quit"));
    }
}
