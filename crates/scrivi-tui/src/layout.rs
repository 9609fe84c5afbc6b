//! Screen layout definitions for the TUI
//!
//! Wide terminals put the editor and trigger on the left and results on the
//! right; narrow ones stack all three.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width at which the body switches to two columns
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 80;

/// Height of the trigger button (border + label + border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Main header (title + service URL + keybindings)
    pub header: Rect,

    /// Draft editor
    pub editor: Rect,

    /// Analyse button
    pub button: Rect,

    /// Results panel
    pub results: Rect,

    /// Status bar, if shown
    pub footer: Option<Rect>,
}

/// Create the main screen layout
pub fn create(area: Rect, show_footer: bool) -> ScreenAreas {
    let footer_height = if show_footer { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(3),             // Header (glass container)
        Constraint::Min(3),                // Body
        Constraint::Length(footer_height), // Status bar
    ])
    .split(area);

    let (editor, button, results) = split_body(chunks[1]);

    ScreenAreas {
        header: chunks[0],
        editor,
        button,
        results,
        footer: show_footer.then_some(chunks[2]),
    }
}

fn split_body(body: Rect) -> (Rect, Rect, Rect) {
    if body.width >= WIDE_LAYOUT_MIN_WIDTH {
        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(body);
        let left =
            Layout::vertical([Constraint::Min(3), Constraint::Length(BUTTON_HEIGHT)])
                .split(columns[0]);
        (left[0], left[1], columns[1])
    } else {
        let rows = Layout::vertical([
            Constraint::Percentage(45),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(3),
        ])
        .split(body);
        (rows[0], rows[1], rows[2])
    }
}
