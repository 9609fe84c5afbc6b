//! Header bar widget
//!
//! Provides the main header with app title, service URL, and keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing app title, service URL, and keybindings
pub struct MainHeader<'a> {
    service_url: &'a str,
    busy: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(service_url: &'a str) -> Self {
        Self {
            service_url,
            busy: false,
        }
    }

    /// Show the busy dot while a request is in flight
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    fn shortcut(key: &'static str, label: &'static str) -> [Span<'static>; 3] {
        [
            Span::styled("[", styles::text_muted()),
            Span::styled(key, styles::keybinding()),
            Span::styled(label, styles::text_muted()),
        ]
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Render glass container with rounded borders
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));

        // Get inner content area (inside borders) before rendering
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (dot, dot_style) = if self.busy {
            ("●", styles::status_yellow())
        } else {
            ("●", styles::accent())
        };

        // Left section: status dot + "scrivi" + "/" + service URL
        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(dot, dot_style),
            Span::raw(" "),
            Span::styled("scrivi", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.service_url, styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;

        let shortcuts_line = Line::from(
            [
                Self::shortcut("^S", "] Analyse  "),
                Self::shortcut("Tab", "] Focus  "),
                Self::shortcut("^Q", "] Quit "),
            ]
            .concat(),
        );
        let shortcuts_width = shortcuts_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align the shortcuts when they fit beside the title
        if left_width + shortcuts_width + 2 <= inner.width {
            let shortcuts_x = inner.x + inner.width - shortcuts_width;
            buf.set_line(shortcuts_x, inner.y, &shortcuts_line, shortcuts_width);
        }
    }
}
