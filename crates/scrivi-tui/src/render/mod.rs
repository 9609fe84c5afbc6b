//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use scrivi_app::{AppState, Focus, UiMode};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it should not modify state
/// except for widget state that tracks rendering info (scroll position).
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.settings.ui.show_footer);
    let busy = state.analysis.is_busy();

    frame.render_widget(
        widgets::MainHeader::new(&state.service_url).busy(busy),
        areas.header,
    );

    let editor_view =
        widgets::DraftEditorView::new(&state.draft).focused(state.focus == Focus::Editor);
    let cursor = editor_view.cursor_position(areas.editor);
    frame.render_widget(editor_view, areas.editor);

    frame.render_widget(widgets::AnalyseButton::new(busy), areas.button);

    frame.render_stateful_widget(
        widgets::AnalysisPanel::new(&state.analysis).focused(state.focus == Focus::Results),
        areas.results,
        &mut state.results_view,
    );

    if let Some(footer) = areas.footer {
        frame.render_widget(widgets::StatusBar::new(state), footer);
    }

    match state.ui_mode {
        UiMode::Normal => {
            if state.focus == Focus::Editor {
                if let Some(position) = cursor {
                    frame.set_cursor_position(position);
                }
            }
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog_state) = &state.confirm_dialog_state {
                frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
            }
        }
    }
}
