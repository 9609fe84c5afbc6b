//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{analysis, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Draft Editing
        // ─────────────────────────────────────────────────────────
        Message::InsertChar(c) => {
            state.draft.insert_char(c);
            UpdateResult::none()
        }
        Message::InsertNewline => {
            state.draft.insert_newline();
            UpdateResult::none()
        }
        Message::DeleteBackward => {
            state.draft.backspace();
            UpdateResult::none()
        }
        Message::DeleteForward => {
            state.draft.delete();
            UpdateResult::none()
        }
        Message::CursorLeft => {
            state.draft.move_left();
            UpdateResult::none()
        }
        Message::CursorRight => {
            state.draft.move_right();
            UpdateResult::none()
        }
        Message::CursorUp => {
            state.draft.move_up();
            UpdateResult::none()
        }
        Message::CursorDown => {
            state.draft.move_down();
            UpdateResult::none()
        }
        Message::CursorLineStart => {
            state.draft.move_line_start();
            UpdateResult::none()
        }
        Message::CursorLineEnd => {
            state.draft.move_line_end();
            UpdateResult::none()
        }
        Message::ClearDraft => {
            state.draft.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus & Results Scrolling
        // ─────────────────────────────────────────────────────────
        Message::ToggleFocus => {
            state.focus = state.focus.toggle();
            UpdateResult::none()
        }
        Message::ScrollResultsUp => {
            state.results_view.scroll_up(1);
            UpdateResult::none()
        }
        Message::ScrollResultsDown => {
            state.results_view.scroll_down(1);
            UpdateResult::none()
        }
        Message::ResultsPageUp => {
            state.results_view.page_up();
            UpdateResult::none()
        }
        Message::ResultsPageDown => {
            state.results_view.page_down();
            UpdateResult::none()
        }
        Message::ScrollResultsToTop => {
            state.results_view.scroll_to_top();
            UpdateResult::none()
        }
        Message::ScrollResultsToBottom => {
            state.results_view.scroll_to_bottom();
            UpdateResult::none()
        }
        Message::DismissError => {
            state.analysis.dismiss_failure();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Analysis
        // ─────────────────────────────────────────────────────────
        Message::Analyse => analysis::handle_analyse(state),

        Message::AnalysisCompleted {
            request_id,
            result,
            elapsed_ms,
        } => analysis::handle_completed(state, request_id, *result, elapsed_ms),

        Message::AnalysisFailed {
            request_id,
            failure,
        } => analysis::handle_failed(state, request_id, failure),
    }
}
