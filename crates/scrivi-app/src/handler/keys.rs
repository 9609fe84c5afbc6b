//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events in the quit confirmation dialog
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // ─────────────────────────────────────────────────────────
        // Global shortcuts (any focus)
        // ─────────────────────────────────────────────────────────
        // Force quit (bypass confirmation) - Ctrl+C for emergency exit
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('q') => Some(Message::RequestQuit),

        // Trigger control; ignored by update() while a request is in flight
        InputKey::CharCtrl('s') | InputKey::F(5) => Some(Message::Analyse),

        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),

        _ => match state.focus {
            Focus::Editor => handle_key_editor(state, key),
            Focus::Results => handle_key_results(state, key),
        },
    }
}

/// Handle key events while the draft editor has focus
fn handle_key_editor(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InsertChar(c)),
        InputKey::Enter => Some(Message::InsertNewline),
        InputKey::Backspace => Some(Message::DeleteBackward),
        InputKey::Delete => Some(Message::DeleteForward),

        InputKey::Left => Some(Message::CursorLeft),
        InputKey::Right => Some(Message::CursorRight),
        InputKey::Up => Some(Message::CursorUp),
        InputKey::Down => Some(Message::CursorDown),
        InputKey::Home => Some(Message::CursorLineStart),
        InputKey::End => Some(Message::CursorLineEnd),

        InputKey::CharCtrl('u') => Some(Message::ClearDraft),

        InputKey::Esc if state.analysis.failure.is_some() => Some(Message::DismissError),

        _ => None,
    }
}

/// Handle key events while the results panel has focus
fn handle_key_results(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollResultsUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollResultsDown),
        InputKey::PageUp => Some(Message::ResultsPageUp),
        InputKey::PageDown => Some(Message::ResultsPageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollResultsToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollResultsToBottom),

        // The trigger control lives next to the results
        InputKey::Enter => Some(Message::Analyse),

        InputKey::Char('q') => Some(Message::RequestQuit),

        InputKey::Esc if state.analysis.failure.is_some() => Some(Message::DismissError),
        InputKey::Esc => Some(Message::ToggleFocus),

        _ => None,
    }
}
