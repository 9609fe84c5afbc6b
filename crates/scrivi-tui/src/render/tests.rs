//! Full-screen rendering tests

use super::view;
use crate::test_utils::{sample_result, TestTerminal};
use scrivi_app::{AppState, Focus, Message, UiMode};
use scrivi_core::{AnalysisFailure, FailureKind};

fn render_screen(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

fn with_result(mut state: AppState) -> AppState {
    let id = state.analysis.begin().unwrap();
    state.analysis.complete(id, sample_result(), 25);
    state
}

#[test]
fn test_first_display() {
    let mut state = AppState::new();
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("scrivi"));
    assert!(term.buffer_contains("http://127.0.0.1:8000"));
    assert!(term.buffer_contains("Start writing here..."));
    assert!(term.buffer_contains("Analyse"));
    assert!(term.buffer_contains("Ctrl+S"));
    assert!(term.buffer_contains("Ready"));
    // No analysis before any result exists
    assert!(!term.buffer_contains("Number of sentences"));
}

#[test]
fn test_draft_and_result_side_by_side() {
    let mut state = with_result(AppState::new().with_draft("Sentence number 1."));
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Sentence number 1."));
    assert!(term.buffer_contains("Number of sentences: 10"));
    assert!(term.buffer_contains("Analysed in 25 ms"));

    // Wide layout: editor on the left, results on the right
    let (draft_x, _) = term.find_text("Draft").unwrap();
    let (results_x, _) = term.find_text("Results").unwrap();
    assert!(draft_x < results_x);
}

#[test]
fn test_busy_screen() {
    let mut state = AppState::new().with_draft("Hello.");
    state.analysis.begin();
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Analysing..."));
}

#[test]
fn test_failure_screen_keeps_previous_result() {
    let mut state = with_result(AppState::new());
    let id = state.analysis.begin().unwrap();
    state.analysis.fail(
        id,
        AnalysisFailure::new(FailureKind::Request, "connection refused"),
    );
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Request failed"));
    assert!(term.buffer_contains("connection refused"));
    assert!(term.buffer_contains("Number of sentences: 10"));
    assert!(term.buffer_contains("Failed"));
}

#[test]
fn test_confirm_dialog_overlay() {
    let mut state = AppState::new().with_draft("two words");
    state.request_quit();
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);

    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Quit scrivi?"));
    assert!(term.buffer_contains("Your draft has 2 words."));
}

#[test]
fn test_cursor_follows_draft_end() {
    let mut state = AppState::new().with_draft("abc");
    let mut term = render_screen(&mut state);
    let position = term.terminal.get_cursor_position().unwrap();
    // Header is 3 rows, then the editor border
    assert_eq!(position.y, 4);
    assert_eq!(position.x, 4);
}

#[test]
fn test_results_focus_highlights_panel() {
    let mut state = with_result(AppState::new().with_draft("abc"));
    state.focus = Focus::Results;
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("abc"));
    assert!(term.buffer_contains("Results"));
}

#[test]
fn test_footer_hidden_by_setting() {
    let mut state = AppState::new();
    state.settings.ui.show_footer = false;
    let term = render_screen(&mut state);

    assert!(!term.buffer_contains("Made by"));
    assert!(!term.buffer_contains("Ready"));
}

#[test]
fn test_results_scroll_clamped_on_render() {
    let mut state = with_result(AppState::new());
    state.results_view.offset = 500;
    let term = render_screen(&mut state);

    assert!(state.results_view.offset < state.results_view.total_lines);
    assert!(term.buffer_contains("Summary") || term.buffer_contains("Sentence number"));
}

#[test]
fn test_narrow_terminal_stacks_panes() {
    let mut state = with_result(AppState::new().with_draft("Hi."));
    let mut term = TestTerminal::with_size(60, 30);
    term.draw_with(|frame| view(frame, &mut state));

    let (_, draft_y) = term.find_text("Draft").unwrap();
    let (_, results_y) = term.find_text("Results").unwrap();
    assert!(draft_y < results_y);
}

#[test]
fn test_typing_then_render() {
    let mut state = AppState::new();
    for c in "Hello".chars() {
        scrivi_app::handler::update(&mut state, Message::InsertChar(c));
    }
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Hello"));
    assert!(term.buffer_contains("1 word · 5 chars"));
}
