//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::RequestId;
use scrivi_core::{AnalysisFailure, AnalysisResult};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may show confirmation dialog if the draft is not empty)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Draft Editing
    // ─────────────────────────────────────────────────────────
    InsertChar(char),
    InsertNewline,
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    /// Ctrl+U - empty the draft
    ClearDraft,

    // ─────────────────────────────────────────────────────────
    // Focus & Results Scrolling
    // ─────────────────────────────────────────────────────────
    /// Move keyboard focus between the editor and the results panel
    ToggleFocus,
    ScrollResultsUp,
    ScrollResultsDown,
    ResultsPageUp,
    ResultsPageDown,
    ScrollResultsToTop,
    ScrollResultsToBottom,
    /// Hide the error block from the last failed request
    DismissError,

    // ─────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────
    /// Trigger control activated: analyse the current draft
    Analyse,

    /// The service answered with a result
    AnalysisCompleted {
        request_id: RequestId,
        result: Box<AnalysisResult>,
        elapsed_ms: u64,
    },

    /// The request failed or the answer was unusable
    AnalysisFailed {
        request_id: RequestId,
        failure: AnalysisFailure,
    },
}
