//! Application state (Model in TEA pattern)

use std::fmt;

use scrivi_core::{AnalysisFailure, AnalysisResult, AnalysisView};

use crate::config::{Settings, DEFAULT_SERVICE_URL};
use crate::confirm_dialog::ConfirmDialogState;
use crate::editor::DraftEditor;
use crate::results_view::ResultsViewState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Editor, trigger and results
    #[default]
    Normal,

    /// Confirmation dialog (quit with a non-empty draft)
    ConfirmDialog,
}

/// Which pane receives keys that are not global shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Editor,
    Results,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Editor => Focus::Results,
            Focus::Results => Focus::Editor,
        }
    }
}

/// Tag carried by an analysis request and its response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the trigger control is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is outstanding
    InFlight(RequestId),
    /// The last request produced a result
    Completed { elapsed_ms: u64 },
    /// The last request failed
    Failed,
}

impl AnalysisStatus {
    /// Short label for the status bar
    pub fn label(&self) -> String {
        match self {
            AnalysisStatus::Idle => "Ready".to_string(),
            AnalysisStatus::InFlight(_) => "Analysing...".to_string(),
            AnalysisStatus::Completed { elapsed_ms } => format!("Analysed in {} ms", elapsed_ms),
            AnalysisStatus::Failed => "Failed".to_string(),
        }
    }
}

/// Analysis requests and their outcomes.
///
/// At most one request is in flight. Outcomes for any other id are stale
/// and rejected, so a late response never overwrites newer state.
#[derive(Debug, Clone, Default)]
pub struct AnalysisState {
    next_id: u64,
    pub status: AnalysisStatus,
    /// Last successful result, kept across later failures
    pub result: Option<AnalysisResult>,
    /// View model derived from `result`
    pub view: Option<AnalysisView>,
    /// Failure from the most recent request, cleared by the next success
    pub failure: Option<AnalysisFailure>,
}

impl AnalysisState {
    pub fn in_flight(&self) -> Option<RequestId> {
        match self.status {
            AnalysisStatus::InFlight(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight().is_some()
    }

    /// Start a request. Returns `None` if one is already in flight.
    pub fn begin(&mut self) -> Option<RequestId> {
        if self.is_busy() {
            return None;
        }
        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.status = AnalysisStatus::InFlight(id);
        Some(id)
    }

    /// Store a result. Returns false (and changes nothing) if `id` is stale.
    pub fn complete(&mut self, id: RequestId, result: AnalysisResult, elapsed_ms: u64) -> bool {
        if self.in_flight() != Some(id) {
            return false;
        }
        self.view = Some(AnalysisView::from_result(&result));
        self.result = Some(result);
        self.failure = None;
        self.status = AnalysisStatus::Completed { elapsed_ms };
        true
    }

    /// Record a failure. Returns false (and changes nothing) if `id` is stale.
    pub fn fail(&mut self, id: RequestId, failure: AnalysisFailure) -> bool {
        if self.in_flight() != Some(id) {
            return false;
        }
        self.failure = Some(failure);
        self.status = AnalysisStatus::Failed;
        true
    }

    pub fn dismiss_failure(&mut self) -> bool {
        self.failure.take().is_some()
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application lifecycle phase
    pub phase: AppPhase,

    /// Current UI mode
    pub ui_mode: UiMode,

    /// Pane with keyboard focus (the editor on first display)
    pub focus: Focus,

    /// The draft being written
    pub draft: DraftEditor,

    /// Requests and stored result
    pub analysis: AnalysisState,

    /// Results panel scroll position
    pub results_view: ResultsViewState,

    /// Confirmation dialog state (when UiMode::ConfirmDialog)
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    /// Loaded settings
    pub settings: Settings,

    /// Resolved service base URL, shown in the header
    pub service_url: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), DEFAULT_SERVICE_URL)
    }

    pub fn with_settings(settings: Settings, service_url: impl Into<String>) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            focus: Focus::Editor,
            draft: DraftEditor::new(),
            analysis: AnalysisState::default(),
            results_view: ResultsViewState::new(),
            confirm_dialog_state: None,
            settings,
            service_url: service_url.into(),
        }
    }

    /// Start with `text` already in the editor
    pub fn with_draft(mut self, text: impl Into<String>) -> Self {
        self.draft = DraftEditor::with_text(text);
        self
    }

    // ─────────────────────────────────────────────────────────
    // Quit Flow
    // ─────────────────────────────────────────────────────────

    /// Request quit, showing a confirmation when there is a draft to lose
    pub fn request_quit(&mut self) {
        if !self.draft.is_empty() && self.settings.behavior.confirm_quit {
            self.confirm_dialog_state = Some(ConfirmDialogState::quit_confirmation(
                self.draft.word_count(),
            ));
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Confirm quit (from confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
