//! scrivi-app - Application state and orchestration for scrivi
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the draft editor, the analysis trigger and its responses,
//! results scrolling and the quit flow. It also owns configuration loading,
//! background task dispatch and OS signal handling.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod editor;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod results_view;
pub mod signals;
pub mod state;

// Re-export primary types
pub use confirm_dialog::ConfirmDialogState;
pub use editor::DraftEditor;
pub use engine::Engine;
pub use handler::{Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use results_view::ResultsViewState;
pub use state::{AnalysisState, AnalysisStatus, AppPhase, AppState, Focus, RequestId, UiMode};
