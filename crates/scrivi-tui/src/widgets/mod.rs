//! Custom widget components

mod analyse_button;
mod analysis_panel;
mod confirm_dialog;
mod draft_editor;
mod header;
mod status_bar;

pub use analyse_button::AnalyseButton;
pub use analysis_panel::AnalysisPanel;
pub use confirm_dialog::ConfirmDialog;
pub use draft_editor::DraftEditorView;
pub use header::MainHeader;
pub use status_bar::StatusBar;
