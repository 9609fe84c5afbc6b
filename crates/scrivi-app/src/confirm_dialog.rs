//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! scrivi-tui.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub detail: String,
}

impl ConfirmDialogState {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Quit confirmation for a draft of `word_count` words
    pub fn quit_confirmation(word_count: usize) -> Self {
        let message = if word_count == 1 {
            "Your draft has 1 word.".to_string()
        } else {
            format!("Your draft has {} words.", word_count)
        };
        Self::new("Quit scrivi?", message, "Drafts are not saved.")
    }
}
