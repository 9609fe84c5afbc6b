//! # scrivi-core - Core Domain Types
//!
//! Foundation crate for scrivi. Provides the analysis result model returned by
//! the remote analysis service, the rules that turn a result into what the
//! results panel shows, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Analysis Model (`analysis`)
//! - [`AnalysisResult`] - Parsed `/analyse` response body
//! - [`Stats`] - Sentence, word and stopword counts
//! - [`ScoreTable`] - Ordered label/score pairs decoded from a JSON object
//! - [`AnalysisFailure`], [`FailureKind`] - Why an analysis request failed
//!
//! ### Rendering Rules
//! - [`SentimentTone`] - Display tone chosen from a sentiment label (`sentiment`)
//! - [`Intent`], [`dominant_intent()`] - Intent selection and verb vocabulary (`intent`)
//! - [`top_sentences()`], [`summary_len()`] - tf-idf summary ranking (`summary`)
//! - [`AnalysisView`] - Everything the results panel shows, derived from a result (`view`)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum grouped by layer (config, analysis, terminal, channel, I/O)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use scrivi_core::prelude::*;
//! ```

pub mod analysis;
pub mod error;
pub mod intent;
pub mod logging;
pub mod sentiment;
pub mod summary;
pub mod view;

/// Prelude for common imports used throughout all scrivi crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use analysis::{AnalysisFailure, AnalysisResult, FailureKind, ScoreTable, Stats};
pub use error::{Error, Result, ResultExt};
pub use intent::{dominant_intent, intent_verb, Intent};
pub use sentiment::SentimentTone;
pub use summary::{rank_sentences, summary_len, top_sentences, SUMMARY_RATIO};
pub use view::{AnalysisView, IntentView, SentimentView};
