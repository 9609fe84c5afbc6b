//! scrivi-client - HTTP client for the text analysis service
//!
//! One operation: `POST {base_url}/analyse` with `{"text": ...}`, returning
//! a parsed [`scrivi_core::AnalysisResult`]. Failures are split into
//! "request failed", "bad status" and "malformed body" so the UI can tell
//! them apart.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{AnalysisService, HttpAnalysisClient, LocalAnalysisService};
pub use error::ClientError;
pub use protocol::{analyse_endpoint, AnalyseRequest, ANALYSE_PATH};
