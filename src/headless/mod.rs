//! Headless mode - NDJSON event output instead of the TUI
//!
//! Runs a single analysis and writes one JSON object per line to stdout, so
//! scripts can use the analysis service without parsing a terminal screen.
//!
//! # Example Output
//!
//! ```json
//! {"event":"analysis_started","request_id":1,"chars":42,"timestamp":1704700001000}
//! {"event":"analysis_completed","request_id":1,"elapsed_ms":120,"view":{...},"timestamp":1704700001120}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use scrivi_core::{AnalysisFailure, AnalysisView, FailureKind};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The draft was sent to the service
    AnalysisStarted {
        request_id: u64,
        chars: usize,
        timestamp: i64,
    },

    /// The service returned a result
    AnalysisCompleted {
        request_id: u64,
        elapsed_ms: u64,
        view: AnalysisView,
        timestamp: i64,
    },

    /// The request failed or the response was unusable
    AnalysisFailed {
        kind: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
        message: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // NDJSON: one event per line
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn analysis_started(request_id: u64, chars: usize) -> Self {
        Self::AnalysisStarted {
            request_id,
            chars,
            timestamp: Self::now(),
        }
    }

    pub fn analysis_completed(request_id: u64, elapsed_ms: u64, view: AnalysisView) -> Self {
        Self::AnalysisCompleted {
            request_id,
            elapsed_ms,
            view,
            timestamp: Self::now(),
        }
    }

    pub fn analysis_failed(failure: &AnalysisFailure) -> Self {
        let (kind, status) = match failure.kind {
            FailureKind::Request => ("request", None),
            FailureKind::Status(code) => ("status", Some(code)),
            FailureKind::Malformed => ("malformed", None),
        };
        Self::AnalysisFailed {
            kind,
            status,
            message: failure.message.clone(),
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrivi_core::{AnalysisResult, ScoreTable, Stats};

    fn view() -> AnalysisView {
        AnalysisView::from_result(&AnalysisResult {
            stats: Stats {
                sentences: 1,
                words: 3,
                stopwords: 1,
            },
            sentiment: "Positive".to_string(),
            intent: [("story", 0.7)].into_iter().collect(),
            tfidf: ScoreTable::from_iter([("It was fine.", 0.4)]),
        })
    }

    #[test]
    fn test_started_serialization() {
        let json = serde_json::to_value(HeadlessEvent::analysis_started(1, 12)).unwrap();
        assert_eq!(json["event"], "analysis_started");
        assert_eq!(json["request_id"], 1);
        assert_eq!(json["chars"], 12);
        assert!(json["timestamp"].is_i64());
    }

    #[test]
    fn test_completed_carries_view() {
        let json = serde_json::to_value(HeadlessEvent::analysis_completed(1, 30, view())).unwrap();
        assert_eq!(json["event"], "analysis_completed");
        assert_eq!(json["elapsed_ms"], 30);
        assert_eq!(json["view"]["stats"]["words"], 3);
        assert_eq!(json["view"]["intent"]["verb"], "tell a story");
        assert_eq!(json["view"]["summary"][0], "It was fine.");
    }

    #[test]
    fn test_status_failure_includes_code() {
        let failure = AnalysisFailure::new(FailureKind::Status(503), "unavailable");
        let json = serde_json::to_value(HeadlessEvent::analysis_failed(&failure)).unwrap();
        assert_eq!(json["event"], "analysis_failed");
        assert_eq!(json["kind"], "status");
        assert_eq!(json["status"], 503);
        assert_eq!(json["message"], "unavailable");
    }

    #[test]
    fn test_request_failure_omits_status() {
        let failure = AnalysisFailure::new(FailureKind::Request, "refused");
        let json = serde_json::to_value(HeadlessEvent::analysis_failed(&failure)).unwrap();
        assert_eq!(json["kind"], "request");
        assert!(json.get("status").is_none());
    }
}
