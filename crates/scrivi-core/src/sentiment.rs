//! Sentiment tone selection

use serde::Serialize;

/// Display tone for a sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentTone {
    Positive,
    Negative,
    Neutral,
}

impl SentimentTone {
    /// Pick the tone by substring. "Positive" is tested first, so a label
    /// containing both words is positive.
    pub fn from_label(label: &str) -> Self {
        if label.contains("Positive") {
            SentimentTone::Positive
        } else if label.contains("Negative") {
            SentimentTone::Negative
        } else {
            SentimentTone::Neutral
        }
    }
}
