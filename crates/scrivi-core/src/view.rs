//! Results panel view model
//!
//! [`AnalysisView`] is everything the results panel shows, derived from one
//! [`AnalysisResult`]. The TUI renders it and headless mode serializes it, so
//! both surfaces agree on the sentence picked, the colour, and the wording.

use serde::Serialize;

use crate::analysis::{AnalysisResult, Stats};
use crate::intent::{dominant_intent, intent_verb};
use crate::sentiment::SentimentTone;
use crate::summary::top_sentences;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentView {
    pub label: String,
    pub tone: SentimentTone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentView {
    /// Winning label as sent by the service
    pub label: String,
    pub verb: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisView {
    pub stats: Stats,
    pub sentiment: SentimentView,
    /// `None` when the service sent no usable intent scores
    pub intent: Option<IntentView>,
    pub summary: Vec<String>,
}

impl AnalysisView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let intent = dominant_intent(&result.intent).map(|(label, score)| IntentView {
            label: label.to_string(),
            verb: intent_verb(label).to_string(),
            score,
        });

        Self {
            stats: result.stats,
            sentiment: SentimentView {
                label: result.sentiment.clone(),
                tone: SentimentTone::from_label(&result.sentiment),
            },
            intent,
            summary: top_sentences(result),
        }
    }

    /// "It is trying to {verb}"
    pub fn intent_sentence(&self) -> Option<String> {
        self.intent
            .as_ref()
            .map(|intent| format!("It is trying to {}", intent.verb))
    }

    /// "It sounds {label}"
    pub fn sentiment_sentence(&self) -> String {
        format!("It sounds {}", self.sentiment.label)
    }
}

impl From<&AnalysisResult> for AnalysisView {
    fn from(result: &AnalysisResult) -> Self {
        Self::from_result(result)
    }
}
