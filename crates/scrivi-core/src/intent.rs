//! Intent selection and the verb vocabulary shown in "It is trying to ..."

use crate::analysis::ScoreTable;

/// The four intent labels the analysis service scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Descriptive,
    Informative,
    Story,
    Persuasive,
}

impl Intent {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "descriptive" => Some(Intent::Descriptive),
            "informative" => Some(Intent::Informative),
            "story" => Some(Intent::Story),
            "persuasive" => Some(Intent::Persuasive),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intent::Descriptive => "descriptive",
            Intent::Informative => "informative",
            Intent::Story => "story",
            Intent::Persuasive => "persuasive",
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Intent::Descriptive => "describe",
            Intent::Informative => "inform",
            Intent::Story => "tell a story",
            Intent::Persuasive => "convince",
        }
    }
}

/// Pick the label with the strictly greatest score.
///
/// Scans in encounter order, so ties keep the earliest label. NaN never
/// wins. Returns `None` for an empty table or one holding only NaN.
pub fn dominant_intent(scores: &ScoreTable) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (label, score) in scores.iter() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((label, score)),
        }
    }
    best
}

/// Verb for a label; labels outside the vocabulary are shown as-is
pub fn intent_verb(label: &str) -> &str {
    match Intent::from_label(label) {
        Some(intent) => intent.verb(),
        None => label,
    }
}
