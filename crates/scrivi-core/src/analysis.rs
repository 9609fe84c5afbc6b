//! Analysis result model
//!
//! Mirrors the JSON body returned by the analysis service's `/analyse`
//! endpoint. Every top-level key is required; a body missing one fails to
//! decode instead of rendering half a panel.

use std::collections::HashMap;
use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Text statistics computed by the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Stats {
    /// Sentence count in the submitted text
    pub sentences: u64,
    /// Word count
    pub words: u64,
    /// Stopword count
    pub stopwords: u64,
}

/// Ordered label -> score pairs decoded from a JSON object.
///
/// Keeps the document's key order, which the ranking rules depend on: ties
/// are broken by whichever key was encountered first. A repeated key keeps
/// its first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    entries: Vec<(String, f64)>,
    /// Label -> position in `entries`
    index: HashMap<String, usize>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a score, keeping first-seen position
    pub fn insert(&mut self, label: impl Into<String>, score: f64) {
        let label = label.into();
        match self.index.get(&label) {
            Some(&pos) => self.entries[pos].1 = score,
            None => {
                self.index.insert(label.clone(), self.entries.len());
                self.entries.push((label, score));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.index.get(label).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, s)| (l.as_str(), *s))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = ScoreTable::new();
        for (label, score) in iter {
            table.insert(label, score);
        }
        table
    }
}

impl<'de> Deserialize<'de> for ScoreTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScoreTableVisitor;

        impl<'de> Visitor<'de> for ScoreTableVisitor {
            type Value = ScoreTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping labels to numeric scores")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<ScoreTable, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = ScoreTable::new();
                while let Some((label, score)) = map.next_entry::<String, f64>()? {
                    table.insert(label, score);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(ScoreTableVisitor)
    }
}

impl Serialize for ScoreTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

/// Parsed body of a successful `/analyse` response
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisResult {
    pub stats: Stats,
    /// Human-readable sentiment label, e.g. "Strongly Positive"
    pub sentiment: String,
    /// Intent label -> score (`descriptive`, `informative`, `story`, `persuasive`)
    pub intent: ScoreTable,
    /// Sentence text -> tf-idf importance score
    pub tfidf: ScoreTable,
}

impl AnalysisResult {
    /// Decode a response body
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Category of an analysis failure, shown to the user as a distinct heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The request never produced a response (connect error, timeout, ...)
    Request,
    /// The service answered with a non-success HTTP status
    Status(u16),
    /// The body was not JSON or did not have the analysis shape
    Malformed,
}

impl FailureKind {
    /// Short heading for the results panel
    pub fn heading(&self) -> String {
        match self {
            FailureKind::Request => "Request failed".to_string(),
            FailureKind::Status(code) => format!("Service returned HTTP {}", code),
            FailureKind::Malformed => "Malformed response".to_string(),
        }
    }
}

/// Why the last analysis did not produce a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalysisFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for AnalysisFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.heading(), self.message)
    }
}
