//! Naive summary: the highest tf-idf sentences

use crate::analysis::{AnalysisResult, ScoreTable};

/// Fraction of the sentence count that makes it into the summary
pub const SUMMARY_RATIO: f64 = 0.2;

/// Number of summary sentences: `max(1, round(sentences * 0.2))`, capped at
/// the number of sentences actually scored.
pub fn summary_len(sentences: u64, available: usize) -> usize {
    let wanted = (sentences as f64 * SUMMARY_RATIO).round().max(1.0) as usize;
    wanted.min(available)
}

/// Sentences by descending score. Stable, so equal scores keep encounter
/// order. NaN sorts last.
pub fn rank_sentences(tfidf: &ScoreTable) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = tfidf.iter().collect();
    ranked.sort_by(|a, b| rank_key(b.1).total_cmp(&rank_key(a.1)));
    ranked
}

/// Top sentences for the summary list, in ranked order
pub fn top_sentences(result: &AnalysisResult) -> Vec<String> {
    let count = summary_len(result.stats.sentences, result.tfidf.len());
    rank_sentences(&result.tfidf)
        .into_iter()
        .take(count)
        .map(|(sentence, _)| sentence.to_string())
        .collect()
}

// total_cmp orders -0.0 below 0.0 and NaN above everything
fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Stats;

    fn result_with(sentences: u64, tfidf: &[(&str, f64)]) -> AnalysisResult {
        AnalysisResult {
            stats: Stats {
                sentences,
                words: 0,
                stopwords: 0,
            },
            sentiment: "Neutral".to_string(),
            intent: ScoreTable::new(),
            tfidf: tfidf.iter().map(|(s, v)| (*s, *v)).collect(),
        }
    }

    #[test]
    fn test_summary_len_rounds_fraction() {
        assert_eq!(summary_len(10, 10), 2);
        assert_eq!(summary_len(12, 12), 2); // 2.4
        assert_eq!(summary_len(13, 13), 3); // 2.6
        assert_eq!(summary_len(25, 25), 5);
    }

    #[test]
    fn test_summary_len_near_integer_products() {
        assert_eq!(summary_len(15, 15), 3); // 3.0000000000000004
        assert_eq!(summary_len(7, 7), 1); // 1.4
        assert_eq!(summary_len(8, 8), 2); // 1.6
    }

    #[test]
    fn test_summary_len_at_least_one() {
        assert_eq!(summary_len(0, 5), 1);
        assert_eq!(summary_len(2, 5), 1);
    }

    #[test]
    fn test_summary_len_capped_by_available() {
        assert_eq!(summary_len(100, 3), 3);
        assert_eq!(summary_len(0, 0), 0);
    }

    #[test]
    fn test_rank_descending() {
        let result = result_with(3, &[("a", 0.1), ("b", 0.9), ("c", 0.5)]);
        let ranked: Vec<&str> = rank_sentences(&result.tfidf)
            .into_iter()
            .map(|(s, _)| s)
            .collect();
        assert_eq!(ranked, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let result = result_with(
            4,
            &[("first", 0.5), ("second", 0.5), ("top", 0.8), ("third", 0.5)],
        );
        let ranked: Vec<&str> = rank_sentences(&result.tfidf)
            .into_iter()
            .map(|(s, _)| s)
            .collect();
        assert_eq!(ranked, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let result = result_with(2, &[("a", 0.0), ("b", -0.0)]);
        let ranked: Vec<&str> = rank_sentences(&result.tfidf)
            .into_iter()
            .map(|(s, _)| s)
            .collect();
        assert_eq!(ranked, vec!["a", "b"]);
    }

    #[test]
    fn test_nan_ranks_last() {
        let result = result_with(3, &[("nan", f64::NAN), ("low", -5.0), ("high", 1.0)]);
        let ranked: Vec<&str> = rank_sentences(&result.tfidf)
            .into_iter()
            .map(|(s, _)| s)
            .collect();
        assert_eq!(ranked, vec!["high", "low", "nan"]);
    }

    #[test]
    fn test_top_sentences_ten_sentence_scenario() {
        let tfidf: Vec<(String, f64)> = (0..10)
            .map(|i| (format!("Sentence {}.", i), i as f64 / 10.0))
            .collect();
        let mut result = result_with(10, &[]);
        result.tfidf = tfidf.into_iter().collect();

        let top = top_sentences(&result);
        assert_eq!(top, vec!["Sentence 9.", "Sentence 8."]);
    }

    #[test]
    fn test_top_sentences_empty_tfidf() {
        let result = result_with(5, &[]);
        assert!(top_sentences(&result).is_empty());
    }
}
