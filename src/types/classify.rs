//! Zero-shot classification result types

use serde::{Deserialize, Serialize};

/// A ranked runner-up label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub label: String,
    pub score: f32,
}

/// Result of a zero-shot classification: top label plus ranked alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub label: String,
    pub score: f32,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

impl ClassifyResult {
    /// Build a result from unordered `(label, score)` pairs.
    ///
    /// Pairs are ranked by descending score; on ties the earlier pair wins.
    /// Returns `None` when `scores` is empty.
    pub fn from_scores<I, S>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        let mut ranked: Vec<(String, f32)> =
            scores.into_iter().map(|(l, s)| (l.into(), s)).collect();
        ranked.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

        let mut iter = ranked.into_iter();
        let (label, score) = iter.next()?;
        Some(Self {
            label,
            score,
            alternatives: iter
                .map(|(label, score)| Alternative { label, score })
                .collect(),
        })
    }

    /// Keep at most `n` alternatives.
    pub fn truncate_alternatives(mut self, n: usize) -> Self {
        self.alternatives.truncate(n);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_scores_ranks_descending() {
        let result =
            ClassifyResult::from_scores([("бейтарап", 0.2), ("оң", 0.7), ("теріс", 0.1)]).unwrap();
        assert_eq!(result.label, "оң");
        assert_eq!(result.alternatives[0].label, "бейтарап");
        assert_eq!(result.alternatives[1].label, "теріс");
    }

    #[test]
    fn from_scores_tie_keeps_input_order() {
        let result = ClassifyResult::from_scores([("a", 0.5), ("b", 0.5)]).unwrap();
        assert_eq!(result.label, "a");
    }

    #[test]
    fn from_scores_empty_is_none() {
        assert!(ClassifyResult::from_scores(Vec::<(String, f32)>::new()).is_none());
    }
}
