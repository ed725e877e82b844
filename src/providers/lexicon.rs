//! Word-list classifier used when no zero-shot model is available.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::traits::ZeroShotClassifier;
use crate::types::{ClassifyResult, Emotion, Polarity, Task};
use crate::{PolisentError, Result};

const POSITIVE_WORDS: &[&str] = &["жақсы", "тамаша", "ұнамды", "сенемін", "қолдаймын", "артықшылық"];

const NEGATIVE_WORDS: &[&str] = &[
    "жаман",
    "нашар",
    "қате",
    "өтірік",
    "ұнамайды",
    "қарсымын",
    "жемқор",
    "қорқынышты",
];

/// Emotion keyword substrings, in tie-break order.
const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (Emotion::Anger, &["ыза", "ашу", "ашулы", "ренж", "ұрыс"]),
    (Emotion::Fear, &["қорқыныш", "үрей", "қауіп"]),
    (Emotion::Joy, &["қуаныш", "қуанды", "қуан", "мақтаныш"]),
    (Emotion::Disgust, &["жек көр", "жиіркен", "масқара"]),
    (Emotion::Sadness, &["қайғы", "мұң", "реніш"]),
    (Emotion::Trust, &["сенім", "үміт", "үміттен"]),
    (Emotion::Surprise, &["таң", "таңғал", "таңғалды"]),
];

static WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Both lexicon readings of a text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconReading {
    pub sentiment: Polarity,
    pub emotion: Emotion,
    pub score: f32,
}

/// Counts positive and negative words and emotion keywords.
///
/// Sentiment compares whole-word hits; emotion counts keyword substrings and
/// the first emotion with the highest count wins. Scores stay below 0.95 and
/// no alternatives are produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, text: &str) -> LexiconReading {
        let lower = text.to_lowercase();
        let words: HashSet<&str> = WORDS.find_iter(&lower).map(|m| m.as_str()).collect();
        let pos = POSITIVE_WORDS.iter().filter(|w| words.contains(*w)).count();
        let neg = NEGATIVE_WORDS.iter().filter(|w| words.contains(*w)).count();

        let sentiment = if neg > pos {
            Polarity::Negative
        } else if pos > neg {
            Polarity::Positive
        } else {
            Polarity::Neutral
        };

        let mut emotion = Emotion::Neutral;
        let mut best = 0;
        for (candidate, keywords) in EMOTION_KEYWORDS {
            let count = keywords.iter().filter(|k| lower.contains(*k)).count();
            if count > best {
                best = count;
                emotion = *candidate;
            }
        }

        let score = (0.55 + 0.1 * pos.abs_diff(neg) as f32 + 0.1 * best as f32).min(0.95);
        LexiconReading {
            sentiment,
            emotion,
            score,
        }
    }

    /// Classify for a task, bypassing candidate labels.
    pub fn classify_task(&self, text: &str, task: Task) -> ClassifyResult {
        let reading = self.read(text);
        let label = match task {
            Task::Sentiment => reading.sentiment.as_str(),
            Task::Emotion => reading.emotion.as_str(),
        };
        ClassifyResult {
            label: label.to_string(),
            score: reading.score,
            alternatives: Vec::new(),
        }
    }
}

impl ZeroShotClassifier for LexiconClassifier {
    fn name(&self) -> &str {
        "lexicon"
    }

    /// Infers the task from the candidate labels.
    fn classify(&self, text: &str, labels: &[&str], _hypothesis_template: &str) -> Result<ClassifyResult> {
        let has = |label: &str| labels.contains(&label);
        let task = if Emotion::ALL
            .iter()
            .any(|e| *e != Emotion::Neutral && has(e.as_str()))
        {
            Task::Emotion
        } else if Polarity::ALL.iter().any(|p| has(p.as_str())) {
            Task::Sentiment
        } else {
            return Err(PolisentError::ClassifierUnavailable(
                "lexicon cannot score these labels".to_string(),
            ));
        };
        Ok(self.classify_task(text, task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_words_win() {
        let r = LexiconClassifier.read("Бұл жаман, нашар және өтірік. Бірақ жақсы.");
        assert_eq!(r.sentiment, Polarity::Negative);
        assert!((r.score - 0.75).abs() < 1e-6);
    }

    #[test]
    fn balanced_is_neutral() {
        let r = LexiconClassifier.read("жақсы мен жаман");
        assert_eq!(r.sentiment, Polarity::Neutral);
        assert!((r.score - 0.55).abs() < 1e-6);
    }

    #[test]
    fn words_must_match_whole() {
        // "жақсылық" is not "жақсы"
        assert_eq!(LexiconClassifier.read("жақсылық").sentiment, Polarity::Neutral);
    }

    #[test]
    fn emotion_first_max_wins() {
        // one anger keyword, one fear keyword: anger comes first
        let r = LexiconClassifier.read("ыза мен үрей");
        assert_eq!(r.emotion, Emotion::Anger);
        let r = LexiconClassifier.read("қуанды, қуаныш, мақтаныш");
        assert_eq!(r.emotion, Emotion::Joy);
    }

    #[test]
    fn score_is_capped() {
        let r = LexiconClassifier.read("жаман нашар қате өтірік ұнамайды қарсымын");
        assert_eq!(r.score, 0.95);
    }

    #[test]
    fn classify_picks_reading_in_labels() {
        let c = LexiconClassifier::new();
        let sentiment = c.classify("тамаша", &Task::Sentiment.candidate_labels(), "{}").unwrap();
        assert_eq!(sentiment.label, "оң");
        let emotion = c.classify("тамаша", &Task::Emotion.candidate_labels(), "{}").unwrap();
        assert_eq!(emotion.label, "бейтарап");
        let emotion = c.classify("ыза", &Task::Emotion.candidate_labels(), "{}").unwrap();
        assert_eq!(emotion.label, "ашу");
        let err = c.classify("тамаша", &["популизм"], "{}").unwrap_err();
        assert!(err.is_degradable());
    }

    #[test]
    fn classify_task_has_no_alternatives() {
        let result = LexiconClassifier.classify_task("қорқыныш пен үрей", Task::Emotion);
        assert_eq!(result.label, "қорқыныш");
        assert!(result.alternatives.is_empty());
    }
}
