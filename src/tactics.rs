//! Political-discourse tactic scoring.
//!
//! A [`TermList`] maps each tactic to its vocabulary: multi-word phrases and
//! single-word terms. [`score_text`] counts the vocabulary in a text, and
//! [`is_political`] thresholds the result. When no tactic scores at all, a
//! fixed set of political cue roots is counted instead.
//!
//! The same tactic names also serve as candidate labels for zero-shot
//! classification ([`classify_tactic`]).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::ontology::normalize;
use crate::providers::ClassifierChain;
use crate::types::ClassifyResult;
use crate::{PolisentError, Result};

/// Zero-shot hypothesis for tactic classification.
pub const DEFAULT_TACTIC_HYPOTHESIS: &str = "Бұл мәтінде {} тактикасы қолданылған.";

/// Tactic name reported by the cue-root fallback.
pub const CUE_TACTIC: &str = "CueWords";

pub const PHRASE_WEIGHT: f32 = 2.0;
pub const TOKEN_WEIGHT: f32 = 1.0;

/// Evidence kept per tactic.
pub const MAX_HITS: usize = 10;

const CUE_ROOTS: &[&str] = &[
    "саясат", "партия", "үкімет", "мәжіліс", "сенат", "парламент", "билік", "сайлау", "үгіт",
    "коалиц", "жемқор", "қана", "оппозиц", "халық", "ел",
];

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[А-Яа-яЁёІіҢңӘәҒғҚқӨөҰұҮүҺһ]+").expect("valid regex"));

// ============================================================================
// Term list
// ============================================================================

/// Vocabulary of one tactic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TacticTerms {
    pub phrases: BTreeSet<String>,
    pub tokens: BTreeSet<String>,
}

#[derive(Debug, Deserialize)]
struct TermEntry {
    #[serde(default)]
    termin: Option<Termin>,
}

#[derive(Debug, Deserialize)]
struct Termin {
    #[serde(default)]
    name: Option<String>,
}

/// Tactic name → vocabulary, ordered by tactic name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermList {
    tactics: BTreeMap<String, TacticTerms>,
}

impl TermList {
    /// Parse `{"tactic": [{"termin": {"name": "..."}}, ...], ...}`.
    ///
    /// Names are normalized; names containing a space are phrases.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<TermEntry>> = serde_json::from_str(json)?;
        let mut tactics = BTreeMap::new();
        for (tactic, entries) in raw {
            if tactic.trim().is_empty() {
                continue;
            }
            let mut terms = TacticTerms::default();
            for name in entries
                .into_iter()
                .filter_map(|e| e.termin.and_then(|t| t.name))
                .map(|n| normalize(&n))
                .filter(|n| !n.is_empty())
            {
                if name.contains(' ') {
                    terms.phrases.insert(name);
                } else {
                    terms.tokens.insert(name);
                }
            }
            tactics.insert(tactic, terms);
        }
        Ok(Self { tactics })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| PolisentError::TermListUnavailable(format!("{}: {e}", path.display())))?;
        let terms = Self::from_json(&content)
            .map_err(|e| PolisentError::TermListUnavailable(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), tactics = terms.len(), "term list loaded");
        Ok(terms)
    }

    pub fn insert(&mut self, tactic: impl Into<String>, terms: TacticTerms) {
        self.tactics.insert(tactic.into(), terms);
    }

    pub fn get(&self, tactic: &str) -> Option<&TacticTerms> {
        self.tactics.get(tactic)
    }

    /// Tactic names, usable as zero-shot candidate labels.
    pub fn tactic_names(&self) -> Vec<&str> {
        self.tactics.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tactics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tactics.is_empty()
    }
}

// ============================================================================
// Scoring
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    /// Phrase occurrence in the joined token text.
    Phrase,
    /// Tokens starting with a term or its root.
    Prefix,
    /// Tokens starting with a fallback cue root.
    Cue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermHit {
    pub term: String,
    pub count: usize,
    pub kind: HitKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticScore {
    pub tactic: String,
    pub score: f32,
    /// Strongest hits first, at most [`MAX_HITS`].
    pub hits: Vec<TermHit>,
}

/// Lowercased Kazakh-letter runs.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// A term plus its root without a final `у` (`қанау` → `қана`).
fn roots(term: &str) -> Vec<&str> {
    match term.strip_suffix('у') {
        Some(root) if !root.is_empty() => vec![term, root],
        _ => vec![term],
    }
}

fn top_hits(mut hits: Vec<TermHit>) -> Vec<TermHit> {
    hits.sort_by(|a, b| b.count.cmp(&a.count));
    hits.truncate(MAX_HITS);
    hits
}

fn cue_fallback(tokens: &[String]) -> Option<TacticScore> {
    let mut total = 0;
    let mut hits = Vec::new();
    for root in CUE_ROOTS {
        let count = tokens.iter().filter(|t| t.starts_with(root)).count();
        if count > 0 {
            total += count;
            hits.push(TermHit {
                term: (*root).to_string(),
                count,
                kind: HitKind::Cue,
            });
        }
    }
    (total > 0).then(|| TacticScore {
        tactic: CUE_TACTIC.to_string(),
        score: total as f32,
        hits: top_hits(hits),
    })
}

/// Score every tactic of `terms` against `text`, strongest first.
///
/// Tactics scoring zero are omitted. If none score, the cue-root fallback
/// runs and yields at most one [`CUE_TACTIC`] entry.
pub fn score_text(text: &str, terms: &TermList) -> Vec<TacticScore> {
    let tokens = tokenize(text);
    let joined = format!(" {} ", tokens.join(" "));
    let mut results = Vec::new();

    for (tactic, vocab) in &terms.tactics {
        let mut score = 0.0;
        let mut hits = Vec::new();

        for phrase in &vocab.phrases {
            let count = joined.matches(phrase.as_str()).count();
            if count > 0 {
                score += PHRASE_WEIGHT * count as f32;
                hits.push(TermHit {
                    term: phrase.clone(),
                    count,
                    kind: HitKind::Phrase,
                });
            }
        }

        for term in &vocab.tokens {
            let count: usize = roots(term)
                .into_iter()
                .map(|r| tokens.iter().filter(|t| t.starts_with(r)).count())
                .sum();
            if count > 0 {
                score += TOKEN_WEIGHT * count as f32;
                hits.push(TermHit {
                    term: term.clone(),
                    count,
                    kind: HitKind::Prefix,
                });
            }
        }

        if score > 0.0 {
            results.push(TacticScore {
                tactic: tactic.clone(),
                score,
                hits: top_hits(hits),
            });
        }
    }

    if results.is_empty() {
        results.extend(cue_fallback(&tokens));
    }
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!(tactics = results.len(), "tactics scored");
    results
}

pub const DEFAULT_MIN_TOP_SCORE: f32 = 3.0;
pub const DEFAULT_MIN_UNIQUE_TERMS: usize = 2;

/// Political when the top score reaches `min_top_score` or enough distinct
/// terms were hit across all tactics.
pub fn is_political(scores: &[TacticScore], min_top_score: f32, min_unique_terms: usize) -> bool {
    let Some(top) = scores.first() else {
        return false;
    };
    if top.score >= min_top_score {
        return true;
    }
    let unique: BTreeSet<&str> = scores
        .iter()
        .flat_map(|s| s.hits.iter().map(|h| h.term.as_str()))
        .collect();
    unique.len() >= min_unique_terms
}

// ============================================================================
// Zero-shot and report
// ============================================================================

/// Zero-shot tactic classification over the tactic names of `terms`.
pub fn classify_tactic(
    chain: &ClassifierChain,
    text: &str,
    terms: &TermList,
    hypothesis: &str,
    max_alternatives: usize,
) -> Result<ClassifyResult> {
    let labels = terms.tactic_names();
    if labels.is_empty() {
        return Err(PolisentError::TermListUnavailable(
            "tactic list is empty".to_string(),
        ));
    }
    Ok(chain
        .classify(text, &labels, hypothesis)?
        .truncate_alternatives(max_alternatives))
}

/// Tactic analysis attached to every result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticReport {
    pub scores: Vec<TacticScore>,
    pub is_political: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_shot: Option<ClassifyResult>,
    /// Why `zero_shot` is missing, when it was attempted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl TacticReport {
    /// Lexical scores only.
    pub fn lexical(text: &str, terms: &TermList) -> Self {
        let scores = score_text(text, terms);
        Self {
            is_political: is_political(&scores, DEFAULT_MIN_TOP_SCORE, DEFAULT_MIN_UNIQUE_TERMS),
            scores,
            zero_shot: None,
            warning: None,
        }
    }

    /// Record a zero-shot attempt.
    pub fn with_zero_shot(mut self, outcome: Result<ClassifyResult>) -> Self {
        match outcome {
            Ok(result) => self.zero_shot = Some(result),
            Err(e) => self.warning = Some(e.to_string()),
        }
        self
    }
}
