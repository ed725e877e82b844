//! Resolve word windows of a text to ontology entities.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::store::{OntologyStore, normalize};
use crate::types::{EntityKind, Mention, OntologyHit, Span};

/// Longest word window looked up by default.
pub const DEFAULT_MAX_NGRAM: usize = 5;

const ORG_KEYWORDS: &[&str] = &["партия", "фракция", "ұйым", "министрлік", "министерство"];
const TOPIC_KEYWORDS: &[&str] = &["салық", "білім", "денсаулық", "инфляция", "экономика", "әлеумет"];

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("valid regex"));

/// Find every window of `1..=max_ngram` words whose normalized text is a label.
///
/// A window is located with a first-occurrence search of its raw text, so an
/// identical earlier substring takes the span. Every window hit is its own
/// mention, so a repeated label yields several mentions sharing that span.
pub fn find_mentions(store: &dyn OntologyStore, text: &str, max_ngram: usize) -> Vec<Mention> {
    let words: Vec<Span> = WORD.find_iter(text).map(Span::from).collect();
    let mut mentions = Vec::new();

    for first in 0..words.len() {
        for n in 1..=max_ngram.min(words.len() - first) {
            let raw = &text[words[first].start..words[first + n - 1].end];
            let ids = store.lookup_label(&normalize(raw));
            if ids.is_empty() {
                continue;
            }
            let Some(start) = text.find(raw) else {
                continue;
            };
            let span = Span::new(start, start + raw.len());
            for entity_id in ids {
                mentions.push(Mention {
                    matched_text: raw.to_string(),
                    span,
                    labels: store.get_labels(&entity_id),
                    entity_id,
                });
            }
        }
    }
    debug!(mentions = mentions.len(), "ontology mentions found");
    mentions
}

/// Keyword heuristic over the joined labels: org first, then topic, else actor.
pub fn classify_kind(labels: &[String]) -> EntityKind {
    let joined = labels.join(" ").to_lowercase();
    if ORG_KEYWORDS.iter().any(|k| joined.contains(k)) {
        EntityKind::Org
    } else if TOPIC_KEYWORDS.iter().any(|k| joined.contains(k)) {
        EntityKind::Topic
    } else {
        EntityKind::Actor
    }
}

/// Mentions enriched with kind, polarity and device tags.
pub struct OntologyMatcher<'a> {
    store: &'a dyn OntologyStore,
    max_ngram: usize,
}

impl<'a> OntologyMatcher<'a> {
    pub fn new(store: &'a dyn OntologyStore) -> Self {
        Self {
            store,
            max_ngram: DEFAULT_MAX_NGRAM,
        }
    }

    pub fn with_max_ngram(mut self, max_ngram: usize) -> Self {
        self.max_ngram = max_ngram.max(1);
        self
    }

    pub fn find_mentions(&self, text: &str) -> Vec<Mention> {
        find_mentions(self.store, text, self.max_ngram)
    }

    pub fn match_text(&self, text: &str) -> Vec<OntologyHit> {
        self.find_mentions(text)
            .into_iter()
            .map(|m| OntologyHit {
                kind: classify_kind(&m.labels),
                polarity: self.store.get_polarity(&m.entity_id),
                device_tags: self.store.get_devices(&m.entity_id),
                matched_text: m.matched_text,
                span: m.span,
                entity_id: m.entity_id,
                labels: m.labels,
            })
            .collect()
    }
}
