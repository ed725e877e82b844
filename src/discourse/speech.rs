//! Candidate-speech analysis: per-sentence labels and per-target stance.

use std::collections::HashMap;
use tracing::debug;

use super::segment::split_sentences;
use crate::ontology::OntologyMatcher;
use crate::rules::{campaign, speech};
use crate::types::{
    Address, DeviceTag, EntityKind, OntologyHit, Polarity, SentenceUnit, Span, SpeechAnalysis,
    StanceAggregate, StanceVotes,
};

/// Label one sentence.
///
/// Campaign devices set a first label, the evaluative lexicon then overrides
/// it when only one polarity is present.
pub fn label_sentence(sentence: &str) -> (Polarity, f32) {
    let devices: Vec<DeviceTag> = campaign::detect(sentence)
        .into_iter()
        .map(|h| h.device)
        .collect();

    let mut label = Polarity::Neutral;
    let mut score: f32 = 0.50;

    if devices.iter().any(DeviceTag::is_mobilizing) {
        label = Polarity::Positive;
        score = 0.70;
    }
    if devices.contains(&DeviceTag::Attack) {
        label = Polarity::Negative;
        score = score.max(0.72);
    }
    if devices.contains(&DeviceTag::Procedural) && label == Polarity::Neutral {
        score = score.min(0.60);
    }

    let eval = speech::evaluate(sentence);
    match (eval.positive, eval.negative) {
        (true, false) => (Polarity::Positive, 0.70),
        (false, true) => (Polarity::Negative, 0.72),
        _ => (label, score),
    }
}

/// Analyse a speech. Without a matcher no targets or stance are produced.
pub fn analyze_speech(text: &str, matcher: Option<&OntologyMatcher<'_>>) -> SpeechAnalysis {
    let ontology_hits = matcher.map(|m| m.match_text(text)).unwrap_or_default();
    let items: Vec<SentenceUnit> = split_sentences(text)
        .into_iter()
        .map(|(span, sentence)| sentence_unit(span, sentence, &ontology_hits))
        .collect();
    let stance = aggregate_stance(&items);
    debug!(
        sentences = items.len(),
        targets = stance.len(),
        "speech analysed"
    );
    SpeechAnalysis {
        items,
        stance,
        ontology_hits,
    }
}

fn sentence_unit(span: Span, sentence: &str, ontology_hits: &[OntologyHit]) -> SentenceUnit {
    let (sentiment, score) = label_sentence(sentence);
    let address = if speech::evaluate(sentence).second_person {
        Address::Opponent
    } else {
        Address::Unspecified
    };
    SentenceUnit {
        span,
        text: sentence.to_string(),
        sentiment,
        score,
        targets: ontology_hits
            .iter()
            .filter(|h| span.contains(&h.span))
            .cloned()
            .collect(),
        address,
    }
}

/// Majority label per `(kind, entity_id)`, in order of first appearance.
pub fn aggregate_stance(items: &[SentenceUnit]) -> Vec<StanceAggregate> {
    let mut order: Vec<(EntityKind, String)> = Vec::new();
    let mut votes: HashMap<(EntityKind, String), StanceVotes> = HashMap::new();
    for item in items {
        for target in &item.targets {
            let key = (target.kind, target.entity_id.clone());
            let entry = votes.entry(key.clone()).or_insert_with(|| {
                order.push(key);
                StanceVotes::default()
            });
            entry.record(item.sentiment);
        }
    }
    order
        .into_iter()
        .map(|key| {
            let v = votes.get(&key).copied().unwrap_or_default();
            StanceAggregate::from_votes(key.0, key.1, v)
        })
        .collect()
}
