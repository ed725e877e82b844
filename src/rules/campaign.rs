//! Campaign-advertisement device rules.
//!
//! Detects the rhetorical devices of an election ad, counts them together
//! with device tags declared in the ontology, and derives a rule-based label
//! and an ontology polarity prior.

use once_cell::sync::Lazy;
use tracing::debug;

use super::{RuleSet, RuleTable};
use crate::types::{DeviceCount, DeviceHit, DeviceTag, Emotion, OntologyHit, Polarity, RulePrediction};

/// Device patterns, in evaluation order.
pub const CAMPAIGN_TABLE: &RuleTable<DeviceTag> = &[
    (
        DeviceTag::CallToAction,
        &[
            r"\bдауыс\s+бер(іңіз|іңіздер|ейік)\b",
            r"\bқолда(ңыз|ңыздар|уға)\b",
            r"\bқосыл(ыңыз|ыңыздар|уға)\b",
        ],
    ),
    (
        DeviceTag::Plan,
        &[
            r"\b(мен|біз)\s+депутат( болсам| болсақ)\b",
            r"\b(болсам|болсақ)\b.*\b(жасаймын|етемін|өзгертемін|қайта қараймын|алып тастаймын)\b",
            r"\b(жоспарлаймын|көздеймін|ниеттенемін)\b",
        ],
    ),
    (
        DeviceTag::Promise,
        &[
            r"\bуәде\s+бер(еміз|емін)\b",
            r"\bжүзеге\s+асырамыз\b|\bорындаймыз\b",
            r"\bжалақы(ны)?\s+көтереміз\b",
            // first person singular, future
            r"\b(жасаймын|етемін|орындаймын|жүзеге асырамын|әзірлеймін)\b",
            r"\b(азайтамын|жоғартамын|тоқтатамын|қысқартамын|қараймын|қайта қараймын|алып тастаймын)\b",
            // first person plural, future
            r"\b(жасаймыз|етеміз|орындаймыз|жүзеге асырамыз|көтереміз|қысқартамыз|алып тастаймыз)\b",
        ],
    ),
    (
        DeviceTag::Attack,
        &[
            r"\bөтірік\b|\bжалған\b|\bмасқара\b|\bжемқор(лық)?\b",
            r"\bуәдесін\s+орындама(ды|ған)\b",
        ],
    ),
    (
        DeviceTag::Procedural,
        &[
            r"\bүгіт[-\s]?насихат\s+кезең(і|інің)\b",
            r"\bорталық\s+сайлау\s+комиссиясы\b|\bОСК\b",
            r"\bдауыс\s+беру\s+нәтижесі\b",
        ],
    ),
];

pub static CAMPAIGN_RULES: Lazy<RuleSet<DeviceTag>> =
    Lazy::new(|| RuleSet::compile(CAMPAIGN_TABLE).expect("valid campaign rules"));

/// Detect campaign devices in `text`.
pub fn detect(text: &str) -> Vec<DeviceHit> {
    let hits = CAMPAIGN_RULES.detect(text);
    debug!(hits = hits.len(), "campaign devices detected");
    hits
}

/// Count regex hits and ontology-declared device tags together.
pub fn summarize(hits: &[DeviceHit], ontology_hits: &[OntologyHit]) -> DeviceCount {
    let mut counts = DeviceCount::new();
    for hit in hits {
        counts.add(hit.device);
    }
    for hit in ontology_hits {
        for tag in &hit.device_tags {
            counts.add(*tag);
        }
    }
    counts
}

/// Decision list over device counts; the first matching rule wins.
pub fn rule_sentiment(counts: &DeviceCount) -> RulePrediction {
    if counts.get(DeviceTag::Attack) > 0 {
        RulePrediction {
            sentiment: Polarity::Negative,
            emotion: Emotion::Anger,
        }
    } else if counts.mobilizing() > 0 {
        RulePrediction {
            sentiment: Polarity::Positive,
            emotion: Emotion::Trust,
        }
    } else {
        // procedural and "nothing found" both read as neutral
        RulePrediction {
            sentiment: Polarity::Neutral,
            emotion: Emotion::Neutral,
        }
    }
}

/// Strongest polarity declared by any hit: negative > positive > neutral.
pub fn ontology_polarity_prior(ontology_hits: &[OntologyHit]) -> Option<Polarity> {
    let declared = || ontology_hits.iter().filter_map(|h| h.polarity);
    [Polarity::Negative, Polarity::Positive, Polarity::Neutral]
        .into_iter()
        .find(|p| declared().any(|d| d == *p))
}
