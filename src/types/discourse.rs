//! Per-domain analysis results (speech, debate, campaign)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DeviceCount, DeviceHit, OntologyHit, Polarity, RulePrediction, Span, StanceAggregate};

/// Label with a confidence score clamped to `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: String,
    pub score: f32,
}

impl Verdict {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score: clamp_score(score),
        }
    }

    /// Whether the current label names `polarity`.
    pub fn is(&self, polarity: Polarity) -> bool {
        polarity.matches(&self.label)
    }
}

/// Clamp a score into `[0, 1]`; NaN becomes 0.
pub(crate) fn clamp_score(score: f32) -> f32 {
    if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) }
}

// ============================================================================
// Speech
// ============================================================================

/// Who a sentence is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Address {
    /// Second-person address: directed at the opponent.
    Opponent,
    /// First-person framing: the speaker talks about themself.
    #[serde(rename = "self")]
    Speaker,
    Unspecified,
}

/// One analysed sentence of a speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceUnit {
    pub span: Span,
    pub text: String,
    pub sentiment: Polarity,
    pub score: f32,
    /// Ontology hits lying inside this sentence.
    pub targets: Vec<OntologyHit>,
    pub address: Address,
}

/// Speech analysis: per-sentence labels and per-target stance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechAnalysis {
    pub items: Vec<SentenceUnit>,
    pub stance: Vec<StanceAggregate>,
    pub ontology_hits: Vec<OntologyHit>,
}

// ============================================================================
// Debate
// ============================================================================

/// Speaker name used when a line carries no speaker prefix.
pub const UNKNOWN_SPEAKER: &str = "unknown";

/// A speaker turn in a debate transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: String,
    pub text: String,
}

impl Turn {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        let speaker = speaker.into();
        Self {
            speaker: if speaker.trim().is_empty() {
                UNKNOWN_SPEAKER.to_string()
            } else {
                speaker
            },
            text: text.into(),
        }
    }

    pub fn unknown(text: impl Into<String>) -> Self {
        Self::new(UNKNOWN_SPEAKER, text)
    }

    pub fn is_unknown(&self) -> bool {
        self.speaker == UNKNOWN_SPEAKER
    }
}

/// Debate cues found in a turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnFlags {
    pub attack: bool,
    pub question: bool,
    pub defend: bool,
    pub concede: bool,
}

/// One analysed debate turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnAnalysis {
    pub speaker: String,
    pub text: String,
    pub sentiment: Polarity,
    pub score: f32,
    pub flags: TurnFlags,
    pub mentions: Vec<OntologyHit>,
}

/// Raw per-label turn counts for one speaker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerTally {
    #[serde(rename = "оң")]
    pub positive: usize,
    #[serde(rename = "теріс")]
    pub negative: usize,
    #[serde(rename = "бейтарап")]
    pub neutral: usize,
}

impl SpeakerTally {
    pub fn record(&mut self, label: Polarity) {
        match label {
            Polarity::Positive => self.positive += 1,
            Polarity::Negative => self.negative += 1,
            Polarity::Neutral => self.neutral += 1,
        }
    }
}

/// Debate analysis: per-turn labels and per-speaker tallies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateAnalysis {
    pub turns: Vec<TurnAnalysis>,
    pub by_speaker: BTreeMap<String, SpeakerTally>,
}

impl DebateAnalysis {
    /// Number of turns carrying `label`.
    pub fn count(&self, label: Polarity) -> usize {
        self.turns.iter().filter(|t| t.sentiment == label).count()
    }
}

// ============================================================================
// Campaign
// ============================================================================

/// Evidence behind a campaign fusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignHits {
    pub regex: Vec<DeviceHit>,
    pub ontology: Vec<OntologyHit>,
}

/// Campaign-ad analysis: device counts, priors and the fused verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignAnalysis {
    pub devices: DeviceCount,
    pub rule_prediction: RulePrediction,
    pub ontology_prior: Option<Polarity>,
    pub hits: CampaignHits,
    pub fused: Verdict,
}
