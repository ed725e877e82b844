//! Campaign fusion policy.
//!
//! The base classifier label is corrected by an ordered decision list. Each
//! [`FusionStep`] checks its trigger against the *current* verdict, and when
//! it fires forces a polarity and bounds the score. Steps run in order and a
//! later step may overwrite an earlier one:
//!
//! | # | Trigger | Label | Score |
//! |---|---------|-------|-------|
//! | 1 | procedural ≥ max(1, attack) | neutral | at most 0.60 |
//! | 2 | attack > 0, label ≠ negative | negative | at least 0.72 |
//! | 3 | mobilizing > 0, label ≠ positive | positive | at least 0.70 |
//! | 4 | prior negative, label ≠ negative | negative | at least 0.74 |
//! | 5 | prior positive, label ≠ positive | positive | at least 0.72 |
//! | 6 | prior neutral | neutral | at most 0.60 |
//!
//! Device counts are a weak prior; the ontology polarity runs last and wins.

use tracing::debug;

use crate::types::{DeviceCount, DeviceTag, Polarity, RulePrediction, Verdict};

/// Score bound applied when a step fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreAdjust {
    /// `min(score, bound)`
    AtMost(f32),
    /// `max(score, bound)`
    AtLeast(f32),
}

impl ScoreAdjust {
    pub fn apply(&self, score: f32) -> f32 {
        match *self {
            Self::AtMost(bound) => score.min(bound),
            Self::AtLeast(bound) => score.max(bound),
        }
    }
}

/// Signals available to the fusion steps.
#[derive(Debug, Clone, Copy)]
pub struct FusionInput<'a> {
    pub devices: &'a DeviceCount,
    pub prior: Option<Polarity>,
}

/// One entry of the decision list.
#[derive(Debug, Clone, Copy)]
pub struct FusionStep {
    pub name: &'static str,
    pub trigger: fn(&Verdict, &FusionInput<'_>) -> bool,
    pub polarity: Polarity,
    pub adjust: ScoreAdjust,
}

impl FusionStep {
    /// Apply the step to `verdict`; returns whether it fired.
    pub fn run(&self, verdict: &mut Verdict, input: &FusionInput<'_>) -> bool {
        if !(self.trigger)(verdict, input) {
            return false;
        }
        verdict.label = self.polarity.as_str().to_string();
        verdict.score = self.adjust.apply(verdict.score);
        true
    }
}

pub const FUSION_STEPS: [FusionStep; 6] = [
    FusionStep {
        name: "procedural",
        trigger: |_, i| i.devices.get(DeviceTag::Procedural) >= i.devices.get(DeviceTag::Attack).max(1),
        polarity: Polarity::Neutral,
        adjust: ScoreAdjust::AtMost(0.60),
    },
    FusionStep {
        name: "attack",
        trigger: |v, i| i.devices.get(DeviceTag::Attack) > 0 && !v.is(Polarity::Negative),
        polarity: Polarity::Negative,
        adjust: ScoreAdjust::AtLeast(0.72),
    },
    FusionStep {
        name: "mobilizing",
        trigger: |v, i| i.devices.mobilizing() > 0 && !v.is(Polarity::Positive),
        polarity: Polarity::Positive,
        adjust: ScoreAdjust::AtLeast(0.70),
    },
    FusionStep {
        name: "prior_negative",
        trigger: |v, i| i.prior == Some(Polarity::Negative) && !v.is(Polarity::Negative),
        polarity: Polarity::Negative,
        adjust: ScoreAdjust::AtLeast(0.74),
    },
    FusionStep {
        name: "prior_positive",
        trigger: |v, i| i.prior == Some(Polarity::Positive) && !v.is(Polarity::Positive),
        polarity: Polarity::Positive,
        adjust: ScoreAdjust::AtLeast(0.72),
    },
    FusionStep {
        name: "prior_neutral",
        trigger: |_, i| i.prior == Some(Polarity::Neutral),
        polarity: Polarity::Neutral,
        adjust: ScoreAdjust::AtMost(0.60),
    },
];

/// Correct a base classification with device counts and the ontology prior.
///
/// `rule_pred` is evidence only: it is logged but takes no part in the steps.
pub fn post_fuse(
    base_label: &str,
    base_score: f32,
    devices: &DeviceCount,
    rule_pred: &RulePrediction,
    onto_prior: Option<Polarity>,
) -> Verdict {
    let input = FusionInput {
        devices,
        prior: onto_prior,
    };
    let mut verdict = Verdict {
        label: base_label.to_string(),
        score: base_score,
    };
    for step in &FUSION_STEPS {
        if step.run(&mut verdict, &input) {
            debug!(step = step.name, label = %verdict.label, score = verdict.score, "fusion step fired");
        }
    }
    debug!(rule_sentiment = %rule_pred.sentiment, "campaign fusion done");
    Verdict::new(verdict.label, verdict.score)
}
