//! Evaluative lexicon for candidate speeches.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{RuleSet, RuleTable};
use crate::types::DeviceHit;

/// Evaluative cue found in a speech sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalTag {
    PosVerb,
    NegVerb,
    PosAdj,
    NegAdj,
    FirstPerson,
    SecondPerson,
}

impl EvalTag {
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::PosVerb | Self::PosAdj)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Self::NegVerb | Self::NegAdj)
    }
}

pub const EVALUATIVE_TABLE: &RuleTable<EvalTag> = &[
    (
        EvalTag::PosVerb,
        &[r"\b(қолдаймын|мақұлдаймын|құптаймын|мақтаймын|қажет деп санаймын|сенемін)\b"],
    ),
    (
        EvalTag::NegVerb,
        &[r"\b(сынға аламын|қарсымын|қабылдай алмаймын|жақтамаймын|жоққа шығарамын)\b"],
    ),
    (EvalTag::PosAdj, &[r"\b(дұрыс|орынды|маңызды|тиімді|әділетті)\b"]),
    (EvalTag::NegAdj, &[r"\b(дұрыс емес|ысырапшыл|ақымақ|қатерлі|әділетсіз)\b"]),
    (EvalTag::FirstPerson, &[r"\b(мен|біз)\b"]),
    (EvalTag::SecondPerson, &[r"\b(сіз|сіздер)\b"]),
];

pub static EVALUATIVE_RULES: Lazy<RuleSet<EvalTag>> =
    Lazy::new(|| RuleSet::compile(EVALUATIVE_TABLE).expect("valid evaluative rules"));

pub fn detect(text: &str) -> Vec<DeviceHit<EvalTag>> {
    EVALUATIVE_RULES.detect(text)
}

/// Evaluative polarity cues present in a sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub positive: bool,
    pub negative: bool,
    pub second_person: bool,
}

/// Summarize the evaluative cues of one sentence.
pub fn evaluate(text: &str) -> Evaluation {
    detect(text)
        .iter()
        .fold(Evaluation::default(), |mut eval, hit| {
            eval.positive |= hit.device.is_positive();
            eval.negative |= hit.device.is_negative();
            eval.second_person |= hit.device == EvalTag::SecondPerson;
            eval
        })
}
