//! Debate turn cues.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{RuleSet, RuleTable};
use crate::types::TurnFlags;

/// Conversational move signalled by a debate turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnCue {
    Attack,
    Defend,
    Concede,
    Question,
}

pub const DEBATE_TABLE: &RuleTable<TurnCue> = &[
    (TurnCue::Attack, &[r"\b(жоқ|дұрыс емес|өтірік|саңдырақ|қате)\b"]),
    (TurnCue::Defend, &[r"\b(емес|жоқпыз|түсіндіріп өтейін|нақтылайын)\b"]),
    (
        TurnCue::Concede,
        &[r"\b(иә,\s*бірақ|келісемін,\s*алайда|рас,\s*дегенмен)\b"],
    ),
    (TurnCue::Question, &[r"\?\s*$"]),
];

pub static DEBATE_RULES: Lazy<RuleSet<TurnCue>> =
    Lazy::new(|| RuleSet::compile(DEBATE_TABLE).expect("valid debate rules"));

/// Flags for every cue present in a turn.
pub fn flags(text: &str) -> TurnFlags {
    let rules = &*DEBATE_RULES;
    TurnFlags {
        attack: rules.is_match(TurnCue::Attack, text),
        question: rules.is_match(TurnCue::Question, text),
        defend: rules.is_match(TurnCue::Defend, text),
        concede: rules.is_match(TurnCue::Concede, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_cue() {
        let f = flags("Бұл өтірік!");
        assert!(f.attack);
        assert!(!f.question);
    }

    #[test]
    fn concede_cue_allows_missing_space() {
        assert!(flags("Иә,бірақ бюджет шектеулі.").concede);
        assert!(flags("Келісемін, алайда мерзім қысқа.").concede);
    }

    #[test]
    fn question_only_when_trailing() {
        assert!(flags("Сіз не істедіңіз?  ").question);
        assert!(!flags("Неге? Себебі бюджет жоқ.").question);
    }

    #[test]
    fn defend_cue() {
        let f = flags("Рұқсат етіңіз, нақтылайын.");
        assert!(f.defend);
        assert!(!f.attack);
    }
}
