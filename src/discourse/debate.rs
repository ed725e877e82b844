//! Debate analysis: per-turn labels and per-speaker tallies.

use std::collections::BTreeMap;
use tracing::debug;

use super::segment::segment_turns;
use crate::ontology::OntologyMatcher;
use crate::rules::debate;
use crate::types::{DebateAnalysis, Polarity, SpeakerTally, Turn, TurnAnalysis};

/// Label one turn. The question flag never changes the label.
pub fn analyze_turn(turn: &Turn, matcher: Option<&OntologyMatcher<'_>>) -> TurnAnalysis {
    let flags = debate::flags(&turn.text);
    let (sentiment, score) = if flags.attack {
        (Polarity::Negative, 0.72)
    } else if flags.concede {
        (Polarity::Positive, 0.66)
    } else if flags.defend {
        (Polarity::Neutral, 0.55)
    } else {
        (Polarity::Neutral, 0.50)
    };
    TurnAnalysis {
        speaker: turn.speaker.clone(),
        text: turn.text.clone(),
        sentiment,
        score,
        flags,
        mentions: matcher.map(|m| m.match_text(&turn.text)).unwrap_or_default(),
    }
}

pub fn analyze_debate(text: &str, matcher: Option<&OntologyMatcher<'_>>) -> DebateAnalysis {
    let turns: Vec<TurnAnalysis> = segment_turns(text)
        .iter()
        .map(|t| analyze_turn(t, matcher))
        .collect();
    let mut by_speaker: BTreeMap<String, SpeakerTally> = BTreeMap::new();
    for turn in &turns {
        by_speaker
            .entry(turn.speaker.clone())
            .or_default()
            .record(turn.sentiment);
    }
    debug!(turns = turns.len(), speakers = by_speaker.len(), "debate analysed");
    DebateAnalysis { turns, by_speaker }
}
