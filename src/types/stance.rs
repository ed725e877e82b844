//! Stance aggregation types.
//!
//! A stance is the sentiment a text directs at one ontology entity, rolled
//! up over every sentence that mentions it.

use serde::{Deserialize, Serialize};

use super::{EntityKind, Polarity};

/// Positive and negative sentence votes for one target.
///
/// Neutral sentences are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StanceVotes {
    pub pos: usize,
    pub neg: usize,
}

impl StanceVotes {
    /// Record one sentence label.
    pub fn record(&mut self, label: Polarity) {
        match label {
            Polarity::Positive => self.pos += 1,
            Polarity::Negative => self.neg += 1,
            Polarity::Neutral => {}
        }
    }

    /// Strict majority; ties (including 0–0) resolve to neutral.
    pub fn majority(&self) -> Polarity {
        if self.pos > self.neg {
            Polarity::Positive
        } else if self.neg > self.pos {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

/// Aggregated stance towards one `(kind, entity_id)` target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StanceAggregate {
    pub kind: EntityKind,
    pub entity_id: String,
    /// Majority label derived from `votes`.
    pub label: Polarity,
    pub votes: StanceVotes,
}

impl StanceAggregate {
    /// Create an aggregate from vote counts; the label is their majority.
    pub fn from_votes(kind: EntityKind, entity_id: impl Into<String>, votes: StanceVotes) -> Self {
        Self {
            kind,
            entity_id: entity_id.into(),
            label: votes.majority(),
            votes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stance_from_votes_positive() {
        let agg = StanceAggregate::from_votes(
            EntityKind::Actor,
            "onto#candidate",
            StanceVotes { pos: 3, neg: 1 },
        );
        assert_eq!(agg.label, Polarity::Positive);
        assert_eq!(agg.entity_id, "onto#candidate");
    }

    #[test]
    fn stance_from_votes_negative() {
        let agg =
            StanceAggregate::from_votes(EntityKind::Topic, "onto#tax", StanceVotes { pos: 0, neg: 1 });
        assert_eq!(agg.label, Polarity::Negative);
    }

    #[test]
    fn stance_from_votes_tie_is_neutral() {
        let agg =
            StanceAggregate::from_votes(EntityKind::Org, "onto#party", StanceVotes { pos: 2, neg: 2 });
        assert_eq!(agg.label, Polarity::Neutral);
    }

    #[test]
    fn neutral_votes_are_not_counted() {
        let mut votes = StanceVotes::default();
        votes.record(Polarity::Neutral);
        votes.record(Polarity::Neutral);
        votes.record(Polarity::Negative);
        assert_eq!(votes, StanceVotes { pos: 0, neg: 1 });
        assert_eq!(votes.majority(), Polarity::Negative);
    }
}
