//! Ontology match types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{DeviceTag, Polarity, Span};

/// Coarse entity category inferred from an entity's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Actor,
    Org,
    Topic,
}

/// A text window whose normalized form equals an ontology label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub matched_text: String,
    pub span: Span,
    pub entity_id: String,
    pub labels: Vec<String>,
}

/// A mention enriched with kind, declared polarity and device tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OntologyHit {
    pub matched_text: String,
    pub span: Span,
    pub entity_id: String,
    pub labels: Vec<String>,
    pub kind: EntityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub device_tags: BTreeSet<DeviceTag>,
}
