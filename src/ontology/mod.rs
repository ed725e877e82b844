//! Ontology of political actors, organizations and topics.
//!
//! [`OntologyStore`] is the query seam; [`JsonOntology`] is the bundled
//! in-memory store. [`OntologyMatcher`] turns text into [`OntologyHit`]s.
//!
//! [`OntologyHit`]: crate::OntologyHit

mod matcher;
mod store;

pub use matcher::{DEFAULT_MAX_NGRAM, OntologyMatcher, classify_kind, find_mentions};
pub use store::{EntityRecord, JsonOntology, LABEL_LANGS, LabelEntry, OntologyStore, normalize};
