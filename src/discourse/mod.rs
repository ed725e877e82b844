//! Domain analyzers.
//!
//! Each analyzer takes the raw text and an optional [`OntologyMatcher`];
//! without a matcher the ontology-dependent parts come back empty.
//!
//! [`OntologyMatcher`]: crate::ontology::OntologyMatcher

pub mod campaign;
pub mod debate;
pub mod segment;
pub mod speech;

pub use campaign::{CampaignPack, detect_campaign};
pub use debate::{analyze_debate, analyze_turn};
pub use segment::{segment_turns, split_sentences};
pub use speech::{aggregate_stance, analyze_speech, label_sentence};
