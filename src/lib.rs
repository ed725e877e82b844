//! Polisent - sentiment analysis for Kazakh political discourse
//!
//! This crate labels campaign ads, candidate speeches and debates by fusing
//! three signals: a zero-shot classifier (or a word-list fallback), regex
//! rhetorical-device rules, and an ontology of political actors,
//! organizations and topics with declared polarities.
//!
//! # Example
//!
//! ```rust,no_run
//! use polisent::{Analyzer, Domain, Source, Task};
//!
//! fn main() -> polisent::Result<()> {
//!     let analyzer = Analyzer::builder()
//!         .ontology_path("data/political_discourse_ontology.json")
//!         .term_list_path("data/political_discourse_terms.json")
//!         .build()?;
//!
//!     let result = analyzer.analyze(
//!         "Бізге дауыс беріңіз! Жалақыны көтереміз.",
//!         Domain::CampaignAd,
//!         Source::Official,
//!         Task::Sentiment,
//!     );
//!
//!     println!("{} ({:.2})", result.label, result.score);
//!     if let Some(warning) = &result.warning {
//!         eprintln!("degraded: {warning}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Without a zero-shot classifier the lexicon fallback labels the text and
//! the result carries a warning. Register model-backed classifiers with
//! [`AnalyzerBuilder::classifier`].

pub mod analyzer;
pub mod config;
pub mod discourse;
pub mod error;
pub mod fusion;
pub mod ontology;
pub mod providers;
pub mod rules;
pub mod tactics;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use config::Config;
pub use error::{PolisentError, Result};
pub use ontology::{JsonOntology, OntologyMatcher, OntologyStore};
pub use providers::{ClassifierChain, LexiconClassifier, ZeroShotClassifier};
pub use tactics::{TacticReport, TermList};

// Re-export all types
pub use types::{
    Address, Alternative, AnalysisResult, CampaignAnalysis, ClassifyResult, DebateAnalysis,
    DeviceCount, DeviceHit, DeviceTag, Domain, Emotion, EntityKind, Mention, OntologyHit, Polarity,
    RulePrediction, SentenceUnit, Source, Span, SpeakerTally, SpeechAnalysis, StanceAggregate,
    StanceVotes, Task, Turn, TurnAnalysis, TurnFlags, Verdict,
};
