//! Public types for the Polisent API.

mod classify;
mod device;
mod discourse;
mod label;
mod ontology;
mod result;
mod span;
mod stance;

pub use classify::{Alternative, ClassifyResult};
pub use device::{DeviceCount, DeviceHit, DeviceTag, RulePrediction};
pub use discourse::{
    Address, CampaignAnalysis, CampaignHits, DebateAnalysis, SentenceUnit, SpeakerTally,
    SpeechAnalysis, Turn, TurnAnalysis, TurnFlags, UNKNOWN_SPEAKER, Verdict,
};
pub use label::{Domain, Emotion, Polarity, Source, Task};
pub use ontology::{EntityKind, Mention, OntologyHit};
pub use result::{AnalysisResult, WARNING_SEPARATOR};
pub use span::Span;
pub use stance::{StanceAggregate, StanceVotes};
