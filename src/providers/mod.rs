//! Classifier implementations and the fallback chain.
//!
//! # Architecture
//!
//! - [`ZeroShotClassifier`]: the capability trait, implemented by model
//!   wrappers outside this crate and by [`LexiconClassifier`]
//! - [`ClassifierChain`]: fallback chain over classifiers in priority order
//! - [`LexiconClassifier`]: word-list heuristic used when the chain is exhausted

mod lexicon;
mod registry;
mod traits;

pub use lexicon::{LexiconClassifier, LexiconReading};
pub use registry::ClassifierChain;
pub use traits::{ZeroShotClassifier, render_hypothesis};
