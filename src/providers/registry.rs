//! Classifier chain with fallback semantics.
//!
//! The `ClassifierChain` stores classifiers in priority order (index 0 =
//! highest). A request tries each classifier in order until one succeeds or
//! returns a non-fallback error.
//!
//! # Fallback Triggers
//!
//! The chain falls through to the next classifier on `ClassifierUnavailable`
//! only. Every other error is terminal and stops the chain.
//!
//! ```text
//!         ┌─────────────────────┐
//!         │  ClassifierChain    │
//!         └─────────┬───────────┘
//!                   │ try in order
//!                   ▼
//!         ┌─────────────────────┐
//!         │  NLI model          │ ──► model/tokenizer missing?
//!         │  (priority 0)       │ ──► return ClassifierUnavailable
//!         └─────────┬───────────┘
//!                   │ ClassifierUnavailable
//!                   ▼
//!         ┌─────────────────────┐
//!         │  next classifier    │
//!         │  (priority 1)       │
//!         └─────────────────────┘
//! ```
//!
//! An exhausted chain returns the last `ClassifierUnavailable`; the analyzer
//! then falls back to the lexicon classifier.

use std::sync::Arc;

use tracing::{instrument, warn};

use super::traits::ZeroShotClassifier;
use crate::telemetry;
use crate::types::ClassifyResult;
use crate::{PolisentError, Result};

/// Ordered classifiers with fallback semantics.
#[derive(Default, Clone)]
pub struct ClassifierChain {
    classifiers: Vec<Arc<dyn ZeroShotClassifier>>,
}

impl std::fmt::Debug for ClassifierChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.classifiers.iter().map(|c| c.name()))
            .finish()
    }
}

impl ClassifierChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a classifier (lowest priority so far).
    pub fn push(&mut self, classifier: Arc<dyn ZeroShotClassifier>) {
        self.classifiers.push(classifier);
    }

    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }

    /// Names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.classifiers.iter().map(|c| c.name()).collect()
    }

    /// Zero-shot classification through the chain.
    #[instrument(skip_all, fields(labels = labels.len()))]
    pub fn classify(
        &self,
        text: &str,
        labels: &[&str],
        hypothesis_template: &str,
    ) -> Result<ClassifyResult> {
        let mut last_err = None;
        for classifier in &self.classifiers {
            match classifier.classify(text, labels, hypothesis_template) {
                Ok(result) => {
                    Self::record_request(classifier.name(), "ok");
                    return Ok(result);
                }
                Err(e @ PolisentError::ClassifierUnavailable(_)) => {
                    warn!(classifier = classifier.name(), error = %e, "classifier unavailable, trying next");
                    Self::record_request(classifier.name(), "unavailable");
                    last_err = Some(e);
                }
                Err(e) => {
                    Self::record_request(classifier.name(), "error");
                    return Err(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| {
            PolisentError::ClassifierUnavailable("no classifier configured".to_string())
        }))
    }

    fn record_request(classifier: &str, status: &'static str) {
        metrics::counter!(telemetry::CLASSIFIER_REQUESTS_TOTAL,
            "classifier" => classifier.to_owned(),
            "status" => status,
        )
        .increment(1);
    }
}
