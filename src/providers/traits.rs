//! Classifier trait.
//!
//! Classifiers are synchronous and self-report availability:
//! - Return `ClassifierUnavailable` to signal the chain should try the next classifier
//! - Other errors are terminal and propagated to the caller
//!
//! # Example
//!
//! ```ignore
//! fn classify(&self, text: &str, labels: &[&str], template: &str) -> Result<ClassifyResult> {
//!     let Some(model) = self.model.get() else {
//!         return Err(PolisentError::ClassifierUnavailable("model not loaded".into()));
//!     };
//!     // ... score every label against the hypothesis
//! }
//! ```

use crate::Result;
use crate::types::ClassifyResult;

/// Zero-shot text classifier.
///
/// `hypothesis_template` contains one `{}` placeholder that is replaced by
/// each candidate label, e.g. `"Бұл {} екенін көрсетеді."`.
pub trait ZeroShotClassifier: Send + Sync {
    /// Classifier name for logging and metrics.
    fn name(&self) -> &str;

    fn classify(
        &self,
        text: &str,
        labels: &[&str],
        hypothesis_template: &str,
    ) -> Result<ClassifyResult>;
}

/// Fill the `{}` placeholder of a hypothesis template.
pub fn render_hypothesis(template: &str, label: &str) -> String {
    template.replacen("{}", label, 1)
}
