//! Polisent error types

/// Polisent error types
#[derive(Debug, thiserror::Error)]
pub enum PolisentError {
    // Collaborator errors (degradable)
    /// The zero-shot classifier (model or tokenizer) could not be used.
    /// The classifier chain tries the next classifier on this error.
    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    #[error("ontology unavailable: {0}")]
    OntologyUnavailable(String),

    #[error("term list unavailable: {0}")]
    TermListUnavailable(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PolisentError {
    /// Whether the analysis can continue on a fallback path.
    ///
    /// Degradable errors are reported as warnings on the result and never
    /// reach the caller of [`Analyzer::analyze`](crate::Analyzer::analyze).
    pub fn is_degradable(&self) -> bool {
        matches!(
            self,
            Self::ClassifierUnavailable(_)
                | Self::OntologyUnavailable(_)
                | Self::TermListUnavailable(_)
        )
    }
}

/// Result type alias for Polisent operations
pub type Result<T> = std::result::Result<T, PolisentError>;
