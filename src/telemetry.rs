//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus,
//! statsd); without a recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `polisent_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `domain`: analysis domain (e.g. "campaign_ad", "debate")
//! - `task`: "emotion" or "sentiment"
//! - `stage`: degraded collaborator: "classifier", "ontology" or "terms"
//! - `status`: outcome: "ok", "unavailable" or "error"

/// Total analyses served.
///
/// Labels: `domain`, `task`.
pub const ANALYSES_TOTAL: &str = "polisent_analyses_total";

/// Analysis duration in seconds.
///
/// Labels: `domain`.
pub const ANALYSIS_DURATION_SECONDS: &str = "polisent_analysis_duration_seconds";

/// Total degraded stages (a collaborator was unavailable and a fallback ran).
///
/// Labels: `stage`.
pub const FALLBACKS_TOTAL: &str = "polisent_fallbacks_total";

/// Total classifier invocations through the chain.
///
/// Labels: `classifier`, `status`.
pub const CLASSIFIER_REQUESTS_TOTAL: &str = "polisent_classifier_requests_total";
