//! Top-level analysis result

use serde::{Deserialize, Serialize};

use super::discourse::clamp_score;
use super::{Alternative, CampaignAnalysis, ClassifyResult, DebateAnalysis, SpeechAnalysis, Verdict};
use crate::tactics::TacticReport;

/// Separator between warnings raised by different stages.
pub const WARNING_SEPARATOR: &str = "; ";

/// Final analysis of one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub label: String,
    /// Confidence in `[0, 1]`.
    pub score: f32,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    /// Degradation notes, joined with [`WARNING_SEPARATOR`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<SpeechAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debate: Option<DebateAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<CampaignAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tactics: Option<TacticReport>,
}

impl AnalysisResult {
    /// Start a result from the base classifier output.
    pub fn from_base(base: ClassifyResult) -> Self {
        Self {
            label: base.label,
            score: clamp_score(base.score),
            alternatives: base.alternatives,
            warning: None,
            speech: None,
            debate: None,
            campaign: None,
            tactics: None,
        }
    }

    /// Append a warning, keeping earlier ones.
    pub fn push_warning(&mut self, warning: impl AsRef<str>) {
        let warning = warning.as_ref();
        match &mut self.warning {
            Some(existing) => {
                existing.push_str(WARNING_SEPARATOR);
                existing.push_str(warning);
            }
            None => self.warning = Some(warning.to_string()),
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::new(self.label.clone(), self.score)
    }

    /// Overwrite label and score; the score is clamped.
    pub fn apply(&mut self, verdict: Verdict) {
        self.label = verdict.label;
        self.score = clamp_score(verdict.score);
    }
}
