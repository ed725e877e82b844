//! Campaign-ad evidence gathering.

use tracing::debug;

use crate::fusion::post_fuse;
use crate::ontology::OntologyMatcher;
use crate::rules::campaign::{self, ontology_polarity_prior, rule_sentiment, summarize};
use crate::types::{
    CampaignAnalysis, CampaignHits, DeviceCount, DeviceHit, OntologyHit, Polarity, RulePrediction,
};

/// Regex and ontology evidence for one campaign text, before fusion.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignPack {
    pub regex_hits: Vec<DeviceHit>,
    pub ontology_hits: Vec<OntologyHit>,
    pub devices: DeviceCount,
    pub rule_prediction: RulePrediction,
    pub ontology_prior: Option<Polarity>,
}

impl CampaignPack {
    /// Fuse a base classification with this evidence.
    pub fn fuse(self, base_label: &str, base_score: f32) -> CampaignAnalysis {
        let fused = post_fuse(
            base_label,
            base_score,
            &self.devices,
            &self.rule_prediction,
            self.ontology_prior,
        );
        CampaignAnalysis {
            devices: self.devices,
            rule_prediction: self.rule_prediction,
            ontology_prior: self.ontology_prior,
            hits: CampaignHits {
                regex: self.regex_hits,
                ontology: self.ontology_hits,
            },
            fused,
        }
    }
}

pub fn detect_campaign(text: &str, matcher: Option<&OntologyMatcher<'_>>) -> CampaignPack {
    let regex_hits = campaign::detect(text);
    let ontology_hits = matcher.map(|m| m.match_text(text)).unwrap_or_default();
    let devices = summarize(&regex_hits, &ontology_hits);
    let rule_prediction = rule_sentiment(&devices);
    let ontology_prior = ontology_polarity_prior(&ontology_hits);
    debug!(
        regex_hits = regex_hits.len(),
        ontology_hits = ontology_hits.len(),
        prior = ?ontology_prior,
        "campaign evidence collected"
    );
    CampaignPack {
        regex_hits,
        ontology_hits,
        devices,
        rule_prediction,
        ontology_prior,
    }
}
