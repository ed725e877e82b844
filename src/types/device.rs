//! Rhetorical device types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{Emotion, Polarity, Span};
use crate::PolisentError;

/// Campaign-advertisement rhetorical device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeviceTag {
    /// "Vote for us", "join us".
    #[serde(rename = "қолдауға_шақыру")]
    CallToAction,
    /// Stated intent: "if elected I will ...".
    #[serde(rename = "жоспар")]
    Plan,
    #[serde(rename = "уәде")]
    Promise,
    /// Attack on an opponent: lies, corruption, broken promises.
    #[serde(rename = "шабуылдау")]
    Attack,
    /// Neutral electoral procedure: campaign period, election commission.
    #[serde(rename = "процедура")]
    Procedural,
}

impl DeviceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CallToAction => "қолдауға_шақыру",
            Self::Plan => "жоспар",
            Self::Promise => "уәде",
            Self::Attack => "шабуылдау",
            Self::Procedural => "процедура",
        }
    }

    /// Devices that push towards a positive reading (call-to-action, promise, plan).
    pub fn is_mobilizing(&self) -> bool {
        matches!(self, Self::CallToAction | Self::Promise | Self::Plan)
    }
}

impl fmt::Display for DeviceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceTag {
    type Err = PolisentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "қолдауға_шақыру" | "call_to_action" | "call-to-action" => Ok(Self::CallToAction),
            "жоспар" | "intent_or_plan" | "plan" => Ok(Self::Plan),
            "уәде" | "promise" => Ok(Self::Promise),
            "шабуылдау" | "шабуыл" | "attack_ad" | "attack" => Ok(Self::Attack),
            "процедура" | "procedural" => Ok(Self::Procedural),
            other => Err(PolisentError::InvalidInput(format!(
                "unknown device tag: {other}"
            ))),
        }
    }
}

/// One regex match produced by a rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceHit<T = DeviceTag> {
    pub device: T,
    /// Source pattern of the rule that fired.
    pub pattern: String,
    pub matched_text: String,
    pub span: Span,
}

/// Occurrence count per device tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceCount(BTreeMap<DeviceTag, usize>);

impl DeviceCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a tag; absent tags count as zero.
    pub fn get(&self, tag: DeviceTag) -> usize {
        self.0.get(&tag).copied().unwrap_or(0)
    }

    pub fn add(&mut self, tag: DeviceTag) {
        *self.0.entry(tag).or_insert(0) += 1;
    }

    /// Sum of call-to-action, promise and plan counts.
    pub fn mobilizing(&self) -> usize {
        self.0
            .iter()
            .filter(|(tag, _)| tag.is_mobilizing())
            .map(|(_, n)| n)
            .sum()
    }
}

impl FromIterator<(DeviceTag, usize)> for DeviceCount {
    fn from_iter<I: IntoIterator<Item = (DeviceTag, usize)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (tag, n) in iter {
            *counts.0.entry(tag).or_insert(0) += n;
        }
        counts
    }
}

/// Label predicted from device counts alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePrediction {
    pub sentiment: Polarity,
    pub emotion: Emotion,
}
