//! Label vocabularies and request options.
//!
//! Labels serialize with the Kazakh names shown to end users; parsing also
//! accepts the English spellings used in configuration and on the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PolisentError;

/// Coarse sentiment orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Polarity {
    #[serde(rename = "оң")]
    Positive,
    #[serde(rename = "теріс")]
    Negative,
    #[serde(rename = "бейтарап")]
    Neutral,
}

impl Polarity {
    /// Candidate label order used for the sentiment task.
    pub const ALL: [Polarity; 3] = [Polarity::Positive, Polarity::Neutral, Polarity::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "оң",
            Self::Negative => "теріс",
            Self::Neutral => "бейтарап",
        }
    }

    /// Whether a free-form label names this polarity.
    pub fn matches(&self, label: &str) -> bool {
        label.parse::<Polarity>().is_ok_and(|p| p == *self)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Polarity {
    type Err = PolisentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "оң" | "positive" | "pos" => Ok(Self::Positive),
            "теріс" | "negative" | "neg" => Ok(Self::Negative),
            "бейтарап" | "neutral" => Ok(Self::Neutral),
            other => Err(PolisentError::InvalidInput(format!(
                "unknown polarity: {other}"
            ))),
        }
    }
}

/// Emotion categories for the emotion task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    #[serde(rename = "қуаныш")]
    Joy,
    #[serde(rename = "ашу")]
    Anger,
    #[serde(rename = "қорқыныш")]
    Fear,
    #[serde(rename = "жеккөрушілік")]
    Disgust,
    #[serde(rename = "таңдану")]
    Surprise,
    #[serde(rename = "қайғы")]
    Sadness,
    #[serde(rename = "сенім")]
    Trust,
    #[serde(rename = "бейтарап")]
    Neutral,
}

impl Emotion {
    /// Candidate label order used for the emotion task.
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Disgust,
        Emotion::Surprise,
        Emotion::Sadness,
        Emotion::Trust,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Joy => "қуаныш",
            Self::Anger => "ашу",
            Self::Fear => "қорқыныш",
            Self::Disgust => "жеккөрушілік",
            Self::Surprise => "таңдану",
            Self::Sadness => "қайғы",
            Self::Trust => "сенім",
            Self::Neutral => "бейтарап",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the base classifier is asked to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    Emotion,
    Sentiment,
}

impl Task {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emotion => "emotion",
            Self::Sentiment => "sentiment",
        }
    }

    /// Zero-shot candidate labels for this task.
    pub fn candidate_labels(&self) -> Vec<&'static str> {
        match self {
            Self::Emotion => Emotion::ALL.iter().map(Emotion::as_str).collect(),
            Self::Sentiment => Polarity::ALL.iter().map(Polarity::as_str).collect(),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Task {
    type Err = PolisentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "emotion" | "эмоция" => Ok(Self::Emotion),
            "sentiment" | "сентимент" => Ok(Self::Sentiment),
            other => Err(PolisentError::InvalidInput(format!("unknown task: {other}"))),
        }
    }
}

/// Discourse domain of the analysed text; selects the domain analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    CampaignAd,
    CandidateSpeech,
    Debate,
    Other,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignAd => "campaign_ad",
            Self::CandidateSpeech => "candidate_speech",
            Self::Debate => "debate",
            Self::Other => "other",
        }
    }

    /// Kazakh domain name, as interpolated into the classifier hypothesis.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CampaignAd => "сайлауалды жарнама",
            Self::CandidateSpeech => "үміткер сөзі",
            Self::Debate => "сайлауалды пікірсайыс",
            Self::Other => "саяси дискурс",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient parse: unrecognised domains are [`Domain::Other`].
impl From<&str> for Domain {
    fn from(s: &str) -> Self {
        let d = s.trim().to_lowercase();
        match d.as_str() {
            "campaign_ad" | "campaign" | "сайлауалды жарнама" => Self::CampaignAd,
            "candidate_speech" | "speech" | "саяси қайраткер сөзі" | "үміткер сөзі" => {
                Self::CandidateSpeech
            }
            "debate" | "сайлауалды пікірсайыс" => Self::Debate,
            _ if d.contains("speech") => Self::CandidateSpeech,
            _ if d.contains("debate") => Self::Debate,
            _ if d.contains("campaign") => Self::CampaignAd,
            _ => Self::Other,
        }
    }
}

impl FromStr for Domain {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Provenance of the analysed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Official,
    Unofficial,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Unofficial => "unofficial",
        }
    }

    /// Kazakh source name, as interpolated into the classifier hypothesis.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Official => "ресми",
            Self::Unofficial => "бейресми",
        }
    }
}

impl FromStr for Source {
    type Err = PolisentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "official" | "ресми" => Ok(Self::Official),
            "unofficial" | "бейресми" => Ok(Self::Unofficial),
            other => Err(PolisentError::InvalidInput(format!(
                "unknown source: {other}"
            ))),
        }
    }
}
