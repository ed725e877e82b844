//! Configuration loading.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.polisent/config.toml` (user)
//! 3. `/etc/polisent/config.toml` (system)
//!
//! Resource paths can be overridden from the environment:
//! - `POLISENT_ONTO_PATH`: ontology JSON file
//! - `PD_JSON_PATH`: tactic term list JSON file

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ontology::DEFAULT_MAX_NGRAM;
use crate::tactics::DEFAULT_TACTIC_HYPOTHESIS;
use crate::{PolisentError, Result};

pub const ONTOLOGY_PATH_ENV: &str = "POLISENT_ONTO_PATH";
pub const TERMS_PATH_ENV: &str = "PD_JSON_PATH";

/// Analyzer configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ontology: OntologyConfig,
    #[serde(default)]
    pub terms: TermsConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Ontology source.
#[derive(Debug, Clone, Deserialize)]
pub struct OntologyConfig {
    /// Ontology JSON file; without one, ontology enrichment is skipped with a warning.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Longest word window matched against labels (default: 5).
    #[serde(default = "default_max_ngram")]
    pub max_ngram: usize,
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_ngram: default_max_ngram(),
        }
    }
}

fn default_max_ngram() -> usize {
    DEFAULT_MAX_NGRAM
}

/// Tactic term list source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TermsConfig {
    /// Term list JSON file; without one, only the cue-word scorer runs.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Zero-shot prompts and result shaping.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Base hypothesis. `{}` is the candidate label, `{source}` and
    /// `{domain}` are filled from the request.
    #[serde(default = "default_hypothesis")]
    pub hypothesis_template: String,
    #[serde(default = "default_tactic_hypothesis")]
    pub tactic_hypothesis: String,
    /// Alternatives kept on the base result (default: 3).
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,
    /// Alternatives kept on the tactic prediction (default: 4).
    #[serde(default = "default_max_tactic_alternatives")]
    pub max_tactic_alternatives: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            hypothesis_template: default_hypothesis(),
            tactic_hypothesis: default_tactic_hypothesis(),
            max_alternatives: default_max_alternatives(),
            max_tactic_alternatives: default_max_tactic_alternatives(),
        }
    }
}

pub const DEFAULT_HYPOTHESIS: &str =
    "Бұл {} екенін көрсетеді. Мәтін {source} дерек көзінен және '{domain}' доменінен.";

fn default_hypothesis() -> String {
    DEFAULT_HYPOTHESIS.to_string()
}

fn default_tactic_hypothesis() -> String {
    DEFAULT_TACTIC_HYPOTHESIS.to_string()
}

fn default_max_alternatives() -> usize {
    3
}

fn default_max_tactic_alternatives() -> usize {
    4
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided)
    /// 2. `~/.polisent/config.toml`
    /// 3. `/etc/polisent/config.toml`
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_config_path(explicit_path)?;
        Self::load_from_file(&path)
    }

    /// Like [`load`](Self::load), but defaults when no file exists anywhere,
    /// then applies environment overrides.
    ///
    /// An explicit path that does not exist is still an error.
    pub fn load_or_default(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match Self::find_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Parse a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| PolisentError::Configuration(format!("Failed to parse config: {e}")))
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PolisentError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            PolisentError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Override resource paths from `POLISENT_ONTO_PATH` and `PD_JSON_PATH`.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override resource paths from an arbitrary variable lookup.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let path = |key: &str| lookup(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        if let Some(p) = path(ONTOLOGY_PATH_ENV) {
            self.ontology.path = Some(p);
        }
        if let Some(p) = path(TERMS_PATH_ENV) {
            self.terms.path = Some(p);
        }
    }

    /// Resolve the config file path.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
        Self::find_config_path(explicit)?.ok_or_else(|| {
            PolisentError::Configuration(
                "No config file found. Create ~/.polisent/config.toml or /etc/polisent/config.toml"
                    .to_string(),
            )
        })
    }

    fn find_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(PolisentError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".polisent").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/polisent/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}
