//! Regex rule engines.
//!
//! A rule table is plain data: an ordered list of `(tag, patterns)` pairs.
//! [`RuleSet::compile`] turns a table into case-insensitive, Unicode-aware
//! regexes once; the compiled sets live in process-wide [`Lazy`] statics
//! and are read-only afterwards.
//!
//! Three independent tables exist:
//!
//! | Table | Tag type | Used by |
//! |-------|----------|---------|
//! | [`campaign::CAMPAIGN_RULES`] | [`DeviceTag`](crate::DeviceTag) | campaign ads, speech sentences |
//! | [`speech::EVALUATIVE_RULES`] | [`speech::EvalTag`] | speech sentences |
//! | [`debate::DEBATE_RULES`] | [`debate::TurnCue`] | debate turns |
//!
//! [`Lazy`]: once_cell::sync::Lazy

pub mod campaign;
pub mod debate;
pub mod speech;

use regex::{Regex, RegexBuilder};

use crate::types::{DeviceHit, Span};
use crate::{PolisentError, Result};

/// An ordered rule table: tag → patterns.
pub type RuleTable<T> = [(T, &'static [&'static str])];

/// Compiled rule table.
#[derive(Debug, Clone)]
pub struct RuleSet<T> {
    rules: Vec<(T, Regex)>,
}

impl<T: Copy + PartialEq> RuleSet<T> {
    /// Compile every pattern of `table`, preserving table order.
    pub fn compile(table: &RuleTable<T>) -> Result<Self> {
        let mut rules = Vec::new();
        for (tag, patterns) in table {
            for pattern in *patterns {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .unicode(true)
                    .build()
                    .map_err(|e| {
                        PolisentError::Configuration(format!("invalid rule {pattern:?}: {e}"))
                    })?;
                rules.push((*tag, regex));
            }
        }
        Ok(Self { rules })
    }

    /// Every non-overlapping match of every pattern, in table order.
    ///
    /// Repeated matches are kept: each one adds to later counts.
    pub fn detect(&self, text: &str) -> Vec<DeviceHit<T>> {
        let mut hits = Vec::new();
        for (tag, regex) in &self.rules {
            for m in regex.find_iter(text) {
                hits.push(DeviceHit {
                    device: *tag,
                    pattern: regex.as_str().to_string(),
                    matched_text: m.as_str().to_string(),
                    span: Span::from(m),
                });
            }
        }
        hits
    }

    /// Whether any pattern of `tag` matches `text`.
    pub fn is_match(&self, tag: T, text: &str) -> bool {
        self.rules
            .iter()
            .any(|(t, regex)| *t == tag && regex.is_match(text))
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
