//! The analysis entry point.
//!
//! [`Analyzer::analyze`] runs the whole pipeline for one text:
//!
//! 1. base classification through the [`ClassifierChain`], falling back to
//!    the [`LexiconClassifier`]
//! 2. the domain analyzer chosen by [`Domain`] (speech, debate or campaign)
//! 3. fusion of the domain evidence into the base label (sentiment task only)
//! 4. tactic scoring
//!
//! Collaborator failures never reach the caller: each one becomes a warning
//! on the result and the pipeline continues on its fallback path.

use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{instrument, warn};

use crate::config::{ClassifierConfig, Config};
use crate::discourse::{analyze_debate, analyze_speech, detect_campaign};
use crate::ontology::{DEFAULT_MAX_NGRAM, JsonOntology, OntologyMatcher, OntologyStore};
use crate::providers::{ClassifierChain, LexiconClassifier, ZeroShotClassifier};
use crate::tactics::{TacticReport, TermList, classify_tactic};
use crate::telemetry;
use crate::types::{
    AnalysisResult, ClassifyResult, DebateAnalysis, Domain, Polarity, Source, SpeechAnalysis, Task,
    Verdict,
};
use crate::{PolisentError, Result};

// ============================================================================
// Lazily loaded collaborators
// ============================================================================

enum OntologySource {
    Missing,
    Store(Arc<dyn OntologyStore>),
    File {
        path: PathBuf,
        cell: OnceCell<Arc<JsonOntology>>,
    },
}

impl OntologySource {
    /// Failed loads are not cached; the next call retries.
    fn get(&self) -> Result<Arc<dyn OntologyStore>> {
        match self {
            Self::Missing => Err(PolisentError::OntologyUnavailable(
                "no ontology configured".to_string(),
            )),
            Self::Store(store) => Ok(Arc::clone(store)),
            Self::File { path, cell } => {
                let onto = cell.get_or_try_init(|| JsonOntology::load(path).map(Arc::new))?;
                Ok(Arc::clone(onto) as Arc<dyn OntologyStore>)
            }
        }
    }
}

enum TermSource {
    Missing,
    List(Arc<TermList>),
    File {
        path: PathBuf,
        cell: OnceCell<Arc<TermList>>,
    },
}

impl TermSource {
    fn get(&self) -> Result<Option<Arc<TermList>>> {
        match self {
            Self::Missing => Ok(None),
            Self::List(list) => Ok(Some(Arc::clone(list))),
            Self::File { path, cell } => {
                let list = cell.get_or_try_init(|| TermList::load(path).map(Arc::new))?;
                Ok(Some(Arc::clone(list)))
            }
        }
    }
}

// ============================================================================
// Analyzer
// ============================================================================

/// Fuses classifier output, rule-based devices and the ontology.
///
/// Cheap to share: wrap it in an `Arc` and call [`analyze`](Self::analyze)
/// from any thread.
pub struct Analyzer {
    chain: ClassifierChain,
    lexicon: LexiconClassifier,
    ontology: OntologySource,
    terms: TermSource,
    max_ngram: usize,
    prompts: ClassifierConfig,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("chain", &self.chain)
            .field("max_ngram", &self.max_ngram)
            .field("prompts", &self.prompts)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Analyse one text. Never fails; degraded stages add warnings.
    #[instrument(skip_all, fields(domain = %domain, task = %task))]
    pub fn analyze(&self, text: &str, domain: Domain, source: Source, task: Task) -> AnalysisResult {
        let start = Instant::now();

        let (base, base_warning) = self.classify_base(text, domain, source, task);
        let mut result = AnalysisResult::from_base(base);
        if let Some(w) = base_warning {
            result.push_warning(w);
        }

        if domain != Domain::Other {
            self.analyze_domain(&mut result, text, domain, task);
        }

        let tactics = self.analyze_tactics(&mut result, text);
        result.tactics = Some(tactics);

        metrics::counter!(telemetry::ANALYSES_TOTAL,
            "domain" => domain.as_str(),
            "task" => task.as_str(),
        )
        .increment(1);
        metrics::histogram!(telemetry::ANALYSIS_DURATION_SECONDS,
            "domain" => domain.as_str(),
        )
        .record(start.elapsed().as_secs_f64());

        result
    }

    /// Base hypothesis with `{source}` and `{domain}` filled in.
    pub fn hypothesis(&self, domain: Domain, source: Source) -> String {
        self.prompts
            .hypothesis_template
            .replace("{source}", source.display_name())
            .replace("{domain}", domain.display_name())
    }

    fn classify_base(
        &self,
        text: &str,
        domain: Domain,
        source: Source,
        task: Task,
    ) -> (ClassifyResult, Option<String>) {
        let labels = task.candidate_labels();
        match self.chain.classify(text, &labels, &self.hypothesis(domain, source)) {
            Ok(result) => (result.truncate_alternatives(self.prompts.max_alternatives), None),
            Err(e) => {
                degraded("classifier", &e);
                (self.lexicon.classify_task(text, task), Some(e.to_string()))
            }
        }
    }

    fn analyze_domain(&self, result: &mut AnalysisResult, text: &str, domain: Domain, task: Task) {
        let store = match self.ontology.get() {
            Ok(store) => Some(store),
            Err(e) => {
                degraded("ontology", &e);
                result.push_warning(e.to_string());
                None
            }
        };
        let matcher = store
            .as_deref()
            .map(|s| OntologyMatcher::new(s).with_max_ngram(self.max_ngram));
        let matcher = matcher.as_ref();
        let sentiment = task == Task::Sentiment;

        match domain {
            Domain::CandidateSpeech => {
                let speech = analyze_speech(text, matcher);
                if sentiment {
                    result.apply(fuse_speech(result.verdict(), &speech));
                }
                result.speech = Some(speech);
            }
            Domain::Debate => {
                let debate = analyze_debate(text, matcher);
                if sentiment {
                    result.apply(fuse_debate(result.verdict(), &debate));
                }
                result.debate = Some(debate);
            }
            Domain::CampaignAd => {
                let campaign = detect_campaign(text, matcher).fuse(&result.label, result.score);
                if sentiment {
                    result.apply(campaign.fused.clone());
                }
                result.campaign = Some(campaign);
            }
            Domain::Other => {}
        }
    }

    fn analyze_tactics(&self, result: &mut AnalysisResult, text: &str) -> TacticReport {
        match self.terms.get() {
            Ok(Some(terms)) => TacticReport::lexical(text, &terms).with_zero_shot(classify_tactic(
                &self.chain,
                text,
                &terms,
                &self.prompts.tactic_hypothesis,
                self.prompts.max_tactic_alternatives,
            )),
            Ok(None) => TacticReport::lexical(text, &TermList::default()),
            Err(e) => {
                degraded("terms", &e);
                result.push_warning(e.to_string());
                TacticReport::lexical(text, &TermList::default())
            }
        }
    }
}

fn degraded(stage: &'static str, error: &PolisentError) {
    warn!(stage, error = %error, "falling back");
    metrics::counter!(telemetry::FALLBACKS_TOTAL, "stage" => stage).increment(1);
}

// ============================================================================
// Outer fusion
// ============================================================================

/// Pull the label towards the majority of per-target stances.
///
/// Strict comparison: equal counts leave the verdict alone.
pub fn fuse_speech(mut verdict: Verdict, speech: &SpeechAnalysis) -> Verdict {
    let count = |p: Polarity| speech.stance.iter().filter(|s| s.label == p).count();
    let (pos, neg) = (count(Polarity::Positive), count(Polarity::Negative));
    if pos > neg && !verdict.is(Polarity::Positive) {
        verdict = Verdict::new(Polarity::Positive.as_str(), verdict.score.max(0.68));
    } else if neg > pos && !verdict.is(Polarity::Negative) {
        verdict = Verdict::new(Polarity::Negative.as_str(), verdict.score.max(0.70));
    }
    verdict
}

/// Pull the label towards the majority of turn labels, negative first.
pub fn fuse_debate(mut verdict: Verdict, debate: &DebateAnalysis) -> Verdict {
    let (neg, pos) = (debate.count(Polarity::Negative), debate.count(Polarity::Positive));
    if neg > pos && !verdict.is(Polarity::Negative) {
        verdict = Verdict::new(Polarity::Negative.as_str(), verdict.score.max(0.70));
    } else if pos > neg && !verdict.is(Polarity::Positive) {
        verdict = Verdict::new(Polarity::Positive.as_str(), verdict.score.max(0.66));
    }
    verdict
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for configuring an [`Analyzer`].
pub struct AnalyzerBuilder {
    chain: ClassifierChain,
    ontology: OntologySource,
    terms: TermSource,
    max_ngram: usize,
    prompts: ClassifierConfig,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            chain: ClassifierChain::new(),
            ontology: OntologySource::Missing,
            terms: TermSource::Missing,
            max_ngram: DEFAULT_MAX_NGRAM,
            prompts: ClassifierConfig::default(),
        }
    }

    /// Paths, n-gram limit and prompts from a loaded [`Config`].
    ///
    /// Files are read on first use, not here.
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::new().max_ngram(config.ontology.max_ngram);
        builder.prompts = config.classifier.clone();
        if let Some(path) = &config.ontology.path {
            builder = builder.ontology_path(path);
        }
        if let Some(path) = &config.terms.path {
            builder = builder.term_list_path(path);
        }
        builder
    }

    /// Add a zero-shot classifier (appended to end of chain).
    pub fn classifier(mut self, classifier: Arc<dyn ZeroShotClassifier>) -> Self {
        self.chain.push(classifier);
        self
    }

    pub fn ontology(mut self, store: Arc<dyn OntologyStore>) -> Self {
        self.ontology = OntologySource::Store(store);
        self
    }

    /// Load a [`JsonOntology`] from `path` on first use.
    pub fn ontology_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ontology = OntologySource::File {
            path: path.into(),
            cell: OnceCell::new(),
        };
        self
    }

    pub fn term_list(mut self, terms: TermList) -> Self {
        self.terms = TermSource::List(Arc::new(terms));
        self
    }

    /// Load a [`TermList`] from `path` on first use.
    pub fn term_list_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.terms = TermSource::File {
            path: path.into(),
            cell: OnceCell::new(),
        };
        self
    }

    pub fn max_ngram(mut self, max_ngram: usize) -> Self {
        self.max_ngram = max_ngram;
        self
    }

    pub fn hypothesis_template(mut self, template: impl Into<String>) -> Self {
        self.prompts.hypothesis_template = template.into();
        self
    }

    pub fn tactic_hypothesis(mut self, template: impl Into<String>) -> Self {
        self.prompts.tactic_hypothesis = template.into();
        self
    }

    pub fn build(self) -> Result<Analyzer> {
        for (name, template) in [
            ("hypothesis_template", &self.prompts.hypothesis_template),
            ("tactic_hypothesis", &self.prompts.tactic_hypothesis),
        ] {
            if !template.contains("{}") {
                return Err(PolisentError::Configuration(format!(
                    "{name} must contain a {{}} label placeholder"
                )));
            }
        }
        if self.max_ngram == 0 {
            return Err(PolisentError::Configuration(
                "max_ngram must be at least 1".to_string(),
            ));
        }
        Ok(Analyzer {
            chain: self.chain,
            lexicon: LexiconClassifier::new(),
            ontology: self.ontology,
            terms: self.terms,
            max_ngram: self.max_ngram,
            prompts: self.prompts,
        })
    }
}
