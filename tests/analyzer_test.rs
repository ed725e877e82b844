//! End-to-end tests for `Analyzer::analyze`.
//!
//! Classifiers are stubs implementing `ZeroShotClassifier`; ontology and term
//! list files live in temp directories.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use polisent::providers::render_hypothesis;
use polisent::types::EntityKind;
use polisent::{
    Analyzer, ClassifyResult, Domain, Polarity, PolisentError, Result, Source, Task,
    ZeroShotClassifier,
};

// ============================================================================
// Stub classifiers
// ============================================================================

/// Returns the same label for every request.
struct Fixed {
    label: &'static str,
    score: f32,
}

impl ZeroShotClassifier for Fixed {
    fn name(&self) -> &str {
        "fixed"
    }

    fn classify(&self, _: &str, _: &[&str], _: &str) -> Result<ClassifyResult> {
        Ok(ClassifyResult {
            label: self.label.to_string(),
            score: self.score,
            alternatives: vec![],
        })
    }
}

fn fixed(label: &'static str, score: f32) -> Arc<dyn ZeroShotClassifier> {
    Arc::new(Fixed { label, score })
}

/// Ranks candidate labels in the order given and records every hypothesis.
#[derive(Default)]
struct FirstLabel {
    hypotheses: Mutex<Vec<String>>,
}

impl ZeroShotClassifier for FirstLabel {
    fn name(&self) -> &str {
        "first-label"
    }

    fn classify(&self, _: &str, labels: &[&str], template: &str) -> Result<ClassifyResult> {
        let mut seen = self.hypotheses.lock().unwrap();
        seen.extend(labels.iter().map(|l| render_hypothesis(template, l)));
        let n = labels.len() as f32;
        ClassifyResult::from_scores(
            labels
                .iter()
                .enumerate()
                .map(|(i, l)| (*l, (n - i as f32) / (n * 2.0))),
        )
        .ok_or_else(|| PolisentError::InvalidInput("no labels".into()))
    }
}

struct Failing(fn() -> PolisentError);

impl ZeroShotClassifier for Failing {
    fn name(&self) -> &str {
        "failing"
    }

    fn classify(&self, _: &str, _: &[&str], _: &str) -> Result<ClassifyResult> {
        Err((self.0)())
    }
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

const ONTOLOGY: &str = r#"{"entities": [
    {"id": "http://example.org/onto#Rival", "labels": [{"value": "Қарсылас", "lang": "kk"}],
     "polarity": "теріс", "devices": ["шабуыл"]},
    {"id": "http://example.org/onto#TaxReform", "labels": ["Салық реформасы"]}
]}"#;

const TERMS: &str = r#"{
    "популизм": [{"termin": {"name": "уәде"}}, {"termin": {"name": "халық үшін"}}],
    "қорқыту": [{"termin": {"name": "қауіп"}}]
}"#;

// ============================================================================
// Base classification and degradation
// ============================================================================

#[test]
fn no_classifier_falls_back_to_lexicon_with_warning() {
    let analyzer = Analyzer::builder().build().unwrap();
    let result = analyzer.analyze("Бұл жақсы.", Domain::Other, Source::Official, Task::Sentiment);

    assert_eq!(result.label, "оң");
    assert!(result.score > 0.5 && result.score < 0.95);
    assert!(result.alternatives.is_empty());
    let warning = result.warning.unwrap();
    assert!(warning.contains("no classifier configured"), "{warning}");
    assert!(result.speech.is_none());
    assert!(result.debate.is_none());
    assert!(result.campaign.is_none());
    assert!(result.tactics.is_some());
}

#[test]
fn lexicon_fallback_answers_emotion_task() {
    let analyzer = Analyzer::builder().build().unwrap();
    let result = analyzer.analyze(
        "Халық ызалы, бәрі ашулы.",
        Domain::Other,
        Source::Unofficial,
        Task::Emotion,
    );
    assert_eq!(result.label, "ашу");
    assert!(result.warning.is_some());
}

#[test]
fn terminal_classifier_error_still_degrades() {
    let analyzer = Analyzer::builder()
        .classifier(Arc::new(Failing(|| {
            PolisentError::InvalidInput("text too long".into())
        })))
        .build()
        .unwrap();
    let result = analyzer.analyze("Бұл нашар.", Domain::Other, Source::Official, Task::Sentiment);
    assert_eq!(result.label, "теріс");
    assert!(result.warning.unwrap().contains("text too long"));
}

#[test]
fn unavailable_classifier_falls_through_to_next() {
    let analyzer = Analyzer::builder()
        .classifier(Arc::new(Failing(|| {
            PolisentError::ClassifierUnavailable("model missing".into())
        })))
        .classifier(fixed("бейтарап", 0.8))
        .build()
        .unwrap();
    let result = analyzer.analyze("Бұл нашар.", Domain::Other, Source::Official, Task::Sentiment);
    assert_eq!(result.label, "бейтарап");
    assert_eq!(result.score, 0.8);
    assert!(result.warning.is_none());
}

#[test]
fn hypothesis_carries_source_and_domain() {
    let stub = Arc::new(FirstLabel::default());
    let analyzer = Analyzer::builder().classifier(stub.clone()).build().unwrap();
    let result = analyzer.analyze("Мәтін", Domain::Other, Source::Official, Task::Sentiment);

    assert_eq!(result.label, "оң");
    assert_eq!(result.alternatives.len(), 2);
    let hypotheses = stub.hypotheses.lock().unwrap();
    assert_eq!(
        hypotheses[0],
        "Бұл оң екенін көрсетеді. Мәтін ресми дерек көзінен және 'саяси дискурс' доменінен."
    );
}

#[test]
fn alternatives_are_truncated() {
    let analyzer = Analyzer::builder()
        .classifier(Arc::new(FirstLabel::default()))
        .build()
        .unwrap();
    let result = analyzer.analyze("Мәтін", Domain::Other, Source::Official, Task::Emotion);
    assert_eq!(result.label, "қуаныш");
    assert_eq!(result.alternatives.len(), 3);
}

// ============================================================================
// Domains
// ============================================================================

#[test]
fn campaign_devices_lift_negative_base() {
    let analyzer = Analyzer::builder()
        .classifier(fixed("теріс", 0.4))
        .build()
        .unwrap();
    let result = analyzer.analyze(
        "Бізге дауыс беріңіз! Жалақыны көтереміз.",
        Domain::CampaignAd,
        Source::Official,
        Task::Sentiment,
    );

    assert_eq!(result.label, "оң");
    assert_eq!(result.score, 0.70);
    let campaign = result.campaign.unwrap();
    assert_eq!(campaign.devices.get(polisent::DeviceTag::CallToAction), 1);
    assert!(campaign.devices.get(polisent::DeviceTag::Promise) >= 1);
    assert_eq!(campaign.rule_prediction.sentiment, Polarity::Positive);
    assert!(campaign.hits.ontology.is_empty());
    assert!(result.warning.unwrap().contains("no ontology configured"));
}

#[test]
fn campaign_ontology_prior_wins() {
    let dir = tempfile::tempdir().unwrap();
    let onto = write(dir.path(), "onto.json", ONTOLOGY);
    let analyzer = Analyzer::builder()
        .classifier(fixed("оң", 0.9))
        .ontology_path(onto)
        .build()
        .unwrap();
    let result = analyzer.analyze(
        "Бізге дауыс беріңіз! Қарсылас туралы.",
        Domain::CampaignAd,
        Source::Official,
        Task::Sentiment,
    );

    assert_eq!(result.label, "теріс");
    assert_eq!(result.score, 0.9);
    assert!(result.warning.is_none());
    let campaign = result.campaign.unwrap();
    assert_eq!(campaign.ontology_prior, Some(Polarity::Negative));
    assert_eq!(campaign.hits.ontology.len(), 1);
    assert_eq!(campaign.devices.get(polisent::DeviceTag::Attack), 1);
}

#[test]
fn emotion_task_keeps_base_label_but_reports_fusion() {
    let analyzer = Analyzer::builder()
        .classifier(fixed("ашу", 0.4))
        .build()
        .unwrap();
    let result = analyzer.analyze(
        "Бізге дауыс беріңіз!",
        Domain::CampaignAd,
        Source::Official,
        Task::Emotion,
    );
    assert_eq!(result.label, "ашу");
    assert_eq!(result.score, 0.4);
    let fused = result.campaign.unwrap().fused;
    assert_eq!(fused.label, "оң");
    assert_eq!(fused.score, 0.70);
}

#[test]
fn speech_stance_pulls_label() {
    let dir = tempfile::tempdir().unwrap();
    let onto = write(dir.path(), "onto.json", ONTOLOGY);
    let analyzer = Analyzer::builder()
        .classifier(fixed("теріс", 0.3))
        .ontology_path(onto)
        .build()
        .unwrap();
    let result = analyzer.analyze(
        "Салық реформасы маңызды.",
        Domain::CandidateSpeech,
        Source::Official,
        Task::Sentiment,
    );

    assert_eq!(result.label, "оң");
    assert_eq!(result.score, 0.68);
    let speech = result.speech.unwrap();
    assert_eq!(speech.items.len(), 1);
    assert_eq!(speech.items[0].sentiment, Polarity::Positive);
    assert_eq!(speech.stance.len(), 1);
    assert_eq!(speech.stance[0].kind, EntityKind::Topic);
    assert_eq!(speech.stance[0].label, Polarity::Positive);
}

#[test]
fn speech_without_ontology_has_items_but_no_stance() {
    let analyzer = Analyzer::builder()
        .classifier(fixed("бейтарап", 0.5))
        .build()
        .unwrap();
    let result = analyzer.analyze(
        "Мен бұл бастаманы қолдаймын. Бұл шешім ысырапшыл.",
        Domain::CandidateSpeech,
        Source::Official,
        Task::Sentiment,
    );
    let speech = result.speech.unwrap();
    assert_eq!(speech.items.len(), 2);
    assert_eq!(speech.items[0].sentiment, Polarity::Positive);
    assert_eq!(speech.items[1].sentiment, Polarity::Negative);
    assert!(speech.stance.is_empty());
    assert_eq!(result.label, "бейтарап");
    assert!(result.warning.unwrap().contains("ontology unavailable"));
}

#[test]
fn debate_negative_majority() {
    let analyzer = Analyzer::builder()
        .classifier(fixed("оң", 0.5))
        .build()
        .unwrap();
    let result = analyzer.analyze(
        "Асан: Бұл өтірік.\nБолат: Иә, бірақ уақыт керек.\nАсан: Бұл қате.",
        Domain::Debate,
        Source::Unofficial,
        Task::Sentiment,
    );

    assert_eq!(result.label, "теріс");
    assert_eq!(result.score, 0.70);
    let debate = result.debate.unwrap();
    assert_eq!(debate.turns.len(), 3);
    assert_eq!(debate.by_speaker["Асан"].negative, 2);
    assert_eq!(debate.by_speaker["Болат"].positive, 1);
}

// ============================================================================
// Resources
// ============================================================================

#[test]
fn failed_ontology_load_is_retried() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("later.json");
    let analyzer = Analyzer::builder()
        .classifier(fixed("бейтарап", 0.5))
        .ontology_path(&path)
        .build()
        .unwrap();

    let first = analyzer.analyze("Қарсылас", Domain::Debate, Source::Official, Task::Sentiment);
    assert!(first.warning.unwrap().contains("ontology unavailable"));

    fs::write(&path, ONTOLOGY).unwrap();
    let second = analyzer.analyze("Қарсылас", Domain::Debate, Source::Official, Task::Sentiment);
    assert!(second.warning.is_none());
    assert_eq!(second.debate.unwrap().turns[0].mentions.len(), 1);
}

#[test]
fn term_list_scores_and_zero_shot() {
    let dir = tempfile::tempdir().unwrap();
    let terms = write(dir.path(), "terms.json", TERMS);
    let analyzer = Analyzer::builder()
        .classifier(Arc::new(FirstLabel::default()))
        .term_list_path(terms)
        .build()
        .unwrap();
    let result = analyzer.analyze(
        "Халық үшін уәде береміз, уәдеміз берік.",
        Domain::Other,
        Source::Official,
        Task::Sentiment,
    );

    let tactics = result.tactics.unwrap();
    assert_eq!(tactics.scores[0].tactic, "популизм");
    assert!(tactics.is_political);
    // tactic names are ordered, so the stub picks the first one
    assert_eq!(tactics.zero_shot.unwrap().label, "популизм");
    assert!(tactics.warning.is_none());
}

#[test]
fn missing_term_list_warns_and_uses_cue_words() {
    let analyzer = Analyzer::builder()
        .classifier(fixed("бейтарап", 0.5))
        .term_list_path("/nonexistent/terms.json")
        .build()
        .unwrap();
    let result = analyzer.analyze(
        "Парламент пен үкімет келісті.",
        Domain::Other,
        Source::Official,
        Task::Sentiment,
    );
    assert!(result.warning.unwrap().contains("term list unavailable"));
    let tactics = result.tactics.unwrap();
    assert_eq!(tactics.scores[0].tactic, polisent::tactics::CUE_TACTIC);
    assert!(tactics.zero_shot.is_none());
}

#[test]
fn tactic_zero_shot_failure_stays_in_report() {
    let mut terms = polisent::TermList::default();
    terms.insert("популизм", Default::default());
    let analyzer = Analyzer::builder().term_list(terms).build().unwrap();
    let result = analyzer.analyze("Мәтін", Domain::Other, Source::Official, Task::Sentiment);

    let tactics = result.tactics.unwrap();
    assert!(tactics.zero_shot.is_none());
    assert!(tactics.warning.unwrap().contains("classifier unavailable"));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn repeated_analysis_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let onto = write(dir.path(), "onto.json", ONTOLOGY);
    let terms = write(dir.path(), "terms.json", TERMS);
    let analyzer = Analyzer::builder()
        .ontology_path(onto)
        .term_list_path(terms)
        .build()
        .unwrap();
    let text = "Салық реформасы маңызды. Қарсылас өтірік айтады! Бізге дауыс беріңіз.";

    for domain in [Domain::CampaignAd, Domain::CandidateSpeech, Domain::Debate, Domain::Other] {
        let a = analyzer.analyze(text, domain, Source::Official, Task::Sentiment);
        let b = analyzer.analyze(text, domain, Source::Official, Task::Sentiment);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn scores_stay_in_unit_interval() {
    let analyzer = Analyzer::builder()
        .classifier(fixed("оң", 3.5))
        .build()
        .unwrap();
    for domain in [Domain::CampaignAd, Domain::CandidateSpeech, Domain::Debate, Domain::Other] {
        let result = analyzer.analyze("Өтірік! Дауыс беріңіз.", domain, Source::Official, Task::Sentiment);
        assert!((0.0..=1.0).contains(&result.score), "{domain}: {}", result.score);
    }
}

#[test]
fn empty_text_does_not_fail() {
    let analyzer = Analyzer::builder().build().unwrap();
    let result = analyzer.analyze("", Domain::Debate, Source::Official, Task::Sentiment);
    assert_eq!(result.label, "бейтарап");
    assert!(result.debate.unwrap().turns.is_empty());
    assert!(result.tactics.unwrap().scores.is_empty());
}
