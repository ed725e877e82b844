use std::fs;
use std::path::PathBuf;

use polisent::config::{DEFAULT_HYPOTHESIS, ONTOLOGY_PATH_ENV, TERMS_PATH_ENV};
use polisent::{Analyzer, AnalyzerBuilder, Config, PolisentError};

#[test]
fn load_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[ontology]
path = "/srv/polisent/onto.json"
max_ngram = 3

[terms]
path = "/srv/polisent/terms.json"

[classifier]
max_alternatives = 2
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.ontology.path, Some(PathBuf::from("/srv/polisent/onto.json")));
    assert_eq!(config.ontology.max_ngram, 3);
    assert_eq!(config.terms.path, Some(PathBuf::from("/srv/polisent/terms.json")));
    assert_eq!(config.classifier.max_alternatives, 2);
    assert_eq!(config.classifier.max_tactic_alternatives, 4);
    assert_eq!(config.classifier.hypothesis_template, DEFAULT_HYPOTHESIS);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = Config::load_or_default(Some(std::path::Path::new("/nonexistent/polisent.toml")))
        .unwrap_err();
    assert!(matches!(err, PolisentError::Configuration(_)));
}

#[test]
fn invalid_file_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ontology]\nmax_ngram = \"five\"").unwrap();
    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, PolisentError::Configuration(_)));
}

#[test]
fn overrides_from_lookup() {
    let mut config = Config::default();
    config.apply_overrides(|key| match key {
        ONTOLOGY_PATH_ENV => Some("/data/onto.json".into()),
        TERMS_PATH_ENV => Some("/data/terms.json".into()),
        _ => None,
    });
    assert_eq!(config.ontology.path, Some(PathBuf::from("/data/onto.json")));
    assert_eq!(config.terms.path, Some(PathBuf::from("/data/terms.json")));
}

#[test]
fn builder_from_config_uses_prompts() {
    let mut config = Config::default();
    config.classifier.hypothesis_template = "Мәтін {} туралы ({domain}).".into();
    let analyzer = AnalyzerBuilder::from_config(&config).build().unwrap();
    assert_eq!(
        analyzer.hypothesis(polisent::Domain::Debate, polisent::Source::Unofficial),
        "Мәтін {} туралы (сайлауалды пікірсайыс)."
    );
}

#[test]
fn builder_rejects_zero_ngram() {
    let err = Analyzer::builder().max_ngram(0).build().unwrap_err();
    assert!(matches!(err, PolisentError::Configuration(_)));
}

#[test]
fn builder_rejects_tactic_template_without_placeholder() {
    let err = Analyzer::builder()
        .tactic_hypothesis("тактика")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("tactic_hypothesis"));
}
