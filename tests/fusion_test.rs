//! Campaign fusion driven from raw text.

use polisent::discourse::detect_campaign;
use polisent::fusion::{FUSION_STEPS, post_fuse};
use polisent::ontology::JsonOntology;
use polisent::{DeviceCount, DeviceTag, Emotion, OntologyMatcher, Polarity, RulePrediction};

fn neutral() -> RulePrediction {
    RulePrediction {
        sentiment: Polarity::Neutral,
        emotion: Emotion::Neutral,
    }
}

#[test]
fn steps_run_in_documented_order() {
    let names: Vec<&str> = FUSION_STEPS.iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        vec![
            "procedural",
            "attack",
            "mobilizing",
            "prior_negative",
            "prior_positive",
            "prior_neutral"
        ]
    );
}

#[test]
fn procedural_text_reads_neutral() {
    let pack = detect_campaign(
        "Орталық сайлау комиссиясы үгіт-насихат кезеңі басталғанын хабарлады.",
        None,
    );
    assert_eq!(pack.devices.get(DeviceTag::Procedural), 2);
    let analysis = pack.fuse("оң", 0.91);
    assert_eq!(analysis.fused.label, "бейтарап");
    assert_eq!(analysis.fused.score, 0.60);
    assert_eq!(analysis.rule_prediction.sentiment, Polarity::Neutral);
}

#[test]
fn attack_text_reads_negative() {
    let pack = detect_campaign("Олар жемқор, уәдесін орындамады.", None);
    assert_eq!(pack.rule_prediction.emotion, Emotion::Anger);
    let analysis = pack.fuse("бейтарап", 0.5);
    assert_eq!(analysis.fused.label, "теріс");
    assert_eq!(analysis.fused.score, 0.72);
}

#[test]
fn regex_hits_keep_pattern_and_span() {
    let text = "Бізге дауыс беріңіз!";
    let pack = detect_campaign(text, None);
    assert_eq!(pack.regex_hits.len(), 1);
    let hit = &pack.regex_hits[0];
    assert_eq!(hit.device, DeviceTag::CallToAction);
    assert_eq!(hit.matched_text, "дауыс беріңіз");
    assert!(hit.pattern.contains("дауыс"));
    assert_eq!(hit.span.slice(text), Some("дауыс беріңіз"));
}

#[test]
fn neutral_prior_caps_mobilizing_text() {
    let onto = JsonOntology::from_json(
        r#"{"entities": [{"id": "onto#CEC", "labels": ["ОСК"], "polarity": "бейтарап"}]}"#,
    )
    .unwrap();
    let matcher = OntologyMatcher::new(&onto);
    let analysis = detect_campaign("ОСК хабарлады: бізге қосылыңыз", Some(&matcher)).fuse("теріс", 0.8);
    // procedural (ОСК) first, then mobilizing, then the neutral prior
    assert_eq!(analysis.ontology_prior, Some(Polarity::Neutral));
    assert_eq!(analysis.fused.label, "бейтарап");
    assert_eq!(analysis.fused.score, 0.60);
}

#[test]
fn prior_beats_device_cascade() {
    let devices: DeviceCount = [(DeviceTag::Attack, 3)].into_iter().collect();
    let v = post_fuse("теріс", 0.8, &devices, &neutral(), Some(Polarity::Positive));
    assert_eq!(v.label, "оң");
    assert_eq!(v.score, 0.8);
}

#[test]
fn repeated_entity_counts_its_devices_per_mention() {
    let onto = JsonOntology::from_json(
        r#"{"entities": [{"id": "onto#Rival", "labels": ["Қарсылас"], "devices": ["шабуыл"]}]}"#,
    )
    .unwrap();
    let matcher = OntologyMatcher::new(&onto);
    let pack = detect_campaign(
        "ОСК хабарлады. Қарсылас айтты, Қарсылас тағы айтты.",
        Some(&matcher),
    );
    assert_eq!(pack.ontology_hits.len(), 2);
    assert_eq!(pack.devices.get(DeviceTag::Attack), 2);
    assert_eq!(pack.devices.get(DeviceTag::Procedural), 1);

    // attack outnumbers procedural, so the neutral step stays off
    let analysis = pack.fuse("оң", 0.9);
    assert_eq!(analysis.fused.label, "теріс");
    assert_eq!(analysis.fused.score, 0.9);
}
