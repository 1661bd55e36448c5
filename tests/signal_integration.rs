//! Integration tests for the signal wire format

use pretty_assertions::assert_eq;
use serde_json::Value;

use spm_defense::core::MonitorAgent;
use spm_defense::types::{MonitorConfig, Observation, SpmError, SpmSignal};

fn processed_signal() -> SpmSignal {
    let mut agent = MonitorAgent::new();
    agent
        .process_observation(
            &Observation::new("Justice", vec![0.0, 0.0])
                .with_force(0.5, 0.25, 0.125)
                .with_source("Court", 2.0, 0.5),
        )
        .unwrap();
    agent
        .process_observation(
            &Observation::new("Justice", vec![3.0, 1.0])
                .with_force(0.5, 0.25, 0.125)
                .with_source("Court", 2.0, 0.5),
        )
        .unwrap()
}

/// Signal produced by the agent round-trips through JSON
#[test]
fn test_round_trip() {
    let signal = processed_signal();
    let json = signal.to_json().unwrap();
    let restored = SpmSignal::from_json(&json).unwrap();

    assert_eq!(restored.concept, signal.concept);
    assert_eq!(restored.source, signal.source);
    assert!((restored.mass - signal.mass).abs() < 1e-12);
    assert!((restored.acceleration - signal.acceleration).abs() < 1e-12);
    assert!((restored.ethos - signal.ethos).abs() < 1e-12);
    assert!((restored.force_vector.magnitude() - signal.force_vector.magnitude()).abs() < 1e-12);
}

/// Canonical JSON has exactly the documented keys
#[test]
fn test_canonical_keys() {
    let json = processed_signal().to_json().unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["acceleration", "concept", "ethos", "force_vector", "mass", "source"]
    );

    let mut force_keys: Vec<&str> = value["force_vector"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    force_keys.sort_unstable();
    assert_eq!(force_keys, vec!["ethos", "logos", "pathos"]);
}

/// Hand-written canonical JSON parses
#[test]
fn test_parse_external_canonical_form() {
    let json = r#"{
        "concept": "Democracy",
        "mass": 50.0,
        "force_vector": {"logos": 0.8, "pathos": 0.4, "ethos": 0.2},
        "acceleration": 0.85,
        "ethos": 0.2,
        "source": "unknown_botnet"
    }"#;

    let signal = SpmSignal::from_json(json).unwrap();
    assert_eq!(signal.concept, "Democracy");
    assert_eq!(signal.force_vector.ethos_component, 0.2);
    assert_eq!(signal.to_canonical_form(), serde_json::from_str::<Value>(json).unwrap());
}

#[test]
fn test_parse_garbage_is_serialization_error() {
    let err = SpmSignal::from_json("not json").unwrap_err();
    assert!(matches!(err, SpmError::Serialization(_)));
}

/// Config JSON drives alerting
#[test]
fn test_config_from_json() {
    let config = MonitorConfig::from_json(r#"{"acceleration_threshold": 0.0}"#).unwrap();
    let agent = MonitorAgent::with_config(config).unwrap();

    let alert = agent.check_alert(&processed_signal()).unwrap();
    assert!(alert.starts_with("ALERT [Justice]: High Acceleration ("));
    assert!(alert.ends_with("> 0.0)"));
}
