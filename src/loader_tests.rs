use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::message::ReferenceFrame;

const GOOD_JSON: &str = r#"{
    "message_id": "MSG-001",
    "creation_time_utc": "2026-03-01T10:00:00Z",
    "tca_utc": "2026-03-01T12:00:00Z",
    "primary": {
        "object_id": "25544",
        "position_m": [7000000.0, 0.0, 0.0],
        "velocity_mps": [0.0, 7500.0, 0.0]
    },
    "secondary": {
        "object_id": "48274",
        "position_m": [7000100.0, 0.0, 0.0],
        "velocity_mps": [0.0, -7500.0, 0.0]
    },
    "miss_distance_m": 100.0
}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_json_message() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "msg.json", GOOD_JSON);
    let msg = load_message(&path).unwrap();
    assert_eq!(msg.message_id, "MSG-001");
    assert_eq!(msg.miss_distance_m, Some(100.0));
    assert_eq!(msg.primary.frame, ReferenceFrame::Teme);
}

#[test]
fn loads_toml_message() {
    let toml = r#"
        message_id = "MSG-002"
        creation_time_utc = "2026-03-01T10:00:00Z"
        tca_utc = "2026-03-01T12:00:00Z"

        [primary]
        object_id = "25544"
        position_m = [7000000.0, 0.0, 0.0]
        velocity_mps = [0.0, 7500.0, 0.0]

        [secondary]
        object_id = "48274"
        position_m = [7000100.0, 0.0, 0.0]
        velocity_mps = [0.0, -7500.0, 0.0]
        frame = "ITRF"
    "#;
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "msg.toml", toml);
    let msg = load_message(&path).unwrap();
    assert_eq!(msg.message_id, "MSG-002");
    assert_eq!(msg.secondary.frame, ReferenceFrame::Itrf);
}

#[test]
fn rejects_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "msg.yaml", "message_id: MSG-001");
    let err = load_message(&path).unwrap_err();
    assert!(matches!(err, CdmGuardError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_reports_path() {
    let err = load_message(Path::new("/nonexistent/msg.json")).unwrap_err();
    match err {
        CdmGuardError::FileRead { path, .. } => {
            assert!(path.ends_with("msg.json"));
        }
        other => panic!("expected FileRead, got {other}"),
    }
}

#[test]
fn schema_violation_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "msg.json", r#"{"message_id": "MSG-001"}"#);
    let err = load_message(&path).unwrap_err();
    assert!(matches!(err, CdmGuardError::InvalidInput(_)));
}

#[test]
fn range_violation_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    let bad = GOOD_JSON.replace("\"miss_distance_m\": 100.0", "\"miss_distance_m\": -2.0");
    let path = write(&dir, "msg.json", &bad);
    let err = load_message(&path).unwrap_err();
    assert!(matches!(err, CdmGuardError::InvalidInput(_)));
}

#[test]
fn no_rules_path_yields_defaults() {
    let rules = load_rules(None).unwrap();
    assert_eq!(rules, RuleThresholds::default());
}

#[test]
fn rules_file_overrides_subset() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "rules.toml", "[time]\nwarn_if_lead_time_s_below = 600.0\n");
    let rules = load_rules(Some(&path)).unwrap();
    assert_eq!(rules.time.warn_if_lead_time_s_below, 600.0);
    assert_eq!(rules.state, RuleThresholds::default().state);
}

#[test]
fn missing_rules_file_is_an_error() {
    let err = load_rules(Some(Path::new("/nonexistent/rules.toml"))).unwrap_err();
    assert!(matches!(err, CdmGuardError::FileRead { .. }));
}

#[test]
fn invalid_rules_file_is_a_rules_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "rules.toml", "[time]\nwarn_if_lead_time_s_below = \"soon\"\n");
    let err = load_rules(Some(&path)).unwrap_err();
    assert!(matches!(err, CdmGuardError::Rules(_)));
}
