use super::*;
use crate::checker::validate_message;
use crate::message::{ConjunctionMessage, ObjectState, ReferenceFrame};
use crate::rules::RuleThresholds;

fn report() -> ValidationReport {
    let state = |id: &str| ObjectState {
        object_id: id.to_string(),
        position_m: [7_000_000.0, 0.0, 0.0],
        velocity_mps: [0.0, 7_500.0, 0.0],
        frame: ReferenceFrame::Teme,
    };
    let msg = ConjunctionMessage {
        message_id: "MSG-001".to_string(),
        creation_time_utc: "2026-03-01T10:00:00Z".parse().unwrap(),
        tca_utc: "2026-03-01T12:00:00Z".parse().unwrap(),
        primary: state("25544"),
        secondary: state("48274"),
        miss_distance_m: None,
        relative_speed_mps: None,
        rel_pos_cov_m2: None,
    };
    validate_message(&msg, &RuleThresholds::default()).unwrap()
}

#[test]
fn json_output_round_trips() {
    let report = report();
    let rendered = JsonFormatter.format(&report).unwrap();
    let parsed: ValidationReport = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn json_output_exposes_summary_and_verdict() {
    let rendered = JsonFormatter.format(&report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["message_id"], serde_json::json!("MSG-001"));
    assert!(value["summary"]["pass"].is_u64());
    assert!(value["ok"].is_boolean());
    assert!(value["findings"].as_array().unwrap().len() >= 8);
}

#[test]
fn findings_without_details_omit_the_field() {
    let rendered = JsonFormatter.format(&report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    let id_distinct = &value["findings"][0];
    assert_eq!(id_distinct["check_id"], serde_json::json!("ID_DISTINCT"));
    assert!(id_distinct.get("details").is_none());
}
