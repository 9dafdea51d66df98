use super::*;
use crate::checker::validate_message;
use crate::message::{ConjunctionMessage, ObjectState, ReferenceFrame};
use crate::rules::RuleThresholds;

fn report(miss_distance_m: Option<f64>) -> ValidationReport {
    let state = |id: &str, x: f64| ObjectState {
        object_id: id.to_string(),
        position_m: [x, 0.0, 0.0],
        velocity_mps: [0.0, 7_500.0, 0.0],
        frame: ReferenceFrame::Teme,
    };
    let msg = ConjunctionMessage {
        message_id: "MSG-001".to_string(),
        creation_time_utc: "2026-03-01T10:00:00Z".parse().unwrap(),
        tca_utc: "2026-03-01T12:00:00Z".parse().unwrap(),
        primary: state("25544", 7_000_000.0),
        secondary: state("48274", 7_000_100.0),
        miss_distance_m,
        relative_speed_mps: None,
        rel_pos_cov_m2: None,
    };
    validate_message(&msg, &RuleThresholds::default()).unwrap()
}

#[test]
fn markdown_has_header_and_summary() {
    let rendered = MarkdownFormatter.format(&report(None)).unwrap();
    assert!(rendered.starts_with("# Conjunction Data Validation Report"));
    assert!(rendered.contains("- **Message ID:** MSG-001"));
    assert!(rendered.contains("## Summary"));
    assert!(rendered.contains("- FAIL: 0"));
    assert!(rendered.contains("- **OK:** true"));
}

#[test]
fn markdown_lists_every_finding_with_severity() {
    let rendered = MarkdownFormatter.format(&report(None)).unwrap();
    assert!(rendered.contains("[PASS] ID_DISTINCT"));
    assert!(rendered.contains("[WARN] MISS_DISTANCE_PRESENT"));
    assert!(rendered.contains("[WARN] COV_PRESENT"));
}

#[test]
fn markdown_renders_details_as_nested_list() {
    // Far off the true 100 m separation, so the failing finding carries
    // diagnostic details.
    let rendered = MarkdownFormatter.format(&report(Some(10_000.0))).unwrap();
    assert!(rendered.contains("[FAIL] MISS_DISTANCE_CONSISTENCY"));
    assert!(rendered.contains("`abs_err_m`"));
    assert!(rendered.contains("`tolerance_m`"));
}
