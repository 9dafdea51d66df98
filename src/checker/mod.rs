mod checks;
mod covariance;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::ConjunctionMessage;
use crate::report::ValidationReport;
use crate::rules::RuleThresholds;

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Pass,
    Warn,
    Fail,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
        }
    }
}

/// Structured diagnostic values attached to a finding. Insertion-ordered so
/// rendered output is deterministic.
pub type FindingDetails = IndexMap<String, serde_json::Value>;

/// One check's outcome. Created only by the check battery; immutable after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable check identifier, e.g. `MISS_DISTANCE_CONSISTENCY`.
    pub check_id: String,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<FindingDetails>,
}

impl Finding {
    #[must_use]
    pub fn new(check_id: &'static str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            check_id: check_id.to_owned(),
            severity,
            message: message.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: FindingDetails) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self.severity, Severity::Pass)
    }

    #[must_use]
    pub const fn is_warn(&self) -> bool {
        matches!(self.severity, Severity::Warn)
    }

    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self.severity, Severity::Fail)
    }
}

/// Per-evaluation view of the message with the derived relative state
/// computed once and shared by the consistency checks.
struct CheckContext<'a> {
    msg: &'a ConjunctionMessage,
    rules: &'a RuleThresholds,
    rel_pos_m: [f64; 3],
    rel_vel_mps: [f64; 3],
}

impl<'a> CheckContext<'a> {
    fn new(msg: &'a ConjunctionMessage, rules: &'a RuleThresholds) -> Self {
        let rel_pos_m = sub3(&msg.secondary.position_m, &msg.primary.position_m);
        let rel_vel_mps = sub3(&msg.secondary.velocity_mps, &msg.primary.velocity_mps);
        Self {
            msg,
            rules,
            rel_pos_m,
            rel_vel_mps,
        }
    }
}

fn sub3(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn norm3(v: &[f64; 3]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Run the fixed, ordered check battery against one message.
///
/// Deterministic and pure: the same (message, thresholds) pair always yields
/// the same findings in the same order. No check can fail; every branch,
/// including absent optional fields and degenerate values, terminates in a
/// finding.
#[must_use]
pub fn run_checks(msg: &ConjunctionMessage, rules: &RuleThresholds) -> Vec<Finding> {
    let ctx = CheckContext::new(msg, rules);
    let mut findings = Vec::new();

    checks::identity_distinct(&ctx, &mut findings);
    checks::time_order(&ctx, &mut findings);
    checks::frame_match(&ctx, &mut findings);
    checks::position_norms(&ctx, &mut findings);
    checks::speed_norms(&ctx, &mut findings);
    checks::miss_distance_consistency(&ctx, &mut findings);
    checks::relative_speed_consistency(&ctx, &mut findings);
    covariance::covariance_checks(&ctx, &mut findings);

    findings
}

/// Evaluate one message against one threshold set and aggregate the report.
///
/// # Errors
/// Returns [`crate::CdmGuardError::InvalidInput`] if the message violates a
/// structural invariant; such a message cannot be checked at all.
pub fn validate_message(
    msg: &ConjunctionMessage,
    rules: &RuleThresholds,
) -> Result<ValidationReport> {
    msg.validate()?;
    let findings = run_checks(msg, rules);
    Ok(ValidationReport::from_findings(msg, findings))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
