use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checker::{Finding, Severity};
use crate::message::ConjunctionMessage;

/// Finding counts by severity. All three counts are always present in the
/// serialized form, zero or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub pass: usize,
    pub warn: usize,
    pub fail: usize,
}

impl Summary {
    fn tally(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for finding in findings {
            match finding.severity {
                Severity::Pass => summary.pass += 1,
                Severity::Warn => summary.warn += 1,
                Severity::Fail => summary.fail += 1,
            }
        }
        summary
    }

    #[must_use]
    pub const fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Pass => self.pass,
            Severity::Warn => self.warn,
            Severity::Fail => self.fail,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.pass + self.warn + self.fail
    }
}

/// The aggregate result of one evaluation: the ordered findings, severity
/// counts, the overall verdict, and the echoed message identity. Created once
/// per evaluation and never mutated.
///
/// `ok` is the canonical success signal for downstream tooling (e.g. exit
/// codes): true iff no FAIL-severity finding exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Evaluation wall-clock time, stamped once; not derived from the input.
    pub report_time_utc: DateTime<Utc>,

    pub message_id: String,
    pub creation_time_utc: DateTime<Utc>,
    pub tca_utc: DateTime<Utc>,

    pub findings: Vec<Finding>,
    pub summary: Summary,
    pub ok: bool,
}

impl ValidationReport {
    /// Aggregate a completed findings sequence. Cannot fail.
    #[must_use]
    pub fn from_findings(msg: &ConjunctionMessage, findings: Vec<Finding>) -> Self {
        let summary = Summary::tally(&findings);
        Self {
            report_time_utc: Utc::now(),
            message_id: msg.message_id.clone(),
            creation_time_utc: msg.creation_time_utc,
            tca_utc: msg.tca_utc,
            findings,
            summary,
            ok: summary.fail == 0,
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
