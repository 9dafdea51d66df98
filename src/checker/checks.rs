use serde_json::json;

use super::{CheckContext, Finding, FindingDetails, Severity, norm3};

/// Floor for relative-error denominators so a zero estimate cannot divide
/// by zero.
const REL_ERR_EPS: f64 = 1e-9;

pub(super) fn identity_distinct(ctx: &CheckContext<'_>, findings: &mut Vec<Finding>) {
    if ctx.msg.primary.object_id == ctx.msg.secondary.object_id {
        findings.push(Finding::new(
            "ID_DISTINCT",
            Severity::Fail,
            "Primary and secondary object_id are identical.",
        ));
    } else {
        findings.push(Finding::new(
            "ID_DISTINCT",
            Severity::Pass,
            "Primary and secondary object_id are distinct.",
        ));
    }
}

pub(super) fn time_order(ctx: &CheckContext<'_>, findings: &mut Vec<Finding>) {
    let msg = ctx.msg;
    if msg.creation_time_utc >= msg.tca_utc {
        let mut details = FindingDetails::new();
        details.insert(
            "creation_time_utc".to_owned(),
            json!(msg.creation_time_utc.to_rfc3339()),
        );
        details.insert("tca_utc".to_owned(), json!(msg.tca_utc.to_rfc3339()));
        findings.push(
            Finding::new(
                "TIME_ORDER",
                Severity::Fail,
                "creation_time_utc is not before tca_utc.",
            )
            .with_details(details),
        );
        return;
    }

    let lead = msg.tca_utc.signed_duration_since(msg.creation_time_utc);
    #[allow(clippy::cast_precision_loss)]
    let lead_s = lead.num_milliseconds() as f64 / 1000.0;
    let mut details = FindingDetails::new();
    details.insert("lead_time_s".to_owned(), json!(lead_s));
    if lead_s < ctx.rules.time.warn_if_lead_time_s_below {
        findings.push(
            Finding::new(
                "LEAD_TIME",
                Severity::Warn,
                "Very small lead time between creation and TCA.",
            )
            .with_details(details),
        );
    } else {
        findings.push(
            Finding::new(
                "LEAD_TIME",
                Severity::Pass,
                "Lead time between creation and TCA is within expectations.",
            )
            .with_details(details),
        );
    }
}

pub(super) fn frame_match(ctx: &CheckContext<'_>, findings: &mut Vec<Finding>) {
    let (primary, secondary) = (&ctx.msg.primary, &ctx.msg.secondary);
    let mut details = FindingDetails::new();
    if primary.frame == secondary.frame {
        details.insert("frame".to_owned(), json!(primary.frame.as_str()));
        findings.push(
            Finding::new(
                "FRAME_MATCH",
                Severity::Pass,
                "Primary and secondary frames match.",
            )
            .with_details(details),
        );
    } else {
        details.insert("primary_frame".to_owned(), json!(primary.frame.as_str()));
        details.insert(
            "secondary_frame".to_owned(),
            json!(secondary.frame.as_str()),
        );
        // A mismatch needs manual reconciliation but may be legitimate, so
        // this is flagged for review rather than rejected.
        findings.push(
            Finding::new(
                "FRAME_MATCH",
                Severity::Warn,
                "Primary and secondary frames differ (review needed).",
            )
            .with_details(details),
        );
    }
}

pub(super) fn position_norms(ctx: &CheckContext<'_>, findings: &mut Vec<Finding>) {
    let primary_r = norm3(&ctx.msg.primary.position_m);
    let secondary_r = norm3(&ctx.msg.secondary.position_m);
    let limit = ctx.rules.state.max_position_norm_m_warn;

    let mut details = FindingDetails::new();
    details.insert("primary_r_m".to_owned(), json!(primary_r));
    details.insert("secondary_r_m".to_owned(), json!(secondary_r));
    if primary_r > limit || secondary_r > limit {
        findings.push(
            Finding::new(
                "POS_NORM",
                Severity::Warn,
                "Large position norm detected (check units/reference).",
            )
            .with_details(details),
        );
    } else {
        findings.push(
            Finding::new("POS_NORM", Severity::Pass, "Position norms look reasonable.")
                .with_details(details),
        );
    }
}

pub(super) fn speed_norms(ctx: &CheckContext<'_>, findings: &mut Vec<Finding>) {
    let primary_v = norm3(&ctx.msg.primary.velocity_mps);
    let secondary_v = norm3(&ctx.msg.secondary.velocity_mps);
    let limit = ctx.rules.state.max_speed_mps_warn;

    let mut details = FindingDetails::new();
    details.insert("primary_v_mps".to_owned(), json!(primary_v));
    details.insert("secondary_v_mps".to_owned(), json!(secondary_v));
    if primary_v > limit || secondary_v > limit {
        findings.push(
            Finding::new(
                "SPEED_NORM",
                Severity::Warn,
                "Large speed detected (check units/reference).",
            )
            .with_details(details),
        );
    } else {
        findings.push(
            Finding::new("SPEED_NORM", Severity::Pass, "Speed norms look reasonable.")
                .with_details(details),
        );
    }
}

/// The recurring optional-field shape: an absent value emits a single WARN
/// presence finding; a present value runs the comparison instead.
pub(super) fn check_optional<T: Copy>(
    findings: &mut Vec<Finding>,
    value: Option<T>,
    absent_id: &'static str,
    absent_message: &'static str,
    compare: impl FnOnce(T, &mut Vec<Finding>),
) {
    match value {
        Some(v) => compare(v, findings),
        None => findings.push(Finding::new(absent_id, Severity::Warn, absent_message)),
    }
}

/// One reported-scalar cross-check against a value derived from the state
/// vectors. Tolerance is `max(abs_tol, rel_tol_frac * estimate)` and the
/// comparison is open on the failing side: `abs_err == tol` passes.
struct ScalarCrossCheck {
    check_id: &'static str,
    /// Detail key for the reported value, e.g. `miss_distance_m`.
    reported_key: &'static str,
    /// Unit suffix for the derived detail keys (`m` or `mps`).
    unit: &'static str,
    /// Miss distance breaches FAIL, relative-speed breaches only WARN;
    /// per-check policy, not a general rule.
    breach_severity: Severity,
    breach_message: &'static str,
    pass_message: &'static str,
}

impl ScalarCrossCheck {
    fn run(
        &self,
        reported: f64,
        estimate: f64,
        abs_tol: f64,
        rel_tol_frac: f64,
        findings: &mut Vec<Finding>,
    ) {
        let abs_err = (reported - estimate).abs();
        let rel_err = abs_err / estimate.max(REL_ERR_EPS);
        let tol = abs_tol.max(rel_tol_frac * estimate);

        let mut details = FindingDetails::new();
        if abs_err > tol {
            details.insert(self.reported_key.to_owned(), json!(reported));
            details.insert(format!("estimated_{}", self.unit), json!(estimate));
            details.insert(format!("abs_err_{}", self.unit), json!(abs_err));
            details.insert("rel_err".to_owned(), json!(rel_err));
            details.insert(format!("tolerance_{}", self.unit), json!(tol));
            findings.push(
                Finding::new(self.check_id, self.breach_severity, self.breach_message)
                    .with_details(details),
            );
        } else {
            details.insert(format!("abs_err_{}", self.unit), json!(abs_err));
            details.insert(format!("tolerance_{}", self.unit), json!(tol));
            findings.push(
                Finding::new(self.check_id, Severity::Pass, self.pass_message)
                    .with_details(details),
            );
        }
    }
}

pub(super) fn miss_distance_consistency(ctx: &CheckContext<'_>, findings: &mut Vec<Finding>) {
    let miss_est = norm3(&ctx.rel_pos_m);
    let rules = &ctx.rules.consistency;
    check_optional(
        findings,
        ctx.msg.miss_distance_m,
        "MISS_DISTANCE_PRESENT",
        "miss_distance_m not provided (cannot cross-check).",
        |reported, findings| {
            ScalarCrossCheck {
                check_id: "MISS_DISTANCE_CONSISTENCY",
                reported_key: "miss_distance_m",
                unit: "m",
                breach_severity: Severity::Fail,
                breach_message: "miss_distance_m inconsistent with relative position norm.",
                pass_message: "miss_distance_m consistent with relative position norm.",
            }
            .run(
                reported,
                miss_est,
                rules.miss_distance_abs_tol_m,
                rules.miss_distance_rel_tol_frac,
                findings,
            );
        },
    );
}

pub(super) fn relative_speed_consistency(ctx: &CheckContext<'_>, findings: &mut Vec<Finding>) {
    let speed_est = norm3(&ctx.rel_vel_mps);
    let rules = &ctx.rules.consistency;
    check_optional(
        findings,
        ctx.msg.relative_speed_mps,
        "REL_SPEED_PRESENT",
        "relative_speed_mps not provided (cannot cross-check).",
        |reported, findings| {
            ScalarCrossCheck {
                check_id: "REL_SPEED_CONSISTENCY",
                reported_key: "relative_speed_mps",
                unit: "mps",
                breach_severity: Severity::Warn,
                breach_message: "relative_speed_mps differs from norm of relative velocity (review).",
                pass_message: "relative_speed_mps consistent with relative velocity norm.",
            }
            .run(
                reported,
                speed_est,
                rules.rel_speed_abs_tol_mps,
                rules.rel_speed_rel_tol_frac,
                findings,
            );
        },
    );
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
