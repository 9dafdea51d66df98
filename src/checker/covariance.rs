use nalgebra::{Matrix3, SymmetricEigen};
use serde_json::json;

use crate::rules::CovarianceRules;

use super::checks::check_optional;
use super::{CheckContext, Finding, FindingDetails, Severity};

/// The covariance block: symmetry, positive-semi-definiteness, and
/// diagonal/standard-deviation bounds on the 3x3 relative-position
/// covariance. Gated on presence like the other optional fields.
///
/// The PSD and diagonal tests run on the symmetrized matrix even when the
/// symmetry check already failed, so both findings can fire independently
/// for one asymmetric input.
pub(super) fn covariance_checks(ctx: &CheckContext<'_>, findings: &mut Vec<Finding>) {
    let rules = ctx.rules.covariance;
    check_optional(
        findings,
        ctx.msg.rel_pos_cov_m2,
        "COV_PRESENT",
        "rel_pos_cov_m2 not provided (cannot assess uncertainty validity).",
        move |flat, findings| {
            let c = Matrix3::from_row_slice(&flat);
            symmetry(&c, rules.symmetry_tol, findings);
            let c_sym = (c + c.transpose()) * 0.5;
            positive_semi_definite(c_sym, rules.psd_eig_tol, findings);
            diagonal_and_std(&c_sym, &rules, findings);
        },
    );
}

fn symmetry(c: &Matrix3<f64>, tol: f64, findings: &mut Vec<Finding>) {
    let sym_err = (c - c.transpose()).abs().max();
    let mut details = FindingDetails::new();
    details.insert("max_abs_C_minus_CT".to_owned(), json!(sym_err));
    if sym_err > tol {
        findings.push(
            Finding::new(
                "COV_SYMMETRY",
                Severity::Fail,
                "Covariance is not symmetric within tolerance.",
            )
            .with_details(details),
        );
    } else {
        findings.push(
            Finding::new("COV_SYMMETRY", Severity::Pass, "Covariance symmetry OK.")
                .with_details(details),
        );
    }
}

fn positive_semi_definite(c_sym: Matrix3<f64>, eig_tol: f64, findings: &mut Vec<Finding>) {
    let eigen = SymmetricEigen::new(c_sym);
    let min_eig = eigen.eigenvalues.min();
    let mut details = FindingDetails::new();
    details.insert("min_eigenvalue".to_owned(), json!(min_eig));
    if min_eig < eig_tol {
        findings.push(
            Finding::new(
                "COV_PSD",
                Severity::Fail,
                "Covariance not positive semi-definite (eigenvalue too negative).",
            )
            .with_details(details),
        );
    } else {
        findings.push(
            Finding::new("COV_PSD", Severity::Pass, "Covariance PSD check OK.")
                .with_details(details),
        );
    }
}

fn diagonal_and_std(c_sym: &Matrix3<f64>, rules: &CovarianceRules, findings: &mut Vec<Finding>) {
    let diag = c_sym.diagonal();

    // A negative variance makes the std ladder meaningless, so it is skipped.
    if diag.iter().any(|&d| d < 0.0) {
        let mut details = FindingDetails::new();
        details.insert("diag".to_owned(), json!([diag[0], diag[1], diag[2]]));
        findings.push(
            Finding::new(
                "COV_DIAG",
                Severity::Fail,
                "Covariance diagonal contains negative values.",
            )
            .with_details(details),
        );
        return;
    }

    let max_std = diag.map(f64::sqrt).max();
    let mut details = FindingDetails::new();
    details.insert("max_std_m".to_owned(), json!(max_std));
    let finding = if max_std > rules.std_fail_m {
        Finding::new(
            "COV_STD",
            Severity::Fail,
            "Covariance std is extremely large (units/reference likely wrong).",
        )
    } else if max_std > rules.std_warn_m {
        Finding::new("COV_STD", Severity::Warn, "Covariance std is large (review).")
    } else {
        Finding::new(
            "COV_STD",
            Severity::Pass,
            "Covariance std magnitudes look reasonable.",
        )
    };
    findings.push(finding.with_details(details));
}

#[cfg(test)]
#[path = "covariance_tests.rs"]
mod tests;
