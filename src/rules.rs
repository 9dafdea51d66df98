use serde::{Deserialize, Serialize};

/// Lead-time thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeRules {
    /// Warn when the creation-to-TCA lead time drops below this many seconds.
    #[serde(default = "default_warn_lead_time_s")]
    pub warn_if_lead_time_s_below: f64,
}

/// State-magnitude plausibility thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateRules {
    /// Warn when either object's position norm exceeds this [m].
    #[serde(default = "default_max_position_norm_m")]
    pub max_position_norm_m_warn: f64,
    /// Warn when either object's speed exceeds this [m/s].
    #[serde(default = "default_max_speed_mps")]
    pub max_speed_mps_warn: f64,
}

/// Cross-check tolerances for the reported miss distance and relative speed.
///
/// The effective tolerance for each check is
/// `max(abs_tol, rel_tol_frac * estimate)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsistencyRules {
    #[serde(default = "default_miss_distance_abs_tol_m")]
    pub miss_distance_abs_tol_m: f64,
    #[serde(default = "default_rel_tol_frac")]
    pub miss_distance_rel_tol_frac: f64,
    #[serde(default = "default_rel_speed_abs_tol_mps")]
    pub rel_speed_abs_tol_mps: f64,
    #[serde(default = "default_rel_tol_frac")]
    pub rel_speed_rel_tol_frac: f64,
}

/// Covariance well-formedness thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CovarianceRules {
    /// Maximum tolerated elementwise asymmetry `max(|C - Cᵀ|)`.
    #[serde(default = "default_symmetry_tol")]
    pub symmetry_tol: f64,
    /// Minimum acceptable eigenvalue. Slightly negative so floating-point
    /// noise on a genuinely PSD matrix does not fail the check.
    #[serde(default = "default_psd_eig_tol")]
    pub psd_eig_tol: f64,
    /// Warn when the largest per-axis standard deviation exceeds this [m].
    #[serde(default = "default_std_warn_m")]
    pub std_warn_m: f64,
    /// Fail when the largest per-axis standard deviation exceeds this [m].
    #[serde(default = "default_std_fail_m")]
    pub std_fail_m: f64,
}

/// All numeric tolerances and limits used by the check battery, grouped by
/// concern. Every field has a default, so the engine can run with no
/// configuration at all; a rules file may override any subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleThresholds {
    #[serde(default)]
    pub time: TimeRules,
    #[serde(default)]
    pub state: StateRules,
    #[serde(default)]
    pub consistency: ConsistencyRules,
    #[serde(default)]
    pub covariance: CovarianceRules,
}

impl Default for TimeRules {
    fn default() -> Self {
        Self {
            warn_if_lead_time_s_below: default_warn_lead_time_s(),
        }
    }
}

impl Default for StateRules {
    fn default() -> Self {
        Self {
            max_position_norm_m_warn: default_max_position_norm_m(),
            max_speed_mps_warn: default_max_speed_mps(),
        }
    }
}

impl Default for ConsistencyRules {
    fn default() -> Self {
        Self {
            miss_distance_abs_tol_m: default_miss_distance_abs_tol_m(),
            miss_distance_rel_tol_frac: default_rel_tol_frac(),
            rel_speed_abs_tol_mps: default_rel_speed_abs_tol_mps(),
            rel_speed_rel_tol_frac: default_rel_tol_frac(),
        }
    }
}

impl Default for CovarianceRules {
    fn default() -> Self {
        Self {
            symmetry_tol: default_symmetry_tol(),
            psd_eig_tol: default_psd_eig_tol(),
            std_warn_m: default_std_warn_m(),
            std_fail_m: default_std_fail_m(),
        }
    }
}

const fn default_warn_lead_time_s() -> f64 {
    60.0
}

const fn default_max_position_norm_m() -> f64 {
    80_000_000.0
}

const fn default_max_speed_mps() -> f64 {
    15_000.0
}

const fn default_miss_distance_abs_tol_m() -> f64 {
    5.0
}

const fn default_rel_speed_abs_tol_mps() -> f64 {
    0.2
}

const fn default_rel_tol_frac() -> f64 {
    0.10
}

const fn default_symmetry_tol() -> f64 {
    1e-6
}

const fn default_psd_eig_tol() -> f64 {
    -1e-9
}

const fn default_std_warn_m() -> f64 {
    100_000.0
}

const fn default_std_fail_m() -> f64 {
    10_000_000.0
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
