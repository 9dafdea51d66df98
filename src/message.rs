use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CdmGuardError, Result};

/// Reference frames a state vector may be expressed in. Closed set; unknown
/// frame strings are rejected at deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    #[serde(rename = "EME2000")]
    Eme2000,
    #[serde(rename = "ITRF")]
    Itrf,
    #[default]
    #[serde(rename = "TEME")]
    Teme,
}

impl ReferenceFrame {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eme2000 => "EME2000",
            Self::Itrf => "ITRF",
            Self::Teme => "TEME",
        }
    }
}

/// One tracked object's instantaneous state.
///
/// Position and velocity are exactly three components; the fixed-size arrays
/// enforce that at the type level, so a message with a short vector never
/// deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectState {
    /// Unique object identifier (e.g. NORAD ID or internal ID).
    pub object_id: String,
    /// Position vector [m] (x, y, z).
    pub position_m: [f64; 3],
    /// Velocity vector [m/s] (vx, vy, vz).
    pub velocity_mps: [f64; 3],
    #[serde(default)]
    pub frame: ReferenceFrame,
}

/// A single conjunction-data message: two object states plus derived
/// conjunction metadata. Constructed once by the loader and read-only
/// thereafter.
///
/// The schema is closed (`deny_unknown_fields`); structural invariants that
/// the types cannot capture are enforced by [`ConjunctionMessage::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConjunctionMessage {
    pub message_id: String,
    pub creation_time_utc: DateTime<Utc>,
    /// Time of closest approach (UTC).
    pub tca_utc: DateTime<Utc>,

    pub primary: ObjectState,
    pub secondary: ObjectState,

    /// Reported miss distance at TCA [m].
    #[serde(default)]
    pub miss_distance_m: Option<f64>,
    /// Reported relative speed at TCA [m/s].
    #[serde(default)]
    pub relative_speed_mps: Option<f64>,
    /// Flattened row-major 3x3 covariance of relative position [m^2].
    #[serde(default)]
    pub rel_pos_cov_m2: Option<[f64; 9]>,
}

impl ObjectState {
    fn validate(&self, role: &str) -> Result<()> {
        if self.object_id.is_empty() {
            return Err(CdmGuardError::InvalidInput(format!(
                "{role}.object_id must be non-empty"
            )));
        }
        Ok(())
    }
}

impl ConjunctionMessage {
    /// Check the range/identity invariants the field types cannot express.
    ///
    /// # Errors
    /// Returns [`CdmGuardError::InvalidInput`] for an empty identifier or a
    /// negative (or non-finite) reported scalar. A message that fails here
    /// never reaches the check battery.
    pub fn validate(&self) -> Result<()> {
        if self.message_id.is_empty() {
            return Err(CdmGuardError::InvalidInput(
                "message_id must be non-empty".into(),
            ));
        }
        self.primary.validate("primary")?;
        self.secondary.validate("secondary")?;
        require_non_negative("miss_distance_m", self.miss_distance_m)?;
        require_non_negative("relative_speed_mps", self.relative_speed_mps)?;
        Ok(())
    }
}

fn require_non_negative(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(CdmGuardError::InvalidInput(format!(
            "{field} must be finite and >= 0 (got {v})"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
