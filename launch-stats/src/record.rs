use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary launch outcome. Stored as `0` / `1` in the source table
/// (the `class` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

#[derive(Error, Debug)]
#[error("outcome must be 0 or 1, got {0}")]
pub struct InvalidOutcome(pub u8);

impl TryFrom<u8> for Outcome {
    type Error = InvalidOutcome;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(InvalidOutcome(other)),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Display label used by the single-site summary view.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Failure => "Fail",
            Outcome::Success => "Success",
        }
    }
}

/// One row of the launch-records table. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Absent for records where the mass was never published; such
    /// records are excluded from payload-range filtering.
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: Option<f64>,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    /// Categorical label passed through to the scatter view as a
    /// grouping/color key.
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}
