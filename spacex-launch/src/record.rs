use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary result of a launch attempt.
///
/// The dataset stores it as the integer `class` column: `1` for a
/// successful landing, `0` for a failure. Any other value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// The numeric class value (1 = success, 0 = failure).
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = InvalidClass;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Outcome::Success),
            0 => Ok(Outcome::Failure),
            other => Err(InvalidClass(other)),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidClass(pub u8);

impl fmt::Display for InvalidClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class must be 0 or 1, got {}", self.0)
    }
}

impl std::error::Error for InvalidClass {}

/// One row of the launch dataset.
///
/// Field names follow the dataset header; unrelated columns such as
/// `Flight Number` or `Booster Version` are ignored on load.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "class", with = "class_column")]
    pub outcome: Outcome,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(site: &str, payload_mass_kg: f64, outcome: Outcome, category: &str) -> Self {
        Self {
            launch_site: site.to_string(),
            payload_mass_kg,
            outcome,
            booster_version_category: category.to_string(),
        }
    }
}

/// (De)serializes `Outcome` as the dataset's integer `class` column.
mod class_column {
    use super::Outcome;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(outcome: &Outcome, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(outcome.class())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Outcome, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Outcome::try_from(raw).map_err(de::Error::custom)
    }
}
