//! Locomotive traction type value object.

use crate::DepotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prototype traction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum LocoType {
    Steam,
    Diesel,
    Electric,
}

impl LocoType {
    /// Returns the canonical lowercase name used in queries and storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Steam => "steam",
            Self::Diesel => "diesel",
            Self::Electric => "electric",
        }
    }

    /// Returns all traction types.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Steam, Self::Diesel, Self::Electric]
    }
}

impl fmt::Display for LocoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocoType {
    type Err = DepotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "steam" => Ok(Self::Steam),
            "diesel" => Ok(Self::Diesel),
            "electric" => Ok(Self::Electric),
            other => Err(DepotError::validation(format!(
                "Unknown locomotive type: '{}'",
                other
            ))),
        }
    }
}
