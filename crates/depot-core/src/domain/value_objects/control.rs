//! Locomotive control value object.

use crate::DepotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a locomotive is driven: plain analog, digital decoder, or digital
/// with sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Analog,
    Digital,
    DigitalSound,
}

impl Control {
    /// Returns the canonical name used in queries and storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Analog => "analog",
            Self::Digital => "digital",
            Self::DigitalSound => "digital_sound",
        }
    }

    /// Returns all control types.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Analog, Self::Digital, Self::DigitalSound]
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Control {
    type Err = DepotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "analog" => Ok(Self::Analog),
            "digital" => Ok(Self::Digital),
            "digital_sound" | "digital-sound" => Ok(Self::DigitalSound),
            other => Err(DepotError::validation(format!(
                "Unknown control type: '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for control in Control::all() {
            assert_eq!(control.as_str().parse::<Control>().unwrap(), control);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("steam".parse::<Control>().is_err());
    }
}
