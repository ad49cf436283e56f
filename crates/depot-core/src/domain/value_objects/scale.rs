//! Model scale value object.

use crate::DepotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Model railway scale, from Z (1:220) up to G (1:22.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// 1:220
    Z,
    /// 1:160
    N,
    /// 1:120
    Tt,
    /// 1:87
    H0,
    /// 1:45
    O,
    /// 1:22.5
    G,
}

impl Scale {
    /// Returns the canonical lowercase name used in queries and storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Z => "z",
            Self::N => "n",
            Self::Tt => "tt",
            Self::H0 => "h0",
            Self::O => "o",
            Self::G => "g",
        }
    }

    /// Returns all scales in ascending size order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [Self::Z, Self::N, Self::Tt, Self::H0, Self::O, Self::G]
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scale {
    type Err = DepotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "z" => Ok(Self::Z),
            "n" => Ok(Self::N),
            "tt" => Ok(Self::Tt),
            "h0" | "ho" => Ok(Self::H0),
            "o" => Ok(Self::O),
            "g" => Ok(Self::G),
            other => Err(DepotError::validation(format!(
                "Unknown scale: '{}'",
                other
            ))),
        }
    }
}
