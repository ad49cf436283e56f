//! Model epoch value object.

use crate::DepotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Historical era of the prototype, per the European epoch convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Epoch {
    /// Up to 1920: private and state railways.
    I,
    /// 1920-1945.
    II,
    /// 1945-1970.
    III,
    /// 1970-1990.
    IV,
    /// 1990-2006.
    V,
    /// 2006 onwards.
    VI,
}

impl Epoch {
    /// Returns the canonical lowercase name used in queries and storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::I => "i",
            Self::II => "ii",
            Self::III => "iii",
            Self::IV => "iv",
            Self::V => "v",
            Self::VI => "vi",
        }
    }

    /// Returns all epochs in chronological order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [Self::I, Self::II, Self::III, Self::IV, Self::V, Self::VI]
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Epoch {
    type Err = DepotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "i" | "1" => Ok(Self::I),
            "ii" | "2" => Ok(Self::II),
            "iii" | "3" => Ok(Self::III),
            "iv" | "4" => Ok(Self::IV),
            "v" | "5" => Ok(Self::V),
            "vi" | "6" => Ok(Self::VI),
            other => Err(DepotError::validation(format!(
                "Unknown epoch: '{}'",
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
        for epoch in Epoch::all() {
            assert_eq!(epoch.as_str().parse::<Epoch>().unwrap(), epoch);
        }
    }

    #[test]
    fn test_parse_numeric_aliases() {
        assert_eq!("3".parse::<Epoch>().unwrap(), Epoch::III);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("vii".parse::<Epoch>().is_err());
    }
}
