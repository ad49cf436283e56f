//! Caller-supplied query options for catalog listings.

use depot_core::{Control, DepotError, Epoch, LocoType, Scale, TagId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Sort key for catalog listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    CompanyAsc,
    CompanyDesc,
}

impl OrderBy {
    /// Returns the canonical query-string name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::CompanyAsc => "company_asc",
            Self::CompanyDesc => "company_desc",
        }
    }

    /// Returns all sort keys.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::NameAsc,
            Self::NameDesc,
            Self::PriceAsc,
            Self::PriceDesc,
            Self::CompanyAsc,
            Self::CompanyDesc,
        ]
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = DepotError;

    /// Parses a sort key, failing fast on anything unrecognized rather than
    /// falling back to a default ordering.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name_asc" => Ok(Self::NameAsc),
            "name_desc" => Ok(Self::NameDesc),
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "company_asc" => Ok(Self::CompanyAsc),
            "company_desc" => Ok(Self::CompanyDesc),
            other => Err(DepotError::validation(format!(
                "Unknown order key: '{}'",
                other
            ))),
        }
    }
}

/// Attribute filters for catalog listings.
///
/// An empty set means "no filter on this attribute", never "exclude all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FilterOptions {
    pub tags: Vec<TagId>,
    pub scales: Vec<Scale>,
    pub epochs: Vec<Epoch>,
    pub controls: Vec<Control>,
    pub loco_types: Vec<LocoType>,
}

impl FilterOptions {
    /// Returns true if no attribute filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
            && self.scales.is_empty()
            && self.epochs.is_empty()
            && self.controls.is_empty()
            && self.loco_types.is_empty()
    }
}

/// The full bundle of caller-supplied listing criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QueryOptions {
    /// Whitespace-separated search terms. Absent or blank means no search.
    pub search: Option<String>,

    /// Attribute filters.
    pub filters: FilterOptions,

    /// Sort key.
    pub order_by: OrderBy,

    /// Requested 1-indexed page; out-of-range values are clamped.
    pub page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_parse_roundtrip() {
        for key in OrderBy::all() {
            assert_eq!(key.as_str().parse::<OrderBy>().unwrap(), key);
        }
    }

    #[test]
    fn test_order_by_rejects_unknown_key() {
        let err = "by_popularity".parse::<OrderBy>().unwrap_err();
        assert!(err.to_string().contains("by_popularity"));
    }

    #[test]
    fn test_empty_filters() {
        assert!(FilterOptions::default().is_empty());

        let with_tag = FilterOptions {
            tags: vec![TagId::from("diesel")],
            ..FilterOptions::default()
        };
        assert!(!with_tag.is_empty());
    }
}
