//! Listing query extractor.
//!
//! Translates the flat query string of the list endpoint into
//! [`QueryOptions`]. Multi-valued filters arrive comma-separated
//! (`?scales=h0,n&epochs=iii`). Unknown filter values and unknown sort keys
//! are rejected with a validation error rather than silently ignored.

use depot_core::{Control, DepotError, Epoch, LocoType, Scale, TagId};
use depot_service::{FilterOptions, OrderBy, QueryOptions};
use serde::Deserialize;
use std::str::FromStr;

/// Raw query parameters of the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub scales: Option<String>,
    #[serde(default)]
    pub epochs: Option<String>,
    #[serde(default)]
    pub controls: Option<String>,
    #[serde(default)]
    pub loco_types: Option<String>,
    #[serde(default)]
    pub order_by: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

impl ListingQuery {
    /// Parses the raw parameters into service-layer query options.
    pub fn into_options(self) -> Result<QueryOptions, DepotError> {
        let filters = FilterOptions {
            tags: split_values(self.tags.as_deref())
                .map(TagId::from)
                .collect(),
            scales: parse_values(self.scales.as_deref())?,
            epochs: parse_values(self.epochs.as_deref())?,
            controls: parse_values(self.controls.as_deref())?,
            loco_types: parse_values(self.loco_types.as_deref())?,
        };

        let order_by = match self.order_by.as_deref() {
            Some(key) => key.parse()?,
            None => OrderBy::default(),
        };

        Ok(QueryOptions {
            search: self.search,
            filters,
            order_by,
            page: self.page,
        })
    }
}

fn split_values(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn parse_values<T: FromStr<Err = DepotError>>(raw: Option<&str>) -> Result<Vec<T>, DepotError> {
    split_values(raw).map(T::from_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_maps_to_defaults() {
        let options = ListingQuery::default().into_options().unwrap();
        assert_eq!(options, QueryOptions::default());
    }

    #[test]
    fn test_comma_separated_sets() {
        let query = ListingQuery {
            scales: Some("h0,n".to_string()),
            epochs: Some(" iii , iv ".to_string()),
            tags: Some("diesel".to_string()),
            ..ListingQuery::default()
        };
        let options = query.into_options().unwrap();
        assert_eq!(options.filters.scales, vec![Scale::H0, Scale::N]);
        assert_eq!(options.filters.epochs, vec![Epoch::III, Epoch::IV]);
        assert_eq!(options.filters.tags, vec![TagId::from("diesel")]);
    }

    #[test]
    fn test_unknown_filter_value_is_rejected() {
        let query = ListingQuery {
            scales: Some("h0,hh9".to_string()),
            ..ListingQuery::default()
        };
        let err = query.into_options().unwrap_err();
        assert!(err.to_string().contains("hh9"));
    }

    #[test]
    fn test_unknown_order_key_is_rejected() {
        let query = ListingQuery {
            order_by: Some("by_popularity".to_string()),
            ..ListingQuery::default()
        };
        assert!(query.into_options().is_err());
    }

    #[test]
    fn test_order_key_and_control_parse() {
        let query = ListingQuery {
            order_by: Some("price_desc".to_string()),
            controls: Some("digital_sound".to_string()),
            loco_types: Some("steam,electric".to_string()),
            ..ListingQuery::default()
        };
        let options = query.into_options().unwrap();
        assert_eq!(options.order_by, OrderBy::PriceDesc);
        assert_eq!(options.filters.controls, vec![Control::DigitalSound]);
        assert_eq!(
            options.filters.loco_types,
            vec![LocoType::Steam, LocoType::Electric]
        );
    }
}
