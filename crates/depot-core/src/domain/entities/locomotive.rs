//! Locomotive entity, composed from independent field groups.

use super::product::ProductCore;
use super::railway_company::RailwayCompany;
use crate::{Control, DecoderId, Epoch, LocoType, RailwayCompanyId, Scale};
use serde::{Deserialize, Serialize};

/// Fields shared by every scale model item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAttributes {
    pub scale: Scale,
    pub epoch: Epoch,
}

impl Default for ModelAttributes {
    fn default() -> Self {
        Self {
            scale: Scale::H0,
            epoch: Epoch::III,
        }
    }
}

/// Fields shared by every piece of rolling stock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollingStockAttributes {
    /// Model length over buffers, in millimetres.
    pub length_mm: i32,

    /// Total axle count.
    pub num_axles: i16,

    /// Foreign key to the operating company, if assigned.
    pub railway_company_id: Option<RailwayCompanyId>,

    /// Operating company resolved from [`Self::railway_company_id`] at load
    /// time. Absent when the reference is unset or failed to resolve.
    pub railway_company: Option<RailwayCompany>,
}

/// Fields specific to locomotives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocomotiveAttributes {
    pub control: Control,
    pub loco_type: LocoType,

    /// Whether the model has automatic couplers.
    pub auto_coupling: bool,

    /// How many of the axles are driven.
    pub num_driven_axles: i16,

    /// Fitted digital decoder, if any.
    pub digital_decoder: Option<DecoderId>,
}

impl Default for LocomotiveAttributes {
    fn default() -> Self {
        Self {
            control: Control::Analog,
            loco_type: LocoType::Diesel,
            auto_coupling: false,
            num_driven_axles: 0,
            digital_decoder: None,
        }
    }
}

/// A locomotive: the concrete leaf record of the catalog.
///
/// Composed from the product, model, rolling-stock, and locomotive field
/// groups instead of a virtual-dispatch hierarchy. Mapper functions operate
/// on the individual groups, so they remain reusable for future leaf types
/// (wagons, carriages) without any trait machinery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Locomotive {
    pub product: ProductCore,
    pub model: ModelAttributes,
    pub rolling_stock: RollingStockAttributes,
    pub loco: LocomotiveAttributes,
}

impl Locomotive {
    /// Name of the operating railway company, if the reference resolved.
    #[must_use]
    pub fn railway_company_name(&self) -> Option<&str> {
        self.rolling_stock
            .railway_company
            .as_ref()
            .map(|c| c.name.as_str())
    }

    /// Country name of the operating company, if both references resolved.
    #[must_use]
    pub fn railway_company_country_name(&self) -> Option<&str> {
        self.rolling_stock
            .railway_company
            .as_ref()
            .and_then(|c| c.country.as_ref())
            .map(|country| country.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Country, CountryId, RailwayCompanyId};

    #[test]
    fn test_company_accessors_with_unresolved_references() {
        let locomotive = Locomotive::default();
        assert!(locomotive.railway_company_name().is_none());
        assert!(locomotive.railway_company_country_name().is_none());
    }

    #[test]
    fn test_company_accessors_with_resolved_references() {
        let mut locomotive = Locomotive::default();
        locomotive.rolling_stock.railway_company = Some(RailwayCompany {
            id: RailwayCompanyId::new(1),
            name: "DB".to_string(),
            country: Some(Country {
                id: CountryId::new(1),
                name: "Germany".to_string(),
            }),
        });

        assert_eq!(locomotive.railway_company_name(), Some("DB"));
        assert_eq!(locomotive.railway_company_country_name(), Some("Germany"));
    }

    #[test]
    fn test_company_without_country() {
        let mut locomotive = Locomotive::default();
        locomotive.rolling_stock.railway_company = Some(RailwayCompany {
            id: RailwayCompanyId::new(2),
            name: "UP".to_string(),
            country: None,
        });

        assert_eq!(locomotive.railway_company_name(), Some("UP"));
        assert!(locomotive.railway_company_country_name().is_none());
    }
}
