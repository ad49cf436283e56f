//! Railway company and country records.

use crate::{CountryId, RailwayCompanyId};
use serde::{Deserialize, Serialize};

/// A prototype railway operator, referenced (not owned) by rolling stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailwayCompany {
    pub id: RailwayCompanyId,

    /// Company name, e.g. "DB" or "SBB".
    pub name: String,

    /// Home country. Absent when the reference did not resolve.
    pub country: Option<Country>,
}

/// A country referenced by railway companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
}
