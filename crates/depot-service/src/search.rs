//! Search, filter, and ordering over listing rows.
//!
//! These run in memory after mapping and before pagination, so the whole
//! pipeline stays deterministic and testable without a database.

use crate::dto::ListLocomotiveDto;
use crate::query::{FilterOptions, OrderBy};

/// Narrows rows to those matching a free-text search term.
///
/// The term is split on whitespace; each sub-term is matched independently
/// and a row survives when ANY sub-term appears as a case-insensitive
/// substring of the name or the railway company name. A blank or
/// whitespace-only term returns the input unchanged. Relative order is
/// preserved.
#[must_use]
pub fn search(rows: Vec<ListLocomotiveDto>, term: &str) -> Vec<ListLocomotiveDto> {
    let sub_terms: Vec<String> = term
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    if sub_terms.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|row| {
            let name = row.name.to_lowercase();
            let company = row
                .railway_company_name
                .as_deref()
                .map(str::to_lowercase);
            sub_terms.iter().any(|sub| {
                name.contains(sub)
                    || company
                        .as_deref()
                        .is_some_and(|company| company.contains(sub))
            })
        })
        .collect()
}

/// Narrows rows to those matching every non-empty filter set.
///
/// Sets combine conjunctively across fields and disjunctively within a
/// field; an empty set places no constraint on its field. Rows without a
/// tag never match a non-empty tag set. Relative order is preserved.
#[must_use]
pub fn filter(rows: Vec<ListLocomotiveDto>, filters: &FilterOptions) -> Vec<ListLocomotiveDto> {
    if filters.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|row| {
            let tag_matches = filters.tags.is_empty()
                || row
                    .tag
                    .as_ref()
                    .is_some_and(|tag| filters.tags.contains(tag));
            tag_matches
                && (filters.scales.is_empty() || filters.scales.contains(&row.scale))
                && (filters.epochs.is_empty() || filters.epochs.contains(&row.epoch))
                && (filters.controls.is_empty() || filters.controls.contains(&row.control))
                && (filters.loco_types.is_empty() || filters.loco_types.contains(&row.loco_type))
        })
        .collect()
}

/// Sorts rows by the requested key.
///
/// All sorts are stable, so rows that compare equal keep their relative
/// order from the previous stage. Rows without a company name order before
/// rows with one on the company keys.
#[must_use]
pub fn order_by(mut rows: Vec<ListLocomotiveDto>, order: OrderBy) -> Vec<ListLocomotiveDto> {
    match order {
        OrderBy::NameAsc => rows.sort_by(|a, b| a.name.cmp(&b.name)),
        OrderBy::NameDesc => rows.sort_by(|a, b| b.name.cmp(&a.name)),
        OrderBy::PriceAsc => rows.sort_by(|a, b| a.price_cents.cmp(&b.price_cents)),
        OrderBy::PriceDesc => rows.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        OrderBy::CompanyAsc => {
            rows.sort_by(|a, b| a.railway_company_name.cmp(&b.railway_company_name));
        }
        OrderBy::CompanyDesc => {
            rows.sort_by(|a, b| b.railway_company_name.cmp(&a.railway_company_name));
        }
    }
    rows
}
