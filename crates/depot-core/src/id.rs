//! Typed ID wrappers for domain entities.
//!
//! Catalog rows use database-assigned integer keys, so the wrappers here are
//! thin newtypes over `i64` (and `String` for tags, which are keyed by their
//! label). A zero ID means "not yet persisted".

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw database key.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the inner key.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Returns true if this ID has not been assigned by the database yet.
            #[must_use]
            pub const fn is_unassigned(self) -> bool {
                self.0 == 0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

numeric_id! {
    /// A strongly-typed wrapper for product IDs (locomotives included).
    ProductId
}

numeric_id! {
    /// A strongly-typed wrapper for image IDs.
    ImageId
}

numeric_id! {
    /// A strongly-typed wrapper for railway company IDs.
    RailwayCompanyId
}

numeric_id! {
    /// A strongly-typed wrapper for country IDs.
    CountryId
}

numeric_id! {
    /// A strongly-typed wrapper for digital decoder IDs.
    DecoderId
}

/// A strongly-typed wrapper for tag IDs.
///
/// Tags are keyed by their label, e.g. `"diesel"` or `"starter-set"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct TagId(pub String);

impl TagId {
    /// Creates a new tag ID.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the tag label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TagId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TagId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_roundtrip() {
        let id = ProductId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(ProductId::from(42), id);
    }

    #[test]
    fn test_unassigned_id() {
        assert!(ProductId::default().is_unassigned());
        assert!(!ProductId::new(1).is_unassigned());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ImageId::new(7).to_string(), "7");
        assert_eq!(TagId::from("diesel").to_string(), "diesel");
    }

    #[test]
    fn test_tag_id_from_str() {
        let tag = TagId::from("steam");
        assert_eq!(tag.as_str(), "steam");
    }
}
