//! Product field group and its owned records.

use crate::{ImageId, ProductId, TagId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fields every catalog product carries, regardless of kind.
///
/// Concrete products (see [`super::Locomotive`]) are composed from field
/// groups rather than layered through an inheritance chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProductCore {
    /// Database-assigned identifier. Zero until persisted.
    pub id: ProductId,

    /// Display name, e.g. "BR 218".
    #[validate(custom(function = crate::validation::rules::not_blank))]
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Price in minor currency units (cents).
    #[validate(range(min = 0))]
    pub price_cents: i64,

    /// Categorical tag used for filtering. Absent when the product has not
    /// been tagged yet.
    pub tag: Option<TagId>,

    /// Stock record. Absent means "no stock tracked", which is distinct
    /// from a record with a zero amount.
    pub stock_status: Option<StockStatus>,

    /// Attached images, in display order.
    pub images: Vec<Image>,
}

/// Quantity on hand plus the next expected restock, owned 1:1 by a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockStatus {
    /// Units currently in stock.
    pub amount: i32,

    /// When the next delivery is expected, if known.
    pub next_stock: Option<DateTime<Utc>>,
}

/// A product image.
///
/// Images exist in two attachment states: a reference to an already stored
/// row (`id` set, `url` absent) and a newly supplied upload (`url` set, `id`
/// absent until the database assigns one). A fully loaded image has both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Database key. Absent for images not yet persisted.
    pub id: Option<ImageId>,

    /// Source URL. Absent for attach-by-id references.
    pub url: Option<String>,
}

impl Image {
    /// An attach-by-id reference to an existing image row.
    #[must_use]
    pub const fn by_id(id: ImageId) -> Self {
        Self {
            id: Some(id),
            url: None,
        }
    }

    /// A new image carrying its URL, not yet persisted.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            id: None,
            url: Some(url.into()),
        }
    }

    /// A fully loaded image row.
    #[must_use]
    pub fn loaded(id: ImageId, url: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            url: Some(url.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_product_name_must_not_be_blank() {
        let product = ProductCore {
            name: "  ".to_string(),
            ..ProductCore::default()
        };
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_product_price_must_not_be_negative() {
        let product = ProductCore {
            name: "BR 218".to_string(),
            price_cents: -1,
            ..ProductCore::default()
        };
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_image_attachment_states() {
        let reference = Image::by_id(ImageId::new(5));
        assert_eq!(reference.id, Some(ImageId::new(5)));
        assert!(reference.url.is_none());

        let fresh = Image::with_url("https://img.example/br218.jpg");
        assert!(fresh.id.is_none());
        assert_eq!(fresh.url.as_deref(), Some("https://img.example/br218.jpg"));
    }
}
