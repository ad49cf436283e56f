//! MySQL locomotive repository implementation.

use crate::{pool::DatabasePoolInterface, traits::LocomotiveRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use depot_core::{
    Country, CountryId, DecoderId, DepotError, DepotResult, Image, ImageId, Locomotive,
    LocomotiveAttributes, ModelAttributes, ProductCore, ProductId, RailwayCompany,
    RailwayCompanyId, RollingStockAttributes, StockStatus, TagId,
};
use shaku::Component;
use sqlx::FromRow;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// MySQL locomotive repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = LocomotiveRepository)]
pub struct MySqlLocomotiveRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlLocomotiveRepository {
    /// Creates a new MySQL locomotive repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    /// Loads the image lists for the given products, keyed by product ID.
    async fn load_images(&self, product_ids: &[i64]) -> DepotResult<HashMap<i64, Vec<Image>>> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        // sqlx has no array binding for MySQL, so the IN list is expanded.
        let placeholders = vec!["?"; product_ids.len()].join(", ");
        let sql = format!(
            "SELECT image_id, url, product_id \
             FROM images \
             WHERE product_id IN ({}) \
             ORDER BY product_id, position, image_id",
            placeholders
        );

        let mut query = sqlx::query_as::<_, ImageRow>(&sql);
        for id in product_ids {
            query = query.bind(id);
        }

        let rows = query.fetch_all(self.pool.inner()).await?;

        let mut by_product: HashMap<i64, Vec<Image>> = HashMap::new();
        for row in rows {
            if let Some(product_id) = row.product_id {
                by_product
                    .entry(product_id)
                    .or_default()
                    .push(Image {
                        id: Some(ImageId::new(row.image_id)),
                        url: row.url,
                    });
            }
        }
        Ok(by_product)
    }
}

const SELECT_LOCOMOTIVE: &str = "\
    SELECT l.product_id, l.name, l.description, l.price_cents, l.tag_id, \
           l.scale, l.epoch, l.length_mm, l.num_axles, l.railway_company_id, \
           l.control, l.loco_type, l.auto_coupling, l.num_driven_axles, \
           l.digital_decoder_id, \
           s.amount AS stock_amount, s.next_stock, \
           c.name AS company_name, c.country_id, n.name AS country_name \
    FROM locomotives l \
    LEFT JOIN stock_status s ON s.product_id = l.product_id \
    LEFT JOIN railway_companies c ON c.railway_company_id = l.railway_company_id \
    LEFT JOIN countries n ON n.country_id = c.country_id";

/// Database row representation of a locomotive with joined relationships.
#[derive(Debug, FromRow)]
struct LocomotiveRow {
    product_id: i64,
    name: String,
    description: String,
    price_cents: i64,
    tag_id: Option<String>,
    scale: String,
    epoch: String,
    length_mm: i32,
    num_axles: i16,
    railway_company_id: Option<i64>,
    control: String,
    loco_type: String,
    auto_coupling: bool,
    num_driven_axles: i16,
    digital_decoder_id: Option<i64>,
    stock_amount: Option<i32>,
    next_stock: Option<DateTime<Utc>>,
    company_name: Option<String>,
    country_id: Option<i64>,
    country_name: Option<String>,
}

#[derive(Debug, FromRow)]
struct ImageRow {
    image_id: i64,
    url: Option<String>,
    product_id: Option<i64>,
}

impl TryFrom<LocomotiveRow> for Locomotive {
    type Error = DepotError;

    fn try_from(row: LocomotiveRow) -> Result<Self, Self::Error> {
        let railway_company = match (row.railway_company_id, row.company_name) {
            (Some(id), Some(name)) => Some(RailwayCompany {
                id: RailwayCompanyId::new(id),
                name,
                country: match (row.country_id, row.country_name) {
                    (Some(country_id), Some(country_name)) => Some(Country {
                        id: CountryId::new(country_id),
                        name: country_name,
                    }),
                    _ => None,
                },
            }),
            // FK set but the join produced no company row; surface as absent.
            _ => None,
        };

        Ok(Locomotive {
            product: ProductCore {
                id: ProductId::new(row.product_id),
                name: row.name,
                description: row.description,
                price_cents: row.price_cents,
                tag: row.tag_id.map(TagId::from),
                stock_status: row.stock_amount.map(|amount| StockStatus {
                    amount,
                    next_stock: row.next_stock,
                }),
                images: Vec::new(),
            },
            model: ModelAttributes {
                scale: row.scale.parse()?,
                epoch: row.epoch.parse()?,
            },
            rolling_stock: RollingStockAttributes {
                length_mm: row.length_mm,
                num_axles: row.num_axles,
                railway_company_id: row.railway_company_id.map(RailwayCompanyId::new),
                railway_company,
            },
            loco: LocomotiveAttributes {
                control: row.control.parse()?,
                loco_type: row.loco_type.parse()?,
                auto_coupling: row.auto_coupling,
                num_driven_axles: row.num_driven_axles,
                digital_decoder: row.digital_decoder_id.map(DecoderId::new),
            },
        })
    }
}

#[async_trait]
impl LocomotiveRepository for MySqlLocomotiveRepository {
    async fn find_by_id(&self, id: ProductId) -> DepotResult<Option<Locomotive>> {
        debug!("Finding locomotive by id: {}", id);

        let sql = format!("{} WHERE l.product_id = ?", SELECT_LOCOMOTIVE);
        let row = sqlx::query_as::<_, LocomotiveRow>(&sql)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut locomotive = Locomotive::try_from(row)?;
        let mut images = self.load_images(&[id.into_inner()]).await?;
        locomotive.product.images = images.remove(&id.into_inner()).unwrap_or_default();

        Ok(Some(locomotive))
    }

    async fn find_all(&self) -> DepotResult<Vec<Locomotive>> {
        debug!("Finding all locomotives");

        let sql = format!("{} ORDER BY l.product_id", SELECT_LOCOMOTIVE);
        let rows = sqlx::query_as::<_, LocomotiveRow>(&sql)
            .fetch_all(self.pool.inner())
            .await?;

        let mut locomotives = rows
            .into_iter()
            .map(Locomotive::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let product_ids: Vec<i64> = locomotives
            .iter()
            .map(|l| l.product.id.into_inner())
            .collect();
        let mut images = self.load_images(&product_ids).await?;

        for locomotive in &mut locomotives {
            locomotive.product.images = images
                .remove(&locomotive.product.id.into_inner())
                .unwrap_or_default();
        }

        Ok(locomotives)
    }

    async fn insert(&self, locomotive: &Locomotive) -> DepotResult<Locomotive> {
        debug!("Inserting locomotive: {}", locomotive.product.name);

        let mut tx = self.pool.inner().begin().await?;

        // The tag table is keyed by label; make sure the label exists before
        // the FK is written.
        if let Some(tag) = &locomotive.product.tag {
            sqlx::query("INSERT IGNORE INTO tags (tag_id) VALUES (?)")
                .bind(tag.as_str())
                .execute(&mut *tx)
                .await?;
        }

        let result = sqlx::query(
            "INSERT INTO locomotives \
             (name, description, price_cents, tag_id, scale, epoch, length_mm, \
              num_axles, railway_company_id, control, loco_type, auto_coupling, \
              num_driven_axles, digital_decoder_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&locomotive.product.name)
        .bind(&locomotive.product.description)
        .bind(locomotive.product.price_cents)
        .bind(locomotive.product.tag.as_ref().map(TagId::as_str))
        .bind(locomotive.model.scale.as_str())
        .bind(locomotive.model.epoch.as_str())
        .bind(locomotive.rolling_stock.length_mm)
        .bind(locomotive.rolling_stock.num_axles)
        .bind(
            locomotive
                .rolling_stock
                .railway_company_id
                .map(RailwayCompanyId::into_inner),
        )
        .bind(locomotive.loco.control.as_str())
        .bind(locomotive.loco.loco_type.as_str())
        .bind(locomotive.loco.auto_coupling)
        .bind(locomotive.loco.num_driven_axles)
        .bind(locomotive.loco.digital_decoder.map(DecoderId::into_inner))
        .execute(&mut *tx)
        .await?;

        let product_id = result.last_insert_id() as i64;

        if let Some(stock) = &locomotive.product.stock_status {
            sqlx::query("INSERT INTO stock_status (product_id, amount, next_stock) VALUES (?, ?, ?)")
                .bind(product_id)
                .bind(stock.amount)
                .bind(stock.next_stock)
                .execute(&mut *tx)
                .await?;
        }

        for (position, image) in locomotive.product.images.iter().enumerate() {
            match (image.id, &image.url) {
                // Attach-by-id: claim the existing row for this product.
                (Some(image_id), _) => {
                    sqlx::query("UPDATE images SET product_id = ?, position = ? WHERE image_id = ?")
                        .bind(product_id)
                        .bind(position as i32)
                        .bind(image_id.into_inner())
                        .execute(&mut *tx)
                        .await?;
                }
                // New upload: store the URL.
                (None, Some(url)) => {
                    sqlx::query("INSERT INTO images (url, product_id, position) VALUES (?, ?, ?)")
                        .bind(url)
                        .bind(product_id)
                        .bind(position as i32)
                        .execute(&mut *tx)
                        .await?;
                }
                (None, None) => {
                    return Err(DepotError::validation(
                        "Image must carry either an id or a url",
                    ));
                }
            }
        }

        tx.commit().await?;

        self.find_by_id(ProductId::new(product_id))
            .await?
            .ok_or_else(|| DepotError::internal("Inserted locomotive not found on re-read"))
    }

    async fn update(&self, locomotive: &Locomotive) -> DepotResult<Locomotive> {
        debug!("Updating locomotive: {}", locomotive.product.id);

        // Stock status and images are managed through their own write paths;
        // this updates the scalar columns only.
        let result = sqlx::query(
            "UPDATE locomotives SET \
             name = ?, description = ?, price_cents = ?, tag_id = ?, \
             scale = ?, epoch = ?, length_mm = ?, num_axles = ?, \
             railway_company_id = ?, control = ?, loco_type = ?, \
             auto_coupling = ?, num_driven_axles = ?, digital_decoder_id = ? \
             WHERE product_id = ?",
        )
        .bind(&locomotive.product.name)
        .bind(&locomotive.product.description)
        .bind(locomotive.product.price_cents)
        .bind(locomotive.product.tag.as_ref().map(TagId::as_str))
        .bind(locomotive.model.scale.as_str())
        .bind(locomotive.model.epoch.as_str())
        .bind(locomotive.rolling_stock.length_mm)
        .bind(locomotive.rolling_stock.num_axles)
        .bind(
            locomotive
                .rolling_stock
                .railway_company_id
                .map(RailwayCompanyId::into_inner),
        )
        .bind(locomotive.loco.control.as_str())
        .bind(locomotive.loco.loco_type.as_str())
        .bind(locomotive.loco.auto_coupling)
        .bind(locomotive.loco.num_driven_axles)
        .bind(locomotive.loco.digital_decoder.map(DecoderId::into_inner))
        .bind(locomotive.product.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(DepotError::not_found("Locomotive", locomotive.product.id));
        }

        self.find_by_id(locomotive.product.id)
            .await?
            .ok_or_else(|| DepotError::internal("Updated locomotive not found on re-read"))
    }

    async fn delete(&self, id: ProductId) -> DepotResult<bool> {
        debug!("Deleting locomotive: {}", id);

        let result = sqlx::query("DELETE FROM locomotives WHERE product_id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: ProductId) -> DepotResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM locomotives WHERE product_id = ?")
                .bind(id.into_inner())
                .fetch_one(self.pool.inner())
                .await?;

        Ok(count > 0)
    }

    async fn list_tags(&self) -> DepotResult<Vec<TagId>> {
        debug!("Listing tags");

        let tags: Vec<String> = sqlx::query_scalar("SELECT tag_id FROM tags ORDER BY tag_id")
            .fetch_all(self.pool.inner())
            .await?;

        Ok(tags.into_iter().map(TagId::from).collect())
    }
}
