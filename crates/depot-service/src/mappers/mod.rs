//! Entity-DTO mappers.
//!
//! Pure, side-effect-free projections between the catalog entities and the
//! transfer shapes. The apply functions operate on one field group each, so
//! a future leaf type (wagons, carriages) reuses them without any trait
//! machinery. None of these retain references beyond the call, and absent
//! relationships map to `None` rather than a sentinel.

use crate::dto::{
    AddLocomotiveDto, DetailsLocomotiveDto, EditLocomotiveDto, ImageDto, ListLocomotiveDto,
    StockStatusDto,
};
use depot_core::{
    Image, Locomotive, LocomotiveAttributes, ModelAttributes, ProductCore,
    RollingStockAttributes, StockStatus,
};

/// Maps an image collection to its read shape.
///
/// `None` (no images attached yet) maps to an empty list, never an absent
/// one. Order is preserved.
#[must_use]
pub fn map_images(images: Option<&[Image]>) -> Vec<ImageDto> {
    images
        .unwrap_or_default()
        .iter()
        .map(|image| ImageDto {
            url: image.url.clone(),
        })
        .collect()
}

/// Maps a stock record to its read shape.
///
/// An absent record stays absent, keeping "no stock tracked" distinct from
/// "zero stock". Fields are copied verbatim.
#[must_use]
pub fn map_stock_status(stock_status: Option<&StockStatus>) -> Option<StockStatusDto> {
    stock_status.map(|stock| StockStatusDto {
        amount: stock.amount,
        next_stock: stock.next_stock,
    })
}

/// Copies the product field group from an add request.
///
/// The image collection is rebuilt from scratch: reused image references in
/// their supplied order, followed by new images in their supplied order. The
/// stock record is freshly constructed from the request.
pub fn apply_product_properties(product: &mut ProductCore, dto: &AddLocomotiveDto) {
    product.name = dto.name.clone();
    product.description = dto.description.clone();
    product.price_cents = dto.price_cents;
    product.tag = dto.tag.clone();
    product.stock_status = Some(StockStatus {
        amount: dto.stock_status.amount,
        next_stock: dto.stock_status.next_stock,
    });

    let mut images = Vec::with_capacity(dto.reused_images.len() + dto.added_images.len());
    images.extend(dto.reused_images.iter().copied().map(Image::by_id));
    images.extend(
        dto.added_images
            .iter()
            .map(|image| Image::with_url(&image.url)),
    );
    product.images = images;
}

/// Copies the model field group from an add request.
pub fn apply_model_item_properties(model: &mut ModelAttributes, dto: &AddLocomotiveDto) {
    model.scale = dto.scale;
    model.epoch = dto.epoch;
}

/// Copies the rolling-stock field group from an add request.
pub fn apply_rolling_stock_properties(
    rolling_stock: &mut RollingStockAttributes,
    dto: &AddLocomotiveDto,
) {
    rolling_stock.length_mm = dto.length_mm;
    rolling_stock.num_axles = dto.num_axles;
    rolling_stock.railway_company_id = dto.railway_company;
}

/// Copies the locomotive field group from an add request.
pub fn apply_locomotive_properties(loco: &mut LocomotiveAttributes, dto: &AddLocomotiveDto) {
    loco.control = dto.control;
    loco.loco_type = dto.loco_type;
    loco.auto_coupling = dto.auto_coupling;
    loco.num_driven_axles = dto.num_driven_axles;
    loco.digital_decoder = dto.digital_decoder;
}

/// Populates a locomotive from an add request, group by group.
pub fn apply_add_properties(locomotive: &mut Locomotive, dto: &AddLocomotiveDto) {
    apply_product_properties(&mut locomotive.product, dto);
    apply_model_item_properties(&mut locomotive.model, dto);
    apply_rolling_stock_properties(&mut locomotive.rolling_stock, dto);
    apply_locomotive_properties(&mut locomotive.loco, dto);
}

/// Applies an edit request to a locomotive.
///
/// Edits are partial by design: only the identifier and the
/// locomotive-specific fields change. Images, stock status, price, and name
/// are left untouched, unlike the add path.
pub fn apply_edit_locomotive_properties(locomotive: &mut Locomotive, dto: &EditLocomotiveDto) {
    locomotive.product.id = dto.id;
    locomotive.loco.control = dto.control;
    locomotive.loco.loco_type = dto.loco_type;
    locomotive.loco.auto_coupling = dto.auto_coupling;
    locomotive.loco.num_driven_axles = dto.num_driven_axles;
    locomotive.loco.digital_decoder = dto.digital_decoder;
}

/// Flattens a locomotive into its listing row.
///
/// Total over its input: an unresolved company reference yields an absent
/// company name instead of an error, since list rows may reference companies
/// that fail to join.
#[must_use]
pub fn to_list_dto(locomotive: &Locomotive) -> ListLocomotiveDto {
    ListLocomotiveDto {
        id: locomotive.product.id,
        name: locomotive.product.name.clone(),
        price_cents: locomotive.product.price_cents,
        images: map_images(Some(&locomotive.product.images)),
        tag: locomotive.product.tag.clone(),
        stock_status: map_stock_status(locomotive.product.stock_status.as_ref()),
        scale: locomotive.model.scale,
        epoch: locomotive.model.epoch,
        railway_company_name: locomotive.railway_company_name().map(str::to_string),
        control: locomotive.loco.control,
        loco_type: locomotive.loco.loco_type,
    }
}

/// Flattens a locomotive into its detail projection.
///
/// Tag and company-derived fields are optional; a locomotive with no
/// assigned tag or company maps without failing.
#[must_use]
pub fn to_details_dto(locomotive: &Locomotive) -> DetailsLocomotiveDto {
    DetailsLocomotiveDto {
        id: locomotive.product.id,
        name: locomotive.product.name.clone(),
        description: locomotive.product.description.clone(),
        price_cents: locomotive.product.price_cents,
        images: map_images(Some(&locomotive.product.images)),
        tag: locomotive.product.tag.clone(),
        stock_status: map_stock_status(locomotive.product.stock_status.as_ref()),
        scale: locomotive.model.scale,
        epoch: locomotive.model.epoch,
        length_mm: locomotive.rolling_stock.length_mm,
        num_axles: locomotive.rolling_stock.num_axles,
        railway_company_name: locomotive.railway_company_name().map(str::to_string),
        railway_company_country_name: locomotive
            .railway_company_country_name()
            .map(str::to_string),
        control: locomotive.loco.control,
        loco_type: locomotive.loco.loco_type,
        auto_coupling: locomotive.loco.auto_coupling,
        num_driven_axles: locomotive.loco.num_driven_axles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::AddImageDto;
    use chrono::{TimeZone, Utc};
    use depot_core::{
        Control, Country, CountryId, Epoch, ImageId, LocoType, RailwayCompany, RailwayCompanyId,
        Scale, TagId,
    };

    fn sample_add_dto() -> AddLocomotiveDto {
        AddLocomotiveDto {
            name: "BR 218".to_string(),
            description: "Four-axle diesel-hydraulic".to_string(),
            price_cents: 24_999,
            tag: Some(TagId::from("diesel")),
            stock_status: StockStatusDto {
                amount: 5,
                next_stock: Some(Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap()),
            },
            reused_images: vec![ImageId::new(11), ImageId::new(12)],
            added_images: vec![AddImageDto {
                url: "https://img.example/br218.jpg".to_string(),
            }],
            scale: Scale::H0,
            epoch: Epoch::IV,
            length_mm: 188,
            num_axles: 4,
            railway_company: Some(RailwayCompanyId::new(1)),
            control: Control::DigitalSound,
            loco_type: LocoType::Diesel,
            auto_coupling: true,
            num_driven_axles: 4,
            digital_decoder: None,
        }
    }

    fn locomotive_with_company() -> Locomotive {
        let mut locomotive = Locomotive::default();
        locomotive.product.name = "BR 110".to_string();
        locomotive.rolling_stock.railway_company = Some(RailwayCompany {
            id: RailwayCompanyId::new(1),
            name: "DB".to_string(),
            country: Some(Country {
                id: CountryId::new(1),
                name: "Germany".to_string(),
            }),
        });
        locomotive
    }

    #[test]
    fn test_map_images_absent_yields_empty() {
        assert!(map_images(None).is_empty());
    }

    #[test]
    fn test_map_images_preserves_order() {
        let images = vec![
            Image::loaded(ImageId::new(1), "https://img.example/a.jpg"),
            Image::loaded(ImageId::new(2), "https://img.example/b.jpg"),
        ];
        let dtos = map_images(Some(&images));
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].url.as_deref(), Some("https://img.example/a.jpg"));
        assert_eq!(dtos[1].url.as_deref(), Some("https://img.example/b.jpg"));
    }

    #[test]
    fn test_map_stock_status_absent_stays_absent() {
        assert_eq!(map_stock_status(None), None);
    }

    #[test]
    fn test_map_stock_status_copies_verbatim() {
        let date = Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap();
        let stock = StockStatus {
            amount: 5,
            next_stock: Some(date),
        };
        let dto = map_stock_status(Some(&stock)).unwrap();
        assert_eq!(dto.amount, 5);
        assert_eq!(dto.next_stock, Some(date));
    }

    #[test]
    fn test_add_then_details_round_trip() {
        let dto = sample_add_dto();
        let mut locomotive = Locomotive::default();
        apply_add_properties(&mut locomotive, &dto);

        let details = to_details_dto(&locomotive);
        assert_eq!(details.name, "BR 218");
        assert_eq!(details.description, "Four-axle diesel-hydraulic");
        assert_eq!(details.price_cents, 24_999);
        assert_eq!(details.scale, Scale::H0);
        assert_eq!(details.epoch, Epoch::IV);
        assert_eq!(details.stock_status.unwrap().amount, 5);
    }

    #[test]
    fn test_add_rebuilds_images_reused_first_then_new() {
        let dto = sample_add_dto();
        let mut locomotive = Locomotive::default();
        locomotive.product.images = vec![Image::with_url("https://img.example/stale.jpg")];

        apply_add_properties(&mut locomotive, &dto);

        let images = &locomotive.product.images;
        assert_eq!(images.len(), 3);
        assert_eq!(images[0], Image::by_id(ImageId::new(11)));
        assert_eq!(images[1], Image::by_id(ImageId::new(12)));
        assert_eq!(images[2], Image::with_url("https://img.example/br218.jpg"));

        // Reused references surface without a URL; the new upload keeps its.
        let details = to_details_dto(&locomotive);
        assert_eq!(details.images[0].url, None);
        assert_eq!(details.images[1].url, None);
        assert_eq!(
            details.images[2].url.as_deref(),
            Some("https://img.example/br218.jpg")
        );
    }

    #[test]
    fn test_edit_touches_only_locomotive_fields() {
        let mut locomotive = Locomotive::default();
        apply_add_properties(&mut locomotive, &sample_add_dto());
        let images_before = locomotive.product.images.clone();
        let stock_before = locomotive.product.stock_status;

        let edit = EditLocomotiveDto {
            id: depot_core::ProductId::new(7),
            control: Control::Analog,
            loco_type: LocoType::Electric,
            auto_coupling: false,
            num_driven_axles: 2,
            digital_decoder: Some(depot_core::DecoderId::new(3)),
        };
        apply_edit_locomotive_properties(&mut locomotive, &edit);

        assert_eq!(locomotive.product.id, depot_core::ProductId::new(7));
        assert_eq!(locomotive.loco.control, Control::Analog);
        assert_eq!(locomotive.loco.loco_type, LocoType::Electric);
        assert_eq!(locomotive.loco.num_driven_axles, 2);

        // Partial update: everything outside the locomotive group is untouched.
        assert_eq!(locomotive.product.name, "BR 218");
        assert_eq!(locomotive.product.price_cents, 24_999);
        assert_eq!(locomotive.product.images, images_before);
        assert_eq!(locomotive.product.stock_status, stock_before);
    }

    #[test]
    fn test_list_dto_with_resolved_company() {
        let locomotive = locomotive_with_company();
        let row = to_list_dto(&locomotive);
        assert_eq!(row.railway_company_name.as_deref(), Some("DB"));
    }

    #[test]
    fn test_list_dto_tolerates_missing_company() {
        let row = to_list_dto(&Locomotive::default());
        assert_eq!(row.railway_company_name, None);
    }

    #[test]
    fn test_details_dto_tolerates_missing_tag_and_company() {
        let details = to_details_dto(&Locomotive::default());
        assert_eq!(details.tag, None);
        assert_eq!(details.railway_company_name, None);
        assert_eq!(details.railway_company_country_name, None);
    }

    #[test]
    fn test_details_dto_resolves_country_name() {
        let details = to_details_dto(&locomotive_with_company());
        assert_eq!(details.railway_company_name.as_deref(), Some("DB"));
        assert_eq!(
            details.railway_company_country_name.as_deref(),
            Some("Germany")
        );
    }
}
