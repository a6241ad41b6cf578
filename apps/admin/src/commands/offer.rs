//! # Offer Commands
//!
//! Commands behind the offers tab and the offer badge on product cards.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use schoolcart_core::validation::{validate_new_offer, validate_offer_update};
use schoolcart_core::{NewOffer, Offer, OfferKind, OfferUpdate};

use crate::error::ApiError;
use crate::state::OfferState;

/// Offer card for the dashboard.
///
/// The kind-specific fields are spread into optional columns so the whole
/// payload is camelCase; only the ones the offer type uses are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDto {
    pub id: String,
    pub name: String,
    /// `percentage`, `fixed`, `buy-x-get-y` or `bundle`
    pub offer_type: String,
    /// e.g. `Percentage Off`
    pub type_label: String,
    /// e.g. `25% off`, `Buy 2, Get 1 Free`
    pub summary: String,
    pub discount_percent: Option<u32>,
    pub discount_amount_paise: Option<i64>,
    pub min_purchase_paise: Option<i64>,
    pub buy_quantity: Option<u32>,
    pub get_quantity: Option<u32>,
    pub bundle_price_paise: Option<i64>,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub applicable_products: Vec<String>,
}

impl From<Offer> for OfferDto {
    fn from(o: Offer) -> Self {
        let mut dto = OfferDto {
            offer_type: o.kind.tag().to_string(),
            type_label: o.kind.label().to_string(),
            summary: o.kind.to_string(),
            discount_percent: None,
            discount_amount_paise: None,
            min_purchase_paise: o.kind.min_purchase().map(|m| m.paise()),
            buy_quantity: None,
            get_quantity: None,
            bundle_price_paise: None,
            id: o.id,
            name: o.name,
            description: o.description,
            start_date: o.start_date,
            end_date: o.end_date,
            is_active: o.is_active,
            applicable_products: o.applicable_products,
        };

        match o.kind {
            OfferKind::Percentage { percent, .. } => dto.discount_percent = Some(percent),
            OfferKind::Fixed { amount, .. } => dto.discount_amount_paise = Some(amount.paise()),
            OfferKind::BuyXGetY {
                buy_quantity,
                get_quantity,
            } => {
                dto.buy_quantity = Some(buy_quantity);
                dto.get_quantity = Some(get_quantity);
            }
            OfferKind::Bundle { bundle_price } => {
                dto.bundle_price_paise = Some(bundle_price.paise())
            }
        }

        dto
    }
}

impl From<&Offer> for OfferDto {
    fn from(offer: &Offer) -> Self {
        OfferDto::from(offer.clone())
    }
}

pub fn list_offers(offers: &OfferState) -> Vec<OfferDto> {
    debug!("list_offers command");
    offers.with(|store| store.offers().iter().map(OfferDto::from).collect())
}

pub fn list_active_offers(offers: &OfferState) -> Vec<OfferDto> {
    debug!("list_active_offers command");
    offers.with(|store| store.active_offers().into_iter().map(OfferDto::from).collect())
}

/// The offer shown on a product's card, if any. The newest active offer
/// listing the product wins.
pub fn get_offer_for_product(offers: &OfferState, product_id: &str) -> Option<OfferDto> {
    debug!(product_id = %product_id, "get_offer_for_product command");
    offers.with(|store| store.offer_for_product(product_id).map(OfferDto::from))
}

/// Creates an offer from the offer form.
///
/// ## Validation
/// - Name and both dates are required
/// - At least one product is selected
/// - Discount fields match the offer type
pub fn add_offer(offers: &OfferState, new: NewOffer) -> Result<OfferDto, ApiError> {
    debug!(name = %new.name, kind = %new.kind, "add_offer command");

    validate_new_offer(&new)?;
    let offer = offers.with_mut(|store| store.add_offer(new));

    info!(id = %offer.id, name = %offer.name, "Offer created");
    Ok(OfferDto::from(offer))
}

pub fn update_offer(
    offers: &OfferState,
    id: &str,
    update: OfferUpdate,
) -> Result<OfferDto, ApiError> {
    debug!(id = %id, "update_offer command");

    validate_offer_update(&update)?;
    let offer = offers.with_mut(|store| store.update_offer(id, update))?;
    Ok(OfferDto::from(offer))
}

pub fn delete_offer(offers: &OfferState, id: &str) -> Result<OfferDto, ApiError> {
    debug!(id = %id, "delete_offer command");

    let offer = offers.with_mut(|store| store.delete_offer(id))?;

    info!(id = %offer.id, name = %offer.name, "Offer deleted");
    Ok(OfferDto::from(offer))
}

/// Flips an offer between active and inactive.
pub fn toggle_offer_status(offers: &OfferState, id: &str) -> Result<OfferDto, ApiError> {
    debug!(id = %id, "toggle_offer_status command");

    let offer = offers.with_mut(|store| store.toggle_offer_status(id))?;

    info!(id = %offer.id, active = offer.is_active, "Offer toggled");
    Ok(OfferDto::from(offer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use schoolcart_core::Money;
    use schoolcart_store::OfferStore;

    fn seeded() -> OfferState {
        OfferState::new(OfferStore::seeded())
    }

    fn new_offer(products: Vec<String>) -> NewOffer {
        NewOffer {
            name: "Diwali Snacks".to_string(),
            kind: OfferKind::Fixed {
                amount: Money::from_rupees(10),
                min_purchase: Some(Money::from_rupees(50)),
            },
            description: None,
            start_date: "2024-10-25".to_string(),
            end_date: "2024-11-05".to_string(),
            is_active: true,
            applicable_products: products,
        }
    }

    #[test]
    fn test_offer_dto_summary() {
        let dto = get_offer_for_product(&seeded(), "1").unwrap();
        assert_eq!(dto.name, "Notebook Bundle");
        assert_eq!(dto.summary, "Bundle: ₹200.00");
        assert_eq!(dto.type_label, "Bundle Price");
        assert_eq!(dto.bundle_price_paise, Some(20_000));
        assert_eq!(dto.discount_percent, None);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["offerType"], "bundle");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["typeLabel"], "Bundle Price");
        assert_eq!(json["bundlePricePaise"], 20_000);
        assert!(json.get("is_active").is_none());
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_offer_dto_fixed_discount_fields() {
        let offers = seeded();
        let added = add_offer(&offers, new_offer(vec!["9".to_string()])).unwrap();

        assert_eq!(added.offer_type, "fixed");
        assert_eq!(added.discount_amount_paise, Some(1_000));
        assert_eq!(added.min_purchase_paise, Some(5_000));
        assert_eq!(added.bundle_price_paise, None);
        assert_eq!(added.start_date, "2024-10-25");
    }

    #[test]
    fn test_add_offer_requires_products() {
        let offers = seeded();
        let err = add_offer(&offers, new_offer(Vec::new())).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "applicable products is required");
        assert_eq!(list_offers(&offers).len(), 3);
    }

    #[test]
    fn test_new_offer_takes_precedence() {
        let offers = seeded();
        let added = add_offer(&offers, new_offer(vec!["9".to_string(), "1".to_string()])).unwrap();

        assert_eq!(added.summary, "₹10.00 off");
        assert_eq!(get_offer_for_product(&offers, "1").unwrap().id, added.id);
    }

    #[test]
    fn test_toggle_twice() {
        let offers = seeded();
        assert_eq!(list_active_offers(&offers).len(), 2);

        toggle_offer_status(&offers, "1").unwrap();
        assert_eq!(list_active_offers(&offers).len(), 1);

        toggle_offer_status(&offers, "1").unwrap();
        assert_eq!(list_active_offers(&offers).len(), 2);
    }

    #[test]
    fn test_update_rejects_zero_percent() {
        let offers = seeded();
        let update = OfferUpdate {
            kind: Some(OfferKind::Percentage {
                percent: 0,
                min_purchase: None,
            }),
            ..Default::default()
        };

        let err = update_offer(&offers, "1", update).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_delete_unknown_offer() {
        let err = delete_offer(&seeded(), "99").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Offer not found: 99");
    }
}
