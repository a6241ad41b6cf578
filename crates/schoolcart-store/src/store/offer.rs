//! # Offer Store
//!
//! Promotional offers and the lookup from a product to the offer that
//! discounts it.
//!
//! ## Choosing an Offer
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  offer_for_product("1")                                                │
//! │                                                                         │
//! │   #1 Back to School Sale   active   [1, 2, 3]   ← matches              │
//! │   #2 Notebook Bundle       active   [1]         ← matches, newer: WINS │
//! │   #3 Buy 2 Get 1 Free      inactive [2]                                │
//! │                                                                         │
//! │  Offers are appended on creation and never reordered, so the newest   │
//! │  matching offer is the last match in collection order.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Product ids in `applicable_products` are not checked against the catalog.
//! An offer may keep listing a product that has since been deleted.

use tracing::debug;

use schoolcart_core::{CoreError, CoreResult, NewOffer, Offer, OfferUpdate};

use super::new_id;
use crate::seed;

/// Store for promotional offers.
#[derive(Debug, Clone, Default)]
pub struct OfferStore {
    offers: Vec<Offer>,
}

impl OfferStore {
    pub fn new() -> Self {
        OfferStore::default()
    }

    /// Creates a store holding the dashboard's three seed offers.
    pub fn seeded() -> Self {
        OfferStore {
            offers: seed::offers(),
        }
    }

    /// All offers, oldest first.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn get(&self, id: &str) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == id)
    }

    pub fn active_offers(&self) -> Vec<&Offer> {
        self.offers.iter().filter(|o| o.is_active).collect()
    }

    /// The newest active offer listing `product_id`, if any.
    pub fn offer_for_product(&self, product_id: &str) -> Option<&Offer> {
        self.offers.iter().rev().find(|o| o.applies_to(product_id))
    }

    /// Adds an offer under a fresh id and returns it.
    pub fn add_offer(&mut self, new: NewOffer) -> Offer {
        let offer = Offer::from_new(new_id(), new);

        debug!(
            id = %offer.id,
            name = %offer.name,
            kind = %offer.kind,
            products = offer.applicable_products.len(),
            "Adding offer"
        );

        self.offers.push(offer.clone());
        offer
    }

    /// Merges `update` into the offer with `id`.
    ///
    /// ## Errors
    /// [`CoreError::OfferNotFound`] if no offer has this id.
    pub fn update_offer(&mut self, id: &str, update: OfferUpdate) -> CoreResult<Offer> {
        let offer = self.find_mut(id)?;
        offer.apply_update(update);

        debug!(id = %offer.id, active = offer.is_active, "Updated offer");
        Ok(offer.clone())
    }

    pub fn delete_offer(&mut self, id: &str) -> CoreResult<Offer> {
        let index = self
            .offers
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| CoreError::OfferNotFound(id.to_string()))?;

        let offer = self.offers.remove(index);
        debug!(id = %offer.id, name = %offer.name, "Deleted offer");
        Ok(offer)
    }

    /// Flips `is_active` on the offer with `id`. Nothing else changes.
    pub fn toggle_offer_status(&mut self, id: &str) -> CoreResult<Offer> {
        let offer = self.find_mut(id)?;
        offer.is_active = !offer.is_active;

        debug!(id = %offer.id, active = offer.is_active, "Toggled offer");
        Ok(offer.clone())
    }

    fn find_mut(&mut self, id: &str) -> CoreResult<&mut Offer> {
        self.offers
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::OfferNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductStore;
    use schoolcart_core::{Money, OfferKind};

    fn flat_offer(name: &str, products: &[&str]) -> NewOffer {
        NewOffer {
            name: name.to_string(),
            kind: OfferKind::Fixed {
                amount: Money::from_rupees(10),
                min_purchase: None,
            },
            description: None,
            start_date: "2024-07-01".to_string(),
            end_date: "2024-07-31".to_string(),
            is_active: true,
            applicable_products: products.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_active_offers() {
        let store = OfferStore::seeded();
        let names: Vec<_> = store.active_offers().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Back to School Sale", "Notebook Bundle"]);
    }

    #[test]
    fn test_newest_matching_offer_wins() {
        let mut store = OfferStore::seeded();
        assert_eq!(store.offer_for_product("1").unwrap().id, "2");
        assert_eq!(store.offer_for_product("3").unwrap().id, "1");

        let added = store.add_offer(flat_offer("Monsoon Deal", &["3"]));
        assert_eq!(store.offer_for_product("3").unwrap().id, added.id);

        // The inactive offer is skipped.
        assert_eq!(store.offer_for_product("2").unwrap().id, "1");
        assert!(store.offer_for_product("9").is_none());
    }

    #[test]
    fn test_offer_survives_product_deletion() {
        let mut products = ProductStore::seeded();
        let offers = OfferStore::seeded();

        products.delete_product("3").unwrap();
        let offer = offers.offer_for_product("3").unwrap();
        assert_eq!(offer.name, "Back to School Sale");
        assert!(offer.applicable_products.contains(&"3".to_string()));
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let mut store = OfferStore::seeded();
        let before = store.get("3").unwrap().clone();

        let toggled = store.toggle_offer_status("3").unwrap();
        assert!(toggled.is_active);
        assert_eq!(store.offer_for_product("2").unwrap().id, "3");

        store.toggle_offer_status("3").unwrap();
        assert_eq!(store.get("3"), Some(&before));
    }

    #[test]
    fn test_update_offer() {
        let mut store = OfferStore::seeded();
        let update = OfferUpdate {
            kind: Some(OfferKind::Percentage {
                percent: 30,
                min_purchase: None,
            }),
            ..Default::default()
        };

        let updated = store.update_offer("1", update).unwrap();
        assert_eq!(updated.kind.to_string(), "30% off");
        assert_eq!(updated.name, "Back to School Sale");
    }

    #[test]
    fn test_unknown_offer_is_not_found() {
        let mut store = OfferStore::seeded();
        let before = store.offers().to_vec();
        let missing = CoreError::OfferNotFound("42".to_string());

        assert_eq!(store.update_offer("42", OfferUpdate::default()), Err(missing.clone()));
        assert_eq!(store.toggle_offer_status("42"), Err(missing.clone()));
        assert_eq!(store.delete_offer("42"), Err(missing));
        assert_eq!(store.offers(), before.as_slice());
    }

    #[test]
    fn test_delete_offer() {
        let mut store = OfferStore::seeded();
        store.delete_offer("2").unwrap();
        assert_eq!(store.offers().len(), 2);
        assert_eq!(store.offer_for_product("1").unwrap().id, "1");
    }
}
