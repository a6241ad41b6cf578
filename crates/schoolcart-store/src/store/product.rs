//! # Product Store
//!
//! The catalog: products and the categories they are filed under.
//!
//! ## Key Operations
//! - CRUD for products, with stock status kept in step with stock
//! - Category add/delete by key
//! - Low-stock and out-of-stock lists for the startup alert
//!
//! ## Stock Status
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 When Is Status Recomputed?                              │
//! │                                                                         │
//! │  add_product(stock: 0)            → out-of-stock                       │
//! │  update_product { stock: 20 }     → in-stock      (recomputed)         │
//! │  update_product { price: ₹90 }    → unchanged     (no stock in update) │
//! │                                                                         │
//! │  Status is never taken from the caller.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use schoolcart_core::{
    Category, CoreError, CoreResult, NewProduct, Product, ProductUpdate, StockStatus,
};

use super::new_id;
use crate::seed;

/// Store for products and categories.
///
/// ## Usage
/// ```rust
/// use schoolcart_core::{Money, NewProduct};
/// use schoolcart_store::ProductStore;
///
/// let mut store = ProductStore::new();
/// let product = store.add_product(NewProduct {
///     name: "Masala Chai".to_string(),
///     category: "drinks".to_string(),
///     price: Money::from_rupees(25),
///     stock: 55,
///     ..Default::default()
/// });
///
/// assert_eq!(store.get(&product.id), Some(&product));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl ProductStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ProductStore::default()
    }

    /// Creates a store holding the dashboard's seed catalog.
    pub fn seeded() -> Self {
        ProductStore {
            products: seed::products(),
            categories: seed::categories(),
        }
    }

    // =========================================================================
    // Readers
    // =========================================================================

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in insertion order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn category_by_key(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Case-insensitive substring match on product name or category key.
    ///
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let term = term.trim().to_lowercase();

        debug!(term = %term, "Searching products");

        self.products
            .iter()
            .filter(|p| {
                term.is_empty()
                    || p.name.to_lowercase().contains(&term)
                    || p.category.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Products whose status is `low-stock`.
    pub fn low_stock_products(&self) -> Vec<&Product> {
        self.with_status(StockStatus::LowStock)
    }

    /// Products whose status is `out-of-stock`.
    pub fn out_of_stock_products(&self) -> Vec<&Product> {
        self.with_status(StockStatus::OutOfStock)
    }

    fn with_status(&self, status: StockStatus) -> Vec<&Product> {
        self.products.iter().filter(|p| p.status == status).collect()
    }

    // =========================================================================
    // Product mutations
    // =========================================================================

    /// Adds a product under a fresh id and returns it.
    pub fn add_product(&mut self, new: NewProduct) -> Product {
        let product = Product::from_new(new_id(), new);

        debug!(
            id = %product.id,
            name = %product.name,
            stock = product.stock,
            status = ?product.status,
            "Adding product"
        );

        self.products.push(product.clone());
        product
    }

    /// Merges `update` into the product with `id` and returns the result.
    ///
    /// ## Errors
    /// [`CoreError::ProductNotFound`] if no product has this id; nothing is
    /// changed in that case.
    pub fn update_product(&mut self, id: &str, update: ProductUpdate) -> CoreResult<Product> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        product.apply_update(update);

        debug!(
            id = %product.id,
            stock = product.stock,
            status = ?product.status,
            "Updated product"
        );

        Ok(product.clone())
    }

    /// Removes the product with `id` and returns it.
    ///
    /// Offers that list the id are not touched.
    pub fn delete_product(&mut self, id: &str) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        let product = self.products.remove(index);
        debug!(id = %product.id, name = %product.name, "Deleted product");
        Ok(product)
    }

    // =========================================================================
    // Category mutations
    // =========================================================================

    /// Adds a category named `name`, keyed by [`Category::key_for`].
    ///
    /// Key collisions are not checked here; the command layer rejects
    /// duplicate names before calling this.
    pub fn add_category(&mut self, name: &str) -> Category {
        let category = Category::new(new_id(), name);

        debug!(id = %category.id, key = %category.key, "Adding category");

        self.categories.push(category.clone());
        category
    }

    /// Removes the category with `id` and returns it.
    ///
    /// ## Errors
    /// - [`CoreError::CategoryNotFound`] if no category has this id
    /// - [`CoreError::CategoryInUse`] if products still carry its key; the
    ///   category is kept
    pub fn delete_category(&mut self, id: &str) -> CoreResult<Category> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CoreError::CategoryNotFound(id.to_string()))?;

        let key = &self.categories[index].key;
        let product_count = self.products.iter().filter(|p| &p.category == key).count();
        if product_count > 0 {
            debug!(key = %key, product_count, "Category still in use");
            return Err(CoreError::CategoryInUse {
                key: key.clone(),
                product_count,
            });
        }

        let category = self.categories.remove(index);
        debug!(id = %category.id, key = %category.key, "Deleted category");
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolcart_core::Money;

    fn new_product(name: &str, category: &str, stock: u32) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            category: category.to_string(),
            price: Money::from_rupees(50),
            stock,
            ..Default::default()
        }
    }

    #[test]
    fn test_add_product_assigns_id_and_status() {
        let mut store = ProductStore::new();
        let first = store.add_product(new_product("Eraser", "supplies", 0));
        let second = store.add_product(new_product("Sharpener", "supplies", 40));

        assert_ne!(first.id, second.id);
        assert_eq!(first.status, StockStatus::OutOfStock);
        assert_eq!(second.status, StockStatus::InStock);
        assert_eq!(store.products().len(), 2);
        assert_eq!(store.products()[1].name, "Sharpener");
    }

    #[test]
    fn test_update_product_restocks() {
        let mut store = ProductStore::seeded();
        assert_eq!(store.out_of_stock_products().len(), 1);

        let updated = store.update_product("4", ProductUpdate::stock(20)).unwrap();
        assert_eq!(updated.status, StockStatus::InStock);
        assert!(store.out_of_stock_products().is_empty());
        assert!(store.low_stock_products().iter().all(|p| p.id != "4"));
    }

    #[test]
    fn test_update_product_without_stock_keeps_status() {
        let mut store = ProductStore::seeded();
        let update = ProductUpdate {
            price: Some(Money::from_rupees(200)),
            ..Default::default()
        };

        let updated = store.update_product("3", update).unwrap();
        assert_eq!(updated.price, Money::from_rupees(200));
        assert_eq!(updated.status, StockStatus::LowStock);
    }

    #[test]
    fn test_update_unknown_product_changes_nothing() {
        let mut store = ProductStore::seeded();
        let before = store.products().to_vec();

        let result = store.update_product("missing", ProductUpdate::stock(5));
        assert_eq!(result, Err(CoreError::ProductNotFound("missing".to_string())));
        assert_eq!(store.products(), before.as_slice());
    }

    #[test]
    fn test_delete_product() {
        let mut store = ProductStore::seeded();
        let deleted = store.delete_product("9").unwrap();
        assert_eq!(deleted.name, "Samosa (2 pcs)");
        assert!(store.get("9").is_none());
        assert_eq!(store.products().len(), 11);

        assert_eq!(
            store.delete_product("9"),
            Err(CoreError::ProductNotFound("9".to_string()))
        );
        assert_eq!(store.products().len(), 11);
    }

    #[test]
    fn test_search_matches_name_and_category() {
        let store = ProductStore::seeded();

        let ids: Vec<_> = store.search("COFFEE").iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec!["11"]);

        let ids: Vec<_> = store.search("drinks").iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec!["10", "11"]);

        assert_eq!(store.search("  ").len(), 12);
        assert!(store.search("laptop").is_empty());
    }

    #[test]
    fn test_add_category_derives_key() {
        let mut store = ProductStore::new();
        let category = store.add_category("Art Supplies");
        assert_eq!(category.key, "art-supplies");
        assert_eq!(store.category_by_key("art-supplies"), Some(&category));
    }

    #[test]
    fn test_delete_category_in_use_is_blocked() {
        let mut store = ProductStore::seeded();

        let result = store.delete_category("2");
        assert_eq!(
            result,
            Err(CoreError::CategoryInUse {
                key: "writing".to_string(),
                product_count: 2,
            })
        );
        assert!(store.category_by_key("writing").is_some());
        assert_eq!(store.products().len(), 12);
    }

    #[test]
    fn test_delete_unused_category() {
        let mut store = ProductStore::seeded();
        let category = store.add_category("Sports");

        let deleted = store.delete_category(&category.id).unwrap();
        assert_eq!(deleted.key, "sports");
        assert_eq!(store.categories().len(), 8);

        assert_eq!(
            store.delete_category(&category.id),
            Err(CoreError::CategoryNotFound(category.id.clone()))
        );
    }
}
