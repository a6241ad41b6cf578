//! # Product Commands
//!
//! Commands behind the inventory tab.
//!
//! ## Inventory Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Inventory tab                                                          │
//! │                                                                         │
//! │  [search: "note"]                                  [+ Add Product]     │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │ Classmate Notebook (200 pages)  notebooks  ₹85.00  120  In Stock │  │
//! │  │ Reynolds Ball Pen (Pack of 5)   writing    ₹60.00    0  Out of.. │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                 │                    │                        │
//! │  search_products    update_product       delete_product                │
//! │                     (edit dialog)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use schoolcart_core::validation::{
    validate_new_product, validate_product_update, validate_search_query,
};
use schoolcart_core::{NewProduct, Product, ProductUpdate, StockStatus};

use crate::error::ApiError;
use crate::state::ProductState;

/// Product DTO for the dashboard.
///
/// Carries the status badge text and the projected profit alongside the raw
/// fields, so the table needs no business logic of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price_paise: i64,
    pub stock: u32,
    pub status: StockStatus,
    pub status_label: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub profit_margin: u32,
    pub projected_profit_paise: i64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            profit_margin: p.profit_margin_pct(),
            projected_profit_paise: p.projected_profit().paise(),
            status_label: p.status.label().to_string(),
            id: p.id,
            name: p.name,
            category: p.category,
            price_paise: p.price.paise(),
            stock: p.stock,
            status: p.status,
            image: p.image,
            description: p.description,
        }
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto::from(p.clone())
    }
}

/// Lists the whole catalog in insertion order.
pub fn list_products(products: &ProductState) -> Vec<ProductDto> {
    debug!("list_products command");
    products.with(|store| store.products().iter().map(ProductDto::from).collect())
}

/// Filters the catalog by name or category key.
///
/// ## Arguments
/// * `query` - Search term; empty returns everything
pub fn search_products(products: &ProductState, query: &str) -> Result<Vec<ProductDto>, ApiError> {
    debug!(query = %query, "search_products command");

    let query = validate_search_query(query)?;
    let results: Vec<ProductDto> =
        products.with(|store| store.search(&query).into_iter().map(ProductDto::from).collect());

    debug!(count = results.len(), "Search complete");
    Ok(results)
}

pub fn get_product(products: &ProductState, id: &str) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "get_product command");

    products
        .with(|store| store.get(id).map(ProductDto::from))
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// Adds a product from the add-product dialog.
pub fn add_product(products: &ProductState, new: NewProduct) -> Result<ProductDto, ApiError> {
    debug!(name = %new.name, "add_product command");

    validate_new_product(&new)?;
    let product = products.with_mut(|store| store.add_product(new));

    info!(id = %product.id, name = %product.name, "Product added");
    Ok(ProductDto::from(product))
}

/// Applies the edit-product dialog. Stock status follows the new stock.
pub fn update_product(
    products: &ProductState,
    id: &str,
    update: ProductUpdate,
) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "update_product command");

    validate_product_update(&update)?;
    let product = products.with_mut(|store| store.update_product(id, update))?;

    Ok(ProductDto::from(product))
}

pub fn delete_product(products: &ProductState, id: &str) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "delete_product command");

    let product = products.with_mut(|store| store.delete_product(id))?;

    info!(id = %product.id, name = %product.name, "Product deleted");
    Ok(ProductDto::from(product))
}
