//! # Category Commands
//!
//! Category management from the inventory tab.
//!
//! The duplicate-name check lives here, not in the store: the store derives
//! keys and appends without looking for collisions.

use tracing::{debug, info};

use schoolcart_core::validation::validate_category_name;
use schoolcart_core::Category;

use crate::error::ApiError;
use crate::state::ProductState;

pub fn list_categories(products: &ProductState) -> Vec<Category> {
    debug!("list_categories command");
    products.with(|store| store.categories().to_vec())
}

/// Adds a category. The name is trimmed and must not repeat an existing
/// name, ignoring case.
pub fn add_category(products: &ProductState, name: &str) -> Result<Category, ApiError> {
    debug!(name = %name, "add_category command");

    let category = products.with_mut(|store| {
        let name = validate_category_name(name, store.categories())?;
        Ok::<_, ApiError>(store.add_category(&name))
    })?;

    info!(id = %category.id, key = %category.key, "Category added");
    Ok(category)
}

/// Deletes a category nothing is filed under.
///
/// ## Errors
/// `CONFLICT` while products still use the category's key.
pub fn delete_category(products: &ProductState, id: &str) -> Result<Category, ApiError> {
    debug!(id = %id, "delete_category command");

    let category = products.with_mut(|store| store.delete_category(id))?;

    info!(id = %category.id, key = %category.key, "Category deleted");
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use schoolcart_store::ProductStore;

    #[test]
    fn test_add_category_trims_and_keys() {
        let products = ProductState::new(ProductStore::seeded());
        let category = add_category(&products, "  Art Supplies ").unwrap();

        assert_eq!(category.name, "Art Supplies");
        assert_eq!(category.key, "art-supplies");
        assert_eq!(list_categories(&products).len(), 9);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let products = ProductState::new(ProductStore::seeded());
        let err = add_category(&products, "school supplies").unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(list_categories(&products).len(), 8);
    }

    #[test]
    fn test_delete_category_in_use() {
        let products = ProductState::new(ProductStore::seeded());
        let err = delete_category(&products, "8").unwrap_err();

        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(err.message, "Category drinks is used by 2 products");
    }

    #[test]
    fn test_delete_unused_category() {
        let products = ProductState::new(ProductStore::seeded());
        let added = add_category(&products, "Sports").unwrap();

        delete_category(&products, &added.id).unwrap();
        let err = delete_category(&products, &added.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
