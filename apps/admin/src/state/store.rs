//! # Store State
//!
//! Shared, lockable wrapper around one store.
//!
//! ## Thread Safety
//! Every store sits behind `Arc<Mutex<_>>`:
//! - `Arc`: commands on any thread share the same store
//! - `Mutex`: one command mutates a store at a time
//!
//! The lock is held only while the closure passed to [`StoreState::with`] or
//! [`StoreState::with_mut`] runs. Store mutations never fail halfway, so a
//! lock poisoned by a panicking closure still guards a consistent store and
//! is recovered rather than propagated.

use std::sync::{Arc, Mutex, PoisonError};

use schoolcart_store::{NotificationStore, OfferStore, OrderStore, ProductStore, Roster};

/// A store shared between commands.
#[derive(Debug)]
pub struct StoreState<S> {
    store: Arc<Mutex<S>>,
}

pub type ProductState = StoreState<ProductStore>;
pub type OfferState = StoreState<OfferStore>;
pub type RosterState = StoreState<Roster>;
pub type OrderState = StoreState<OrderStore>;
pub type NotificationState = StoreState<NotificationStore>;

impl<S> StoreState<S> {
    pub fn new(store: S) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use schoolcart_admin::state::ProductState;
    /// use schoolcart_store::ProductStore;
    ///
    /// let products = ProductState::new(ProductStore::seeded());
    /// let count = products.with(|store| store.products().len());
    /// assert_eq!(count, 12);
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut S) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

impl<S> Clone for StoreState<S> {
    fn clone(&self) -> Self {
        StoreState {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Default> Default for StoreState<S> {
    fn default() -> Self {
        StoreState::new(S::default())
    }
}
