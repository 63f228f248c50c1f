//! Application state owning the storefront stores.
//!
//! There is no ambient singleton: the page owns one `AppState` and passes it
//! to whichever component needs it. Everything is single-user and
//! single-threaded (one discrete user action at a time), so the state is a
//! plain struct with no interior locking.

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::checkout::{CheckoutError, CheckoutGate, PaymentConfirmation};
use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::profile::ProfileStore;
use crate::storage::JsonFileStore;
use tamales_dali_core::ItemId;

/// Top-level application context.
pub struct AppState {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartStore,
    profile: ProfileStore,
    checkout: CheckoutGate,
}

impl AppState {
    /// Build the state: open storage under the configured directory, load the
    /// saved profile, and start with the default catalog and an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        let storage = JsonFileStore::open(&config.storage_dir)?;
        let profile = ProfileStore::load(Box::new(storage));

        Ok(Self {
            config,
            catalog: Catalog::tamales_dali(),
            cart: CartStore::new(),
            profile,
            checkout: CheckoutGate::new(),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Get a mutable reference to the cart.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Get a reference to the profile store.
    #[must_use]
    pub const fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    /// Get a mutable reference to the profile store.
    pub const fn profile_mut(&mut self) -> &mut ProfileStore {
        &mut self.profile
    }

    /// Add one unit of the catalog item with `id` to the cart.
    ///
    /// Returns `false` if the id is not on the menu (the cart is unchanged).
    pub fn add_to_cart(&mut self, id: &ItemId) -> bool {
        match self.catalog.get(id) {
            Some(item) => {
                self.cart.add_item(item);
                true
            }
            None => false,
        }
    }

    /// Run the checkout gate against the current cart and saved address.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::MissingAddress` if no usable delivery address
    /// is saved; the cart is left unmodified.
    pub fn attempt_pay(&mut self) -> Result<PaymentConfirmation, CheckoutError> {
        self.checkout
            .attempt_pay(&mut self.cart, self.profile.address())
    }
}
