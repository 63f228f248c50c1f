//! Checkout gating and payment confirmation.
//!
//! The gate enforces one precondition: a delivery address with a street must
//! be on file. Once it passes, payment is collected through the
//! [`PaymentGateway`] seam and the cart is cleared. The stock gateway
//! approves unconditionally (the storefront has no decline path today), but
//! a real processor slots in behind the same trait.

use thiserror::Error;

use tamales_dali_core::Price;

use crate::cart::CartStore;
use crate::models::DeliveryAddress;

/// Errors returned by [`CheckoutGate::attempt_pay`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// No delivery address with a street is on file. The cart is left
    /// untouched so the customer can fix the address and retry.
    #[error("a delivery address is required before paying")]
    MissingAddress,
}

/// Outcome of a successful payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
    /// Amount collected.
    pub total: Price,
}

/// Collects payment for an order total.
pub trait PaymentGateway {
    /// Collect `total` and return the confirmation.
    fn collect(&self, total: Price) -> PaymentConfirmation;
}

/// Gateway that approves every payment immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantApproval;

impl PaymentGateway for InstantApproval {
    fn collect(&self, total: Price) -> PaymentConfirmation {
        PaymentConfirmation { total }
    }
}

/// The validation and transition logic guarding cart-to-confirmed-order.
pub struct CheckoutGate {
    gateway: Box<dyn PaymentGateway>,
}

impl CheckoutGate {
    /// Gate with the stock always-approve gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::with_gateway(Box::new(InstantApproval))
    }

    /// Gate with a substitute payment collaborator.
    #[must_use]
    pub fn with_gateway(gateway: Box<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Try to pay for the cart.
    ///
    /// On success the cart is cleared and the confirmation returned, which is
    /// the caller's signal to close the cart overlay. Paying an empty cart
    /// with a valid address succeeds.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::MissingAddress` if `address` is absent or has
    /// a blank street; the cart is left unmodified.
    pub fn attempt_pay(
        &self,
        cart: &mut CartStore,
        address: Option<&DeliveryAddress>,
    ) -> Result<PaymentConfirmation, CheckoutError> {
        let Some(address) = address.filter(|a| a.has_street()) else {
            tracing::debug!("checkout blocked: no delivery address on file");
            return Err(CheckoutError::MissingAddress);
        };

        let confirmation = self.gateway.collect(cart.total());
        tracing::info!(
            total = %confirmation.total,
            street = %address.street,
            "payment confirmed"
        );
        cart.clear();
        Ok(confirmation)
    }
}

impl Default for CheckoutGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use tamales_dali_core::ItemId;

    fn cart_with_two_tamales() -> CartStore {
        let catalog = Catalog::tamales_dali();
        let mut cart = CartStore::new();
        let veracruzano = catalog.get(&ItemId::new("t-veracruzano")).unwrap();
        cart.add_item(veracruzano);
        cart.add_item(veracruzano);
        cart
    }

    fn address() -> DeliveryAddress {
        DeliveryAddress::new("Av. Central", "12", "Jardines de Morelos", "55064", None).unwrap()
    }

    #[test]
    fn test_missing_address_leaves_cart_unchanged() {
        let gate = CheckoutGate::new();
        let mut cart = cart_with_two_tamales();
        let before: Vec<_> = cart.lines().to_vec();

        let err = gate.attempt_pay(&mut cart, None).unwrap_err();

        assert_eq!(err, CheckoutError::MissingAddress);
        assert_eq!(cart.lines(), before.as_slice());
    }

    #[test]
    fn test_blank_street_is_rejected() {
        let gate = CheckoutGate::new();
        let mut cart = cart_with_two_tamales();
        let mut address = address();
        address.street = "  ".to_owned();

        let err = gate.attempt_pay(&mut cart, Some(&address)).unwrap_err();

        assert_eq!(err, CheckoutError::MissingAddress);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_valid_address_confirms_and_clears_cart() {
        let gate = CheckoutGate::new();
        let mut cart = cart_with_two_tamales();

        let confirmation = gate.attempt_pay(&mut cart, Some(&address())).unwrap();

        assert_eq!(confirmation.total, Price::from_pesos(64));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_empty_cart_pays_zero() {
        let gate = CheckoutGate::new();
        let mut cart = CartStore::new();

        let confirmation = gate.attempt_pay(&mut cart, Some(&address())).unwrap();

        assert_eq!(confirmation.total, Price::zero());
    }

    #[test]
    fn test_substitute_gateway_sees_cart_total() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct Recording(Rc<Cell<Option<Price>>>);
        impl PaymentGateway for Recording {
            fn collect(&self, total: Price) -> PaymentConfirmation {
                self.0.set(Some(total));
                PaymentConfirmation { total }
            }
        }

        let seen = Rc::new(Cell::new(None));
        let gate = CheckoutGate::with_gateway(Box::new(Recording(Rc::clone(&seen))));
        let mut cart = cart_with_two_tamales();

        gate.attempt_pay(&mut cart, Some(&address())).unwrap();

        assert_eq!(seen.get(), Some(Price::from_pesos(64)));
    }
}
