//! Cart and checkout flow driven through the full application state.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use pretty_assertions::assert_eq;

use tamales_dali_core::{ItemId, Price};
use tamales_dali_integration_tests::TestContext;
use tamales_dali_storefront::checkout::CheckoutError;
use tamales_dali_storefront::models::DeliveryAddress;

fn id(slug: &str) -> ItemId {
    ItemId::new(slug)
}

fn delivery_address() -> DeliveryAddress {
    DeliveryAddress::new("Av. Central", "12", "Jardines de Morelos", "55064", None).unwrap()
}

#[test]
fn full_order_from_menu_to_confirmation() {
    let ctx = TestContext::new();
    let mut app = ctx.app();

    assert!(app.add_to_cart(&id("t-veracruzano")));
    assert!(app.add_to_cart(&id("t-veracruzano")));
    assert!(app.add_to_cart(&id("champurrado")));
    assert_eq!(app.cart().total(), Price::from_pesos(94));

    app.cart_mut().remove_line(&id("champurrado"));
    assert_eq!(app.cart().total(), Price::from_pesos(64));

    // No saved address yet: payment is blocked and the cart is untouched
    assert_eq!(app.attempt_pay().unwrap_err(), CheckoutError::MissingAddress);
    assert_eq!(app.cart().line_count(), 1);
    assert_eq!(app.cart().lines()[0].quantity(), 2);

    app.profile_mut().save_address(delivery_address());

    let confirmation = app.attempt_pay().unwrap();
    assert_eq!(confirmation.total, Price::from_pesos(64));
    assert_eq!(app.cart().line_count(), 0);
}

#[test]
fn unknown_menu_id_never_reaches_the_cart() {
    let ctx = TestContext::new();
    let mut app = ctx.app();

    assert!(!app.add_to_cart(&id("t-norteno")));
    assert!(app.cart().is_empty());
}

#[test]
fn paying_requires_no_account() {
    // Ordering is gated on the address alone; a saved account is optional
    let ctx = TestContext::new();
    let mut app = ctx.app();

    app.add_to_cart(&id("atole"));
    app.profile_mut().save_address(delivery_address());

    assert!(app.profile().user().is_none());
    assert!(app.attempt_pay().is_ok());
}

#[test]
fn stored_address_with_blank_street_still_blocks_payment() {
    let ctx = TestContext::new();
    std::fs::write(
        ctx.record_path("td_delivery_address"),
        r#"{"street":"","number":"1","neighborhood":"Centro","postal_code":"55000"}"#,
    )
    .unwrap();

    let mut app = ctx.app();
    app.add_to_cart(&id("atole"));

    assert_eq!(app.attempt_pay().unwrap_err(), CheckoutError::MissingAddress);
    assert_eq!(app.cart().line_count(), 1);
}

#[test]
fn paying_clears_the_cart_but_keeps_the_profile() {
    let ctx = TestContext::new();
    let mut app = ctx.app();

    app.add_to_cart(&id("t-mole"));
    app.profile_mut().save_address(delivery_address());
    app.attempt_pay().unwrap();

    assert!(app.cart().is_empty());
    assert_eq!(app.profile().address(), Some(&delivery_address()));
}

#[test]
fn quantity_deltas_through_the_cart_overlay() {
    let ctx = TestContext::new();
    let mut app = ctx.app();

    app.add_to_cart(&id("t-dulce"));
    app.cart_mut().change_quantity(&id("t-dulce"), 2);
    assert_eq!(app.cart().total(), Price::from_pesos(90));

    app.cart_mut().change_quantity(&id("t-dulce"), -5);
    assert_eq!(app.cart().total(), Price::from_pesos(30));
    assert_eq!(app.cart().line_count(), 1);
}
