//! Domain records for the storefront profile.
//!
//! These are the validated records behind the account and delivery-address
//! forms, separate from how they are serialized into storage.

pub mod address;
pub mod user;

pub use address::{AddressError, DeliveryAddress};
pub use user::{ProfileError, UserProfile};
