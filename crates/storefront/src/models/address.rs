//! Delivery address record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a [`DeliveryAddress`] from form input.
#[derive(Debug, Error, Clone)]
pub enum AddressError {
    /// A required field was blank.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}

/// A saved delivery address.
///
/// Saving always replaces the whole record; there are no partial-field
/// updates. Checkout only needs [`DeliveryAddress::has_street`] to pass; the
/// remaining fields are for the delivery rider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    /// Street name.
    pub street: String,
    /// Street number.
    pub number: String,
    /// Neighborhood (colonia).
    pub neighborhood: String,
    /// Postal code.
    pub postal_code: String,
    /// Free-text delivery hints; empty when the form leaves it blank.
    #[serde(default)]
    pub reference_notes: String,
}

impl DeliveryAddress {
    /// Build an address from delivery-form fields.
    ///
    /// # Errors
    ///
    /// Returns `AddressError::EmptyField` naming the first required field
    /// that is empty or whitespace.
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
        postal_code: impl Into<String>,
        reference_notes: Option<String>,
    ) -> Result<Self, AddressError> {
        let address = Self {
            street: street.into(),
            number: number.into(),
            neighborhood: neighborhood.into(),
            postal_code: postal_code.into(),
            reference_notes: reference_notes.unwrap_or_default(),
        };

        for (value, field) in [
            (&address.street, "street"),
            (&address.number, "number"),
            (&address.neighborhood, "neighborhood"),
            (&address.postal_code, "postal code"),
        ] {
            if value.trim().is_empty() {
                return Err(AddressError::EmptyField(field));
            }
        }

        Ok(address)
    }

    /// Whether this record can gate a checkout (non-blank street).
    ///
    /// Records loaded from storage bypass [`DeliveryAddress::new`], so the
    /// street may still be blank here.
    #[must_use]
    pub fn has_street(&self) -> bool {
        !self.street.trim().is_empty()
    }
}
