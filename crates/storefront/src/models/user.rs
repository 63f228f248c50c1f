//! Account record types.
//!
//! The storefront keeps at most one saved account. There is no password or
//! session: the record only personalizes the page and pre-fills forms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tamales_dali_core::Email;

/// Errors raised when building a [`UserProfile`] from form input.
#[derive(Debug, Error, Clone)]
pub enum ProfileError {
    /// The name field was blank.
    #[error("name cannot be empty")]
    EmptyName,
}

/// A saved account (domain record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name from the account form.
    pub name: String,
    /// Validated email address.
    pub email: Email,
}

impl UserProfile {
    /// Build a profile from account-form fields.
    ///
    /// The email arrives already validated as an [`Email`]; the name must be
    /// non-blank.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyName` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>, email: Email) -> Result<Self, ProfileError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        Ok(Self { name, email })
    }
}
