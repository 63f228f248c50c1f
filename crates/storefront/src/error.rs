//! Unified error handling.
//!
//! Components carry their own error enums; `StorefrontError` wraps them for
//! callers that drive the whole flow. Note what is *not* an error here:
//! best-effort persistence failures are swallowed at the profile boundary
//! (see [`crate::profile`]), and cart operations on absent ids are no-ops.

use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration failed to load.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The durable key-value store could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Checkout precondition unmet.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::from(CheckoutError::MissingAddress);
        assert_eq!(
            err.to_string(),
            "Checkout error: a delivery address is required before paying"
        );

        let err = StorefrontError::from(ConfigError::MissingEnvVar(
            "TAMALES_STORAGE_DIR".to_owned(),
        ));
        assert!(err.to_string().contains("TAMALES_STORAGE_DIR"));
    }
}
