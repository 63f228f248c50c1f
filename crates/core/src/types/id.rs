//! Newtype IDs for type-safe entity references.
//!
//! Catalog entries are keyed by human-readable slugs (`t-mole`,
//! `champurrado`), so IDs wrap owned strings rather than integers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog item.
///
/// Wraps the item's slug with `#[serde(transparent)]` so stored records keep
/// the plain string form.
///
/// # Example
///
/// ```rust
/// use tamales_dali_core::ItemId;
///
/// let id = ItemId::new("t-veracruzano");
/// assert_eq!(id.as_str(), "t-veracruzano");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new ID from a slug.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
