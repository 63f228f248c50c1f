//! The shopping cart.
//!
//! Lines keep insertion order for display; there is no semantic dependency on
//! it. At most one line exists per catalog item, so adding the same item
//! again bumps its quantity. The total is derived on every query, never
//! cached.

use tamales_dali_core::{ItemId, Price};

use crate::catalog::CatalogItem;

/// One cart entry: a catalog item and the requested quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    item: CatalogItem,
    quantity: u32,
}

impl CartLine {
    /// The catalog item this line orders.
    #[must_use]
    pub const fn item(&self) -> &CatalogItem {
        &self.item
    }

    /// Requested quantity (always ≥ 1).
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.price.times(self.quantity)
    }
}

/// Ordered collection of cart lines with derived totals.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `item`.
    ///
    /// An existing line for the same id gets its quantity bumped; otherwise a
    /// new line is appended with quantity 1. Never fails. Making the cart
    /// visible afterwards is the caller's concern.
    pub fn add_item(&mut self, item: &CatalogItem) {
        if let Some(line) = self.line_mut(&item.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                item: item.clone(),
                quantity: 1,
            });
        }
        tracing::debug!(item = %item.id, "added to cart");
    }

    /// Apply a quantity delta to the line for `id`, clamped to a minimum
    /// of 1. Decrementing at 1 is a no-op, not a removal. Unknown ids are
    /// ignored.
    pub fn change_quantity(&mut self, id: &ItemId, delta: i64) {
        if let Some(line) = self.line_mut(id) {
            let next = i64::from(line.quantity).saturating_add(delta).max(1);
            line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    /// Remove the line for `id`, if present.
    pub fn remove_line(&mut self, id: &ItemId) {
        self.lines.retain(|line| &line.item.id != id);
    }

    /// Sum of line totals, recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of lines (what the header badge shows).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    fn line_mut(&mut self, id: &ItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.item.id == id)
    }
}
