//! The menu catalog and delivery zones.
//!
//! The catalog is immutable input: built once at startup and only read
//! afterwards. The storefront ships its fixed menu as the built-in default
//! ([`Catalog::tamales_dali`]); nothing in the order flow mutates it.

use tamales_dali_core::{ItemId, Price};

/// A purchasable menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Unique slug identifying the item.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Short description shown on the menu card.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Category badge (e.g. "Bebida").
    pub tag: String,
}

/// Immutable catalog: menu items plus the delivery-zone names.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    zones: Vec<String>,
}

impl Catalog {
    /// Build a catalog from externally supplied data.
    #[must_use]
    pub fn new(items: Vec<CatalogItem>, zones: Vec<String>) -> Self {
        Self { items, zones }
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// All menu items, in menu order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Delivery-zone names, in display order.
    #[must_use]
    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    /// The Tamales Dali menu and coverage area.
    #[must_use]
    pub fn tamales_dali() -> Self {
        let items = vec![
            item(
                "t-veracruzano",
                "Tamal Veracruzano",
                "Clásico envuelto en hoja de plátano.",
                32,
                "Tradicional",
            ),
            item(
                "t-rajas",
                "Tamal de Rajas con Queso",
                "Relleno de rajas y queso fresco.",
                34,
                "Suave",
            ),
            item(
                "t-mole",
                "Tamal de Mole",
                "Mole casero ligeramente picosito.",
                36,
                "Favorito",
            ),
            item(
                "t-dulce",
                "Tamal Dulce (fresa)",
                "Dulce y esponjoso para acompañar el café.",
                30,
                "Dulce",
            ),
            item(
                "atole",
                "Atole de Vainilla",
                "Calientito y cremoso.",
                28,
                "Bebida",
            ),
            item(
                "champurrado",
                "Champurrado",
                "Chocolate y maíz, receta de casa.",
                30,
                "Bebida",
            ),
        ];

        let zones = [
            "Ecatepec de Morelos (centro)",
            "San Cristóbal Centro",
            "Ciudad Azteca",
            "Jardines de Morelos",
            "Las Américas",
            "Santa Clara Coatitla",
            "Xalostoc",
            "Nezahualcóyotl (frontera norte, cobertura limitada)",
        ]
        .map(String::from)
        .to_vec();

        Self::new(items, zones)
    }
}

/// Shorthand for building a whole-peso menu item.
fn item(id: &str, name: &str, description: &str, pesos: i64, tag: &str) -> CatalogItem {
    CatalogItem {
        id: ItemId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::from_pesos(pesos),
        tag: tag.to_owned(),
    }
}
