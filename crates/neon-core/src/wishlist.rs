//! # Wishlist Module
//!
//! A set of saved products keyed by product id. Structurally the cart's
//! simpler sibling: no variant dimension, no quantities, no checkout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

// =============================================================================
// Wishlist Entry
// =============================================================================

/// A saved product, snapshotted at the time it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// Catalog product id; the entry's identity.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    pub price_cents: i64,

    /// Image reference at time of adding (frozen).
    pub image_ref: String,

    /// When the product was saved.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    /// Creates a wishlist entry from a catalog product, freezing its data.
    pub fn from_product(product: &Product) -> Self {
        WishlistEntry {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price_cents: product.price_cents,
            image_ref: product.image_ref.clone(),
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Wishlist
// =============================================================================

/// The session wishlist.
///
/// ## Invariants
/// - Set semantics keyed by `product_id`: adding a product that is already
///   saved is a no-op (not counted, not duplicated)
/// - Insertion order is preserved for stable display
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist::default()
    }

    /// Saves an entry; no-op if the product is already present.
    pub fn add(&mut self, entry: WishlistEntry) {
        if self.contains(&entry.product_id) {
            return;
        }
        self.entries.push(entry);
    }

    /// Removes the entry for `product_id` if present; silent no-op if absent.
    pub fn remove(&mut self, product_id: &str) {
        self.entries.retain(|e| e.product_id != product_id);
    }

    /// Pure membership query.
    pub fn contains(&self, product_id: &str) -> bool {
        self.entries.iter().any(|e| e.product_id == product_id)
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Saved entries in insertion order.
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            slug: format!("product-{}", id),
            name: format!("Product {}", id),
            category: "sneakers".to_string(),
            price_cents: 12900,
            image_ref: "👟".to_string(),
            sizes: vec![],
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_has_set_semantics() {
        let mut wishlist = Wishlist::new();
        let product = test_product("A");

        wishlist.add(WishlistEntry::from_product(&product));
        wishlist.add(WishlistEntry::from_product(&product));

        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains("A"));
    }

    #[test]
    fn test_remove_and_membership() {
        let mut wishlist = Wishlist::new();
        wishlist.add(WishlistEntry::from_product(&test_product("A")));
        wishlist.add(WishlistEntry::from_product(&test_product("B")));

        wishlist.remove("A");

        assert!(!wishlist.contains("A"));
        assert!(wishlist.contains("B"));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut wishlist = Wishlist::new();
        wishlist.add(WishlistEntry::from_product(&test_product("A")));

        wishlist.remove("Z");

        assert_eq!(wishlist.len(), 1);
    }
}
