//! # Cart Module
//!
//! The live shopping cart: line items, mutation operations, derived totals,
//! and the checkout snapshot.
//!
//! ## Line Identity
//! A cart line is identified by the `(product_id, variant)` pair. Two lines
//! with the same product but different sizes are distinct entries:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CART                                                                   │
//! │  Urban Streetwear Hoodie  (M)   x2      $158.00                        │
//! │  Urban Streetwear Hoodie  (L)   x1       $79.00   ← separate line      │
//! │  Fresh Kicks Sneakers           x1      $129.00                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Line State Machine
//! ```text
//! absent ──add──► present(n) ──add──► present(n+k)
//!                     │ set_quantity(m>0)
//!                     ▼
//!                 present(m) ──set_quantity(<=0) / remove──► absent
//! ```
//! No other transitions exist. A zero-quantity line is never stored.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Order, OrderLine, OrderStatus, Product};
use crate::DELIVERY_OFFSET_DAYS;

// =============================================================================
// Cart Line
// =============================================================================

/// One distinct purchasable selection in the cart.
///
/// ## Design Notes
/// - `product_id` + `variant`: the line's identity
/// - `name`, `image_ref`, `unit_price_cents`: frozen copy of catalog data at
///   the time of adding, so the cart renders correctly even if the catalog
///   changes underneath it. Later adds to the same line never refresh these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog product id.
    pub product_id: String,

    /// Size variant; part of the line's identity.
    pub variant: Option<String>,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Image reference at time of adding (frozen).
    pub image_ref: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart; always positive while stored.
    pub quantity: i64,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a catalog product, freezing its data.
    pub fn from_product(product: &Product, variant: Option<String>, quantity: i64) -> Self {
        CartLine {
            product_id: product.id.clone(),
            variant,
            name: product.name.clone(),
            image_ref: product.image_ref.clone(),
            unit_price_cents: product.price_cents,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Whether this line matches the `(product_id, variant)` identity pair.
    #[inline]
    pub fn matches(&self, product_id: &str, variant: Option<&str>) -> bool {
        self.product_id == product_id && self.variant.as_deref() == variant
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The live shopping cart for the active session.
///
/// ## Invariants
/// - At most one line per `(product_id, variant)` pair; adding an
///   already-present pair increments its quantity instead
/// - Every stored line has quantity > 0
/// - Insertion order is preserved for stable display
///
/// Cart state is memory-only: it is created empty at session start and is
/// never persisted. Only orders survive the session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,

    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a line to the cart, merging by `(product_id, variant)` identity.
    ///
    /// ## Behavior
    /// - Matching line present: its quantity increases by `line.quantity`;
    ///   the existing snapshot fields (price, name, image) are left untouched
    /// - No matching line: `line` is appended as-is
    ///
    /// Always succeeds. The caller is responsible for only passing positive
    /// quantities (see [`crate::validation::validate_quantity`]).
    pub fn add_line(&mut self, line: CartLine) {
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(&line.product_id, line.variant.as_deref()))
        {
            existing.quantity += line.quantity;
            return;
        }

        self.lines.push(line);
    }

    /// Removes the matching line if present; silent no-op if absent.
    pub fn remove_line(&mut self, product_id: &str, variant: Option<&str>) {
        self.lines.retain(|l| !l.matches(product_id, variant));
    }

    /// Replaces a line's quantity in place.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: equivalent to [`Cart::remove_line`]; a
    ///   negative-quantity line is never stored
    /// - Line absent: silent no-op
    pub fn set_quantity(&mut self, product_id: &str, variant: Option<&str>, quantity: i64) {
        if quantity <= 0 {
            self.remove_line(product_id, variant);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(product_id, variant)) {
            line.quantity = quantity;
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines (the badge count).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `unit_price × quantity` across all lines.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Builds an order snapshot from the current cart contents.
    ///
    /// Returns `None` when the cart is empty: checking out an empty cart is
    /// a defined no-op, not a fault. The returned order owns value copies of
    /// the lines: mutating the cart afterwards cannot affect it.
    ///
    /// This is a pure derivation; it does NOT clear the cart. The session
    /// layer clears the cart after the order has been persisted.
    pub fn snapshot_order(&self, order_number: String, placed_at: DateTime<Utc>) -> Option<Order> {
        if self.lines.is_empty() {
            return None;
        }

        let lines: Vec<OrderLine> = self
            .lines
            .iter()
            .map(|l| OrderLine {
                product_id: l.product_id.clone(),
                variant: l.variant.clone(),
                name: l.name.clone(),
                image_ref: l.image_ref.clone(),
                unit_price_cents: l.unit_price_cents,
                quantity: l.quantity,
            })
            .collect();

        Some(Order {
            order_number,
            status: OrderStatus::Processing,
            total_cents: self.subtotal_cents(),
            lines,
            created_at: placed_at,
            estimated_delivery_at: placed_at + Duration::days(DELIVERY_OFFSET_DAYS),
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            slug: format!("product-{}", id),
            name: format!("Product {}", id),
            category: "tees".to_string(),
            price_cents,
            image_ref: "👕".to_string(),
            sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn line(product: &Product, variant: Option<&str>, quantity: i64) -> CartLine {
        CartLine::from_product(product, variant.map(str::to_string), quantity)
    }

    #[test]
    fn test_add_merges_by_identity() {
        let mut cart = Cart::new();
        let product = test_product("A", 1000);

        cart.add_line(line(&product, Some("M"), 1));
        cart.add_line(line(&product, Some("M"), 2));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 3);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_add_does_not_refresh_snapshot() {
        let mut cart = Cart::new();
        let product = test_product("A", 1000);
        cart.add_line(line(&product, Some("M"), 1));

        // Same identity, different price: the stored snapshot must win.
        let mut repriced = test_product("A", 9999);
        repriced.name = "Renamed".to_string();
        cart.add_line(line(&repriced, Some("M"), 1));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].unit_price_cents, 1000);
        assert_eq!(cart.lines[0].name, "Product A");
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_variants_are_distinct_lines() {
        let mut cart = Cart::new();
        let product = test_product("A", 1000);

        cart.add_line(line(&product, Some("M"), 1));
        cart.add_line(line(&product, Some("L"), 1));

        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_variant_none_is_its_own_identity() {
        let mut cart = Cart::new();
        let product = test_product("A", 1000);

        cart.add_line(line(&product, None, 1));
        cart.add_line(line(&product, Some("M"), 1));
        cart.add_line(line(&product, None, 1));

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_remove_absent_line_is_noop() {
        let mut cart = Cart::new();
        let product = test_product("A", 1000);
        cart.add_line(line(&product, Some("M"), 2));

        cart.remove_line("A", Some("L"));
        cart.remove_line("B", None);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_remove_matches_variant() {
        let mut cart = Cart::new();
        let product = test_product("A", 1000);
        cart.add_line(line(&product, Some("M"), 1));
        cart.add_line(line(&product, Some("L"), 1));

        cart.remove_line("A", Some("M"));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].variant.as_deref(), Some("L"));
    }

    #[test]
    fn test_set_quantity_replaces_in_place() {
        let mut cart = Cart::new();
        let product = test_product("A", 1000);
        cart.add_line(line(&product, Some("M"), 2));

        cart.set_quantity("A", Some("M"), 5);

        assert_eq!(cart.lines[0].quantity, 5);
    }

    #[test]
    fn test_set_quantity_floor_removes() {
        let mut cart = Cart::new();
        let product = test_product("A", 1000);

        cart.add_line(line(&product, Some("M"), 2));
        cart.set_quantity("A", Some("M"), 0);
        assert!(cart.is_empty());

        cart.add_line(line(&product, Some("M"), 2));
        cart.set_quantity("A", Some("M"), -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        let product = test_product("A", 1000);
        cart.add_line(line(&product, Some("M"), 2));

        cart.set_quantity("A", Some("L"), 7);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add_line(line(&test_product("A", 1000), None, 2));
        cart.add_line(line(&test_product("B", 2500), None, 1));

        assert_eq!(cart.subtotal_cents(), 4500);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_line(line(&test_product("A", 1000), None, 2));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal_cents(), 0);
    }

    #[test]
    fn test_snapshot_order_empty_cart_is_none() {
        let cart = Cart::new();
        assert!(cart
            .snapshot_order("ORD-TEST-0001".to_string(), Utc::now())
            .is_none());
    }

    #[test]
    fn test_snapshot_order_captures_lines_and_total() {
        let mut cart = Cart::new();
        cart.add_line(line(&test_product("A", 1000), Some("M"), 2));
        cart.add_line(line(&test_product("B", 2500), None, 1));

        let placed_at = Utc::now();
        let order = cart
            .snapshot_order("ORD-TEST-0001".to_string(), placed_at)
            .unwrap();

        assert_eq!(order.order_number, "ORD-TEST-0001");
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.total_cents, 4500);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.created_at, placed_at);
        assert_eq!(
            order.estimated_delivery_at,
            placed_at + Duration::days(DELIVERY_OFFSET_DAYS)
        );

        // Snapshot does not clear the cart; the session layer does that
        // after persisting.
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_snapshot_is_independent_of_later_mutations() {
        let mut cart = Cart::new();
        cart.add_line(line(&test_product("A", 1000), Some("M"), 2));

        let order = cart
            .snapshot_order("ORD-TEST-0001".to_string(), Utc::now())
            .unwrap();

        cart.clear();
        cart.add_line(line(&test_product("B", 2500), None, 3));
        cart.set_quantity("B", None, 9);

        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].product_id, "A");
        assert_eq!(order.lines[0].quantity, 2);
        assert_eq!(order.total_cents, 2000);
    }
}
