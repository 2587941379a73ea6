//! # Domain Types
//!
//! Core domain types used throughout the Neon Street storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │   OrderLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  order_number   │   │  product_id     │       │
//! │  │  slug (business)│   │  status         │   │  variant        │       │
//! │  │  name           │   │  total_cents    │   │  quantity       │       │
//! │  │  price_cents    │   │  lines          │   │  unit_price     │       │
//! │  │  sizes          │   │  delivery est.  │   │  (snapshots)    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │                        ┌─────────────────┐                              │
//! │                        │  OrderStatus    │                              │
//! │                        │  ─────────────  │                              │
//! │                        │  Processing     │                              │
//! │                        │  Shipped        │                              │
//! │                        │  Delivered      │                              │
//! │                        │  Cancelled      │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Catalog entities have:
//! - `id`: UUID v4 - immutable, used for database relations
//! - Business ID: (slug, order_number) - human-readable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog product available in the storefront.
///
/// The catalog is a static, read-only data source: products are seeded once
/// and never mutated at runtime. Carts and orders carry snapshots of the
/// fields they need, never references into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// URL-friendly business identifier.
    pub slug: String,

    /// Display name shown in listings and the cart.
    pub name: String,

    /// Category label ("hoodies", "sneakers", ...).
    pub category: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Image reference (path or emoji placeholder).
    pub image_ref: String,

    /// Available size variants; empty for one-size products.
    pub sizes: Vec<String>,

    /// Whether the product can currently be added to a cart (soft delete).
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether `size` is one of this product's variants.
    ///
    /// One-size products (empty `sizes`) accept no variant at all.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The fulfilment status of a placed order.
///
/// Orders start at `Processing`. The only transition this system performs
/// itself is a cancel, allowed while the order has not been delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, not yet shipped.
    Processing,
    /// Order handed to the carrier.
    Shipped,
    /// Order arrived; terminal.
    Delivered,
    /// Order cancelled by the customer; terminal.
    Cancelled,
}

impl OrderStatus {
    /// Whether an order in this status may still be cancelled.
    ///
    /// Matches the storefront rule: in-flight orders (processing or shipped)
    /// can be cancelled, delivered and already-cancelled ones cannot.
    #[inline]
    pub const fn is_cancellable(&self) -> bool {
        matches!(self, OrderStatus::Processing | OrderStatus::Shipped)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Processing
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// A line item frozen into an order at checkout time.
///
/// Uses the snapshot pattern: product data is copied by value so the order
/// renders identically forever, regardless of later catalog or cart changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Catalog product this line was created from.
    pub product_id: String,

    /// Size variant chosen, if the product has sizes.
    pub variant: Option<String>,

    /// Product name at time of checkout (frozen).
    pub name: String,

    /// Image reference at time of checkout (frozen).
    pub image_ref: String,

    /// Unit price in cents at time of checkout (frozen).
    pub unit_price_cents: i64,

    /// Quantity ordered.
    pub quantity: i64,
}

impl OrderLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

// =============================================================================
// Order
// =============================================================================

/// An immutable snapshot of a cart, created at checkout.
///
/// ## Lifecycle
/// ```text
/// checkout ──► Order { status: Processing } ──► prepended to the order log
///                      │
///                      └── cancel_order ──► status = Cancelled
/// ```
///
/// Orders are value copies: once placed, nothing the live cart does can
/// change them. The order log never deletes an order; a cancel only flips
/// `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Human-readable, best-effort-unique order token (e.g. `ORD-20260806-4821`).
    pub order_number: String,

    /// Fulfilment status; starts at `Processing`.
    pub status: OrderStatus,

    /// Sum of `unit_price_cents × quantity` over `lines`, captured at checkout.
    pub total_cents: i64,

    /// Value copy of the cart lines at checkout time.
    pub lines: Vec<OrderLine>,

    /// When the order was placed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Estimated delivery: `created_at` plus a fixed offset.
    #[ts(as = "String")]
    pub estimated_delivery_at: DateTime<Utc>,
}

impl Order {
    /// Returns the captured total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
