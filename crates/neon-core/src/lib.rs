//! # neon-core: Pure Business Logic for the Neon Street storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Neon Street Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront Frontend (web)                       │   │
//! │  │    Shop UI ──► Cart UI ──► Checkout UI ──► Orders UI            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 neon-session (command layer)                    │   │
//! │  │    add_to_cart, place_order, cancel_order, etc.                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ neon-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  types   │ │  money   │ │   cart   │ │ wishlist/pricing │  │   │
//! │  │   │ Product  │ │  Money   │ │   Cart   │ │ Wishlist, quote  │  │   │
//! │  │   │  Order   │ │          │ │ CartLine │ │                  │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 neon-db (Persistence Layer)                     │   │
//! │  │        SQLite catalog, key-value store, order log               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, OrderLine, OrderStatus)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The live cart: mutations, derived totals, checkout snapshot
//! - [`wishlist`] - Saved products with set semantics
//! - [`pricing`] - Coupon + shipping quote derivation
//! - [`error`] - Domain error types
//! - [`validation`] - Command-boundary input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic given its inputs
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Snapshots over references**: carts and orders copy catalog data
//!    by value at the moment it matters

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use neon_core::Money` instead of
// `use neon_core::money::Money`

pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{quote, Coupon, PricingQuote};
pub use types::*;
pub use wishlist::{Wishlist, WishlistEntry};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Days between placing an order and its estimated delivery.
pub const DELIVERY_OFFSET_DAYS: i64 = 7;

/// Flat shipping fee in cents ($10.00).
pub const FLAT_SHIPPING_CENTS: i64 = 1_000;

/// Raw subtotal in cents above which shipping is free ($100.00).
///
/// Strictly above: a cart at exactly the threshold still pays shipping.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 10_000;

/// Maximum quantity of a single line in the cart.
///
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
