//! # Pricing Module
//!
//! Display-side pricing derivation for the cart page: coupon discount and
//! shipping on top of the raw subtotal.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart subtotal: $87.00                                                  │
//! │       │                                                                 │
//! │       ├── coupon SAVE10 (1000 bps) ──► discount  $8.70                  │
//! │       │                                                                 │
//! │       ├── subtotal ≤ $100.00       ──► shipping $10.00                  │
//! │       │   (free above the threshold)                                    │
//! │       ▼                                                                 │
//! │  Quote total: $88.30                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The quote is a VIEW over the cart. The total frozen into an order at
//! checkout remains the plain `unit_price × quantity` sum; the quote never
//! feeds into persisted order totals.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;
use crate::{FLAT_SHIPPING_CENTS, FREE_SHIPPING_THRESHOLD_CENTS};

// =============================================================================
// Coupon
// =============================================================================

/// A percentage-off coupon recognized by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// The code the customer types (matched case-sensitively, e.g. "SAVE10").
    pub code: String,

    /// Discount in basis points (1000 = 10% off the subtotal).
    pub discount_bps: u32,
}

// =============================================================================
// Pricing Quote
// =============================================================================

/// Derived pricing breakdown for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingQuote {
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
}

impl PricingQuote {
    /// Whether the order ships for free.
    #[inline]
    pub fn free_shipping(&self) -> bool {
        self.shipping_cents == 0
    }
}

/// Computes the pricing quote for a cart with an optional coupon applied.
///
/// ## Rules
/// - Discount: `coupon.discount_bps` of the raw subtotal
/// - Shipping: flat fee, waived once the raw subtotal exceeds the
///   free-shipping threshold; an empty cart ships nothing and pays nothing
/// - Total: `subtotal - discount + shipping`
pub fn quote(cart: &Cart, coupon: Option<&Coupon>) -> PricingQuote {
    let subtotal = Money::from_cents(cart.subtotal_cents());

    let discount = match coupon {
        Some(c) => subtotal.percentage(c.discount_bps),
        None => Money::zero(),
    };

    let shipping = if subtotal.is_zero() || subtotal.cents() > FREE_SHIPPING_THRESHOLD_CENTS {
        Money::zero()
    } else {
        Money::from_cents(FLAT_SHIPPING_CENTS)
    };

    PricingQuote {
        subtotal_cents: subtotal.cents(),
        discount_cents: discount.cents(),
        shipping_cents: shipping.cents(),
        total_cents: (subtotal - discount + shipping).cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
