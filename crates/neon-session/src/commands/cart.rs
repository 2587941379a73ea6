//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Payment  │────►│  Placed  │       │
//! │  │  Cart    │     │          │     │  (sim.)  │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                        │
//! │                   update_cart_item  (order.rs)                         │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Removing or re-quantifying a line that is not in the cart is a silent
//! no-op, never an error: the command just returns the unchanged cart.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SessionError, SessionResult};
use crate::state::{CartState, CartTotals, ConfigState, DbState};
use neon_core::validation::{validate_coupon_code, validate_product_id, validate_quantity};
use neon_core::{pricing, CartLine, CoreError, PricingQuote};

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&neon_core::Cart> for CartResponse {
    fn from(cart: &neon_core::Cart) -> Self {
        CartResponse {
            lines: cart.lines.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with lines and calculated totals
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|cart| CartResponse::from(cart))
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - If a line with the same `(product_id, variant)` is already in the cart:
///   its quantity increases; its frozen snapshot is left untouched
/// - Otherwise a new line is appended with price/name/image frozen from the
///   catalog at this moment
///
/// ## Arguments
/// * `product_id` - Catalog product UUID
/// * `variant` - Chosen size; required when the product carries sizes
/// * `quantity` - Quantity to add (default: 1)
///
/// ## Returns
/// Updated cart with all lines and totals
pub async fn add_to_cart(
    db: &DbState,
    cart: &CartState,
    product_id: &str,
    variant: Option<&str>,
    quantity: Option<i64>,
) -> SessionResult<CartResponse> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, ?variant, quantity, "add_to_cart command");

    validate_product_id(product_id)?;
    validate_quantity(quantity)?;

    let product = db
        .inner()
        .products()
        .get_by_id(product_id)
        .await?
        .ok_or_else(|| SessionError::not_found("Product", product_id))?;

    if !product.is_active {
        return Err(CoreError::ProductInactive(product.id).into());
    }

    // Sized products need an explicit size; one-size products take none.
    match variant {
        Some(size) if !product.has_size(size) => {
            return Err(neon_core::ValidationError::NotAllowed {
                field: "variant".to_string(),
                allowed: product.sizes.clone(),
            }
            .into());
        }
        None if !product.sizes.is_empty() => {
            return Err(SessionError::validation("A size must be chosen for this product"));
        }
        _ => {}
    }

    let line = CartLine::from_product(&product, variant.map(str::to_string), quantity);

    Ok(cart.with_cart_mut(|c| {
        c.add_line(line);
        CartResponse::from(&*c)
    }))
}

/// Replaces the quantity of a line in the cart.
///
/// ## Behavior
/// - Quantity <= 0: removes the line
/// - Line absent: silent no-op
///
/// ## Returns
/// Updated cart
pub fn update_cart_item(
    cart: &CartState,
    product_id: &str,
    variant: Option<&str>,
    quantity: i64,
) -> SessionResult<CartResponse> {
    debug!(product_id = %product_id, ?variant, quantity, "update_cart_item command");

    validate_product_id(product_id)?;

    Ok(cart.with_cart_mut(|c| {
        c.set_quantity(product_id, variant, quantity);
        CartResponse::from(&*c)
    }))
}

/// Removes a line from the cart. Silent no-op if the line is absent.
///
/// ## Returns
/// Updated cart
pub fn remove_from_cart(
    cart: &CartState,
    product_id: &str,
    variant: Option<&str>,
) -> SessionResult<CartResponse> {
    debug!(product_id = %product_id, ?variant, "remove_from_cart command");

    validate_product_id(product_id)?;

    Ok(cart.with_cart_mut(|c| {
        c.remove_line(product_id, variant);
        CartResponse::from(&*c)
    }))
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - User empties the cart
/// - After an order is placed (new session)
///
/// ## Returns
/// Empty cart
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

/// Computes the display pricing quote for the current cart.
///
/// ## Arguments
/// * `coupon_code` - Optional coupon the customer typed; must be a code the
///   store recognizes
///
/// ## Returns
/// Subtotal, discount, shipping and total for display. The quote never
/// changes what an order freezes at checkout.
pub fn quote_cart(
    cart: &CartState,
    config: &ConfigState,
    coupon_code: Option<&str>,
) -> SessionResult<PricingQuote> {
    debug!(?coupon_code, "quote_cart command");

    let coupon = match coupon_code {
        None => None,
        Some(code) => {
            validate_coupon_code(code)?;
            Some(
                config
                    .find_coupon(code)
                    .ok_or_else(|| CoreError::UnknownCoupon(code.to_string()))?
                    .clone(),
            )
        }
    };

    Ok(cart.with_cart(|c| pricing::quote(c, coupon.as_ref())))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{seeded_storefront, HOODIE_ID, SNEAKERS_ID};
    use neon_core::{FLAT_SHIPPING_CENTS, MAX_LINE_QUANTITY};

    #[tokio::test]
    async fn test_add_to_cart_merges_by_identity() {
        let store = seeded_storefront().await;

        add_to_cart(&store.db, &store.cart, HOODIE_ID, Some("M"), Some(1))
            .await
            .unwrap();
        let response = add_to_cart(&store.db, &store.cart, HOODIE_ID, Some("M"), Some(2))
            .await
            .unwrap();

        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].quantity, 3);
        assert_eq!(response.totals.total_quantity, 3);
    }

    #[tokio::test]
    async fn test_add_to_cart_distinct_variants() {
        let store = seeded_storefront().await;

        add_to_cart(&store.db, &store.cart, HOODIE_ID, Some("M"), None)
            .await
            .unwrap();
        let response = add_to_cart(&store.db, &store.cart, HOODIE_ID, Some("L"), None)
            .await
            .unwrap();

        assert_eq!(response.lines.len(), 2);
    }

    #[tokio::test]
    async fn test_add_to_cart_unknown_product() {
        let store = seeded_storefront().await;

        let err = add_to_cart(&store.db, &store.cart, "no-such-id", None, None)
            .await
            .unwrap_err();

        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_add_to_cart_rejects_bad_quantity() {
        let store = seeded_storefront().await;

        assert!(add_to_cart(&store.db, &store.cart, SNEAKERS_ID, None, Some(0))
            .await
            .is_err());
        assert!(add_to_cart(&store.db, &store.cart, SNEAKERS_ID, None, Some(-3))
            .await
            .is_err());
        assert!(add_to_cart(
            &store.db,
            &store.cart,
            SNEAKERS_ID,
            None,
            Some(MAX_LINE_QUANTITY + 1)
        )
        .await
        .is_err());
    }

    #[tokio::test]
    async fn test_add_to_cart_enforces_size_rules() {
        let store = seeded_storefront().await;

        // Sized product without a size
        assert!(add_to_cart(&store.db, &store.cart, HOODIE_ID, None, None)
            .await
            .is_err());

        // Size the product doesn't carry
        assert!(
            add_to_cart(&store.db, &store.cart, HOODIE_ID, Some("XXXL"), None)
                .await
                .is_err()
        );

        // One-size product takes no variant
        assert!(add_to_cart(&store.db, &store.cart, SNEAKERS_ID, None, None)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_update_and_remove_absent_are_noops() {
        let store = seeded_storefront().await;
        add_to_cart(&store.db, &store.cart, HOODIE_ID, Some("M"), Some(2))
            .await
            .unwrap();

        let after_update = update_cart_item(&store.cart, HOODIE_ID, Some("L"), 5).unwrap();
        assert_eq!(after_update.lines.len(), 1);
        assert_eq!(after_update.lines[0].quantity, 2);

        let after_remove = remove_from_cart(&store.cart, "ghost", None).unwrap();
        assert_eq!(after_remove.lines.len(), 1);
    }

    #[tokio::test]
    async fn test_update_quantity_floor_removes() {
        let store = seeded_storefront().await;
        add_to_cart(&store.db, &store.cart, HOODIE_ID, Some("M"), Some(2))
            .await
            .unwrap();

        let response = update_cart_item(&store.cart, HOODIE_ID, Some("M"), 0).unwrap();
        assert!(response.lines.is_empty());
    }

    #[tokio::test]
    async fn test_quote_cart_with_coupon_and_shipping() {
        let store = seeded_storefront().await;
        // Hoodie $79.00 x 1 → under the free-shipping threshold
        add_to_cart(&store.db, &store.cart, HOODIE_ID, Some("M"), Some(1))
            .await
            .unwrap();

        let quote = quote_cart(&store.cart, &store.config, Some("SAVE10")).unwrap();
        assert_eq!(quote.subtotal_cents, 7900);
        assert_eq!(quote.discount_cents, 790);
        assert_eq!(quote.shipping_cents, FLAT_SHIPPING_CENTS);
        assert_eq!(quote.total_cents, 7900 - 790 + FLAT_SHIPPING_CENTS);

        assert!(quote_cart(&store.cart, &store.config, Some("NOPE")).is_err());
        assert!(quote_cart(&store.cart, &store.config, Some("bad code!")).is_err());
    }
}
