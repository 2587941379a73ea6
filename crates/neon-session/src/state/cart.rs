//! # Cart State
//!
//! Owns the live cart for the session.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. All mutations run to completion under the lock before any other
//!    mutation can be observed
//!
//! ## Change Notifications
//! Every mutation publishes fresh [`CartTotals`] on a `tokio::sync::watch`
//! channel. UI layers subscribe once and re-render the cart badge whenever
//! the value changes, instead of polling.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use neon_core::Cart;

/// Cart totals summary for responses and change notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct lines.
    pub line_count: usize,

    /// Total quantity across all lines (the cart badge number).
    pub total_quantity: i64,

    /// Sum of unit price × quantity across all lines.
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

/// Session-owned cart state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>`:
/// - `Arc`: shared ownership across tasks
/// - `Mutex`: only one task mutates the cart at a time
///
/// ## Why Not RwLock?
/// Cart operations are quick, and most operations modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    totals_tx: watch::Sender<CartTotals>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        let cart = Cart::new();
        let (totals_tx, _totals_rx) = watch::channel(CartTotals::from(&cart));

        CartState {
            cart: Arc::new(Mutex::new(cart)),
            totals_tx,
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart, then publishes
    /// fresh totals to all subscribers.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_line(line));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        let result = f(&mut cart);
        self.totals_tx.send_replace(CartTotals::from(&*cart));
        result
    }

    /// Returns the current totals without taking a closure.
    pub fn totals(&self) -> CartTotals {
        self.with_cart(|cart| CartTotals::from(cart))
    }

    /// Subscribes to cart change notifications.
    ///
    /// The receiver yields the totals as of subscription time immediately,
    /// then a new value after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<CartTotals> {
        self.totals_tx.subscribe()
    }
}

impl Default for CartState {
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
    use neon_core::{CartLine, Product};

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            slug: format!("product-{}", id),
            name: format!("Product {}", id),
            category: "tees".to_string(),
            price_cents,
            image_ref: "👕".to_string(),
            sizes: vec![],
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_totals_track_mutations() {
        let state = CartState::new();
        assert_eq!(state.totals(), CartTotals::default());

        state.with_cart_mut(|cart| {
            cart.add_line(CartLine::from_product(&test_product("A", 1000), None, 2));
        });

        let totals = state.totals();
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.subtotal_cents, 2000);
    }

    #[test]
    fn test_subscribers_see_updates() {
        let state = CartState::new();
        let rx = state.subscribe();

        assert_eq!(rx.borrow().total_quantity, 0);

        state.with_cart_mut(|cart| {
            cart.add_line(CartLine::from_product(&test_product("A", 1000), None, 3));
        });

        assert_eq!(rx.borrow().total_quantity, 3);
        assert_eq!(rx.borrow().subtotal_cents, 3000);
    }
}
