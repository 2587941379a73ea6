//! # Wishlist State
//!
//! Owns the session wishlist. Same `Arc<Mutex<T>>` shape as the cart state,
//! without change notifications (the wishlist has no badge to keep live).

use std::sync::{Arc, Mutex};

use neon_core::Wishlist;

/// Session-owned wishlist state.
#[derive(Debug, Default)]
pub struct WishlistState {
    wishlist: Arc<Mutex<Wishlist>>,
}

impl WishlistState {
    /// Creates a new empty wishlist state.
    pub fn new() -> Self {
        WishlistState {
            wishlist: Arc::new(Mutex::new(Wishlist::new())),
        }
    }

    /// Executes a function with read access to the wishlist.
    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let wishlist = self.wishlist.lock().expect("Wishlist mutex poisoned");
        f(&wishlist)
    }

    /// Executes a function with write access to the wishlist.
    pub fn with_wishlist_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Wishlist) -> R,
    {
        let mut wishlist = self.wishlist.lock().expect("Wishlist mutex poisoned");
        f(&mut wishlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use neon_core::{Product, WishlistEntry};

    #[test]
    fn test_wishlist_state_roundtrip() {
        let state = WishlistState::new();
        let product = Product {
            id: "p1".to_string(),
            slug: "kicks".to_string(),
            name: "Fresh Kicks Sneakers".to_string(),
            category: "sneakers".to_string(),
            price_cents: 12900,
            image_ref: "👟".to_string(),
            sizes: vec![],
            is_active: true,
            created_at: Utc::now(),
        };

        state.with_wishlist_mut(|w| w.add(WishlistEntry::from_product(&product)));

        assert!(state.with_wishlist(|w| w.contains("p1")));
        assert_eq!(state.with_wishlist(|w| w.len()), 1);
    }
}
