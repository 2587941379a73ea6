//! # Wishlist Commands
//!
//! Commands for saving and unsaving products. Set semantics throughout:
//! saving twice is the same as saving once.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SessionError, SessionResult};
use crate::state::{DbState, WishlistState};
use neon_core::validation::validate_product_id;
use neon_core::{CoreError, WishlistEntry};

/// Wishlist response: saved entries plus the count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub entries: Vec<WishlistEntry>,
    pub count: usize,
}

impl From<&neon_core::Wishlist> for WishlistResponse {
    fn from(wishlist: &neon_core::Wishlist) -> Self {
        WishlistResponse {
            entries: wishlist.entries().to_vec(),
            count: wishlist.len(),
        }
    }
}

/// Gets the current wishlist contents.
pub fn get_wishlist(wishlist: &WishlistState) -> WishlistResponse {
    debug!("get_wishlist command");
    wishlist.with_wishlist(|wishlist| WishlistResponse::from(wishlist))
}

/// Saves a catalog product to the wishlist.
///
/// ## Behavior
/// - Product already saved: no-op (set semantics, not counted)
/// - Otherwise: the product's name/price/image are frozen into the entry
///
/// ## Returns
/// Updated wishlist
pub async fn add_to_wishlist(
    db: &DbState,
    wishlist: &WishlistState,
    product_id: &str,
) -> SessionResult<WishlistResponse> {
    debug!(product_id = %product_id, "add_to_wishlist command");

    validate_product_id(product_id)?;

    let product = db
        .inner()
        .products()
        .get_by_id(product_id)
        .await?
        .ok_or_else(|| SessionError::not_found("Product", product_id))?;

    if !product.is_active {
        return Err(CoreError::ProductInactive(product.id).into());
    }

    let entry = WishlistEntry::from_product(&product);

    Ok(wishlist.with_wishlist_mut(|w| {
        w.add(entry);
        WishlistResponse::from(&*w)
    }))
}

/// Removes a product from the wishlist. Silent no-op if not saved.
///
/// ## Returns
/// Updated wishlist
pub fn remove_from_wishlist(
    wishlist: &WishlistState,
    product_id: &str,
) -> SessionResult<WishlistResponse> {
    debug!(product_id = %product_id, "remove_from_wishlist command");

    validate_product_id(product_id)?;

    Ok(wishlist.with_wishlist_mut(|w| {
        w.remove(product_id);
        WishlistResponse::from(&*w)
    }))
}

/// Pure membership query: is the product saved?
pub fn is_in_wishlist(wishlist: &WishlistState, product_id: &str) -> bool {
    wishlist.with_wishlist(|w| w.contains(product_id))
}

// =============================================================================
// Unit Tests
// =============================================================================
