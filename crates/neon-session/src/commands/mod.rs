//! # Command Module
//!
//! The operations a storefront frontend drives, grouped by concern.
//!
//! Commands take explicit references to the state objects they need:
//! nothing ambient, nothing global. The caller owns the states (usually
//! via [`crate::Storefront`]) and threads them down.
//!
//! ## Commands
//! - [`cart`] - get/add/update/remove/clear + pricing quote
//! - [`wishlist`] - save/unsave/membership
//! - [`order`] - place_order, list_orders, cancel_order

pub mod cart;
pub mod order;
pub mod wishlist;

pub use cart::{
    add_to_cart, clear_cart, get_cart, quote_cart, remove_from_cart, update_cart_item,
    CartResponse,
};
pub use order::{cancel_order, list_orders, place_order, OrderReceipt, ReceiptLine};
pub use wishlist::{
    add_to_wishlist, get_wishlist, is_in_wishlist, remove_from_wishlist, WishlistResponse,
};
