//! # neon-session: Session State + Command Layer
//!
//! Owns the live state of one storefront session and exposes the commands a
//! frontend drives.
//!
//! ## Module Organization
//! ```text
//! neon_session/
//! ├── lib.rs          ◄─── You are here (Storefront construction)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── cart.rs     ◄─── Cart state + change notifications
//! │   ├── wishlist.rs ◄─── Wishlist state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── wishlist.rs ◄─── Wishlist commands
//! │   └── order.rs    ◄─── place/list/cancel order commands
//! ├── payment.rs      ◄─── Simulated payment pause
//! └── error.rs        ◄─── Session error type for commands
//! ```
//!
//! ## No Ambient State
//! The [`Storefront`] is constructed ONCE at application start and threaded
//! down explicitly. Commands take references to exactly the state objects
//! they need. There are no globals, no singletons, nothing reachable from
//! "anywhere".
//!
//! ```rust,ignore
//! use neon_db::DbConfig;
//! use neon_session::{commands, ConfigState, Storefront};
//!
//! let store = Storefront::open(DbConfig::new("./neon.db"), ConfigState::from_env()).await?;
//!
//! commands::add_to_cart(&store.db, &store.cart, &product_id, Some("M"), None).await?;
//! let receipt = commands::place_order(
//!     &store.db, &store.cart, &store.config,
//!     neon_session::PaymentMethod::CashOnDelivery,
//! ).await?;
//! ```

pub mod commands;
pub mod error;
pub mod payment;
pub mod state;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{ErrorCode, SessionError, SessionResult};
pub use payment::{PaymentMethod, PaymentReceipt};
pub use state::{CartState, CartTotals, ConfigState, DbState, WishlistState};

use neon_db::{Database, DbConfig};
use tracing::info;

// =============================================================================
// Storefront
// =============================================================================

/// The owned root of one storefront session.
///
/// Bundles the four state objects the commands operate on. Construct it once
/// at application start with [`Storefront::open`] and pass references down;
/// the fields are public precisely so commands can borrow exactly what they
/// need.
#[derive(Debug)]
pub struct Storefront {
    /// Persistence (catalog + order log).
    pub db: DbState,

    /// The live cart. Memory-only; not persisted across restarts.
    pub cart: CartState,

    /// The session wishlist. Memory-only, like the cart.
    pub wishlist: WishlistState,

    /// Read-only store configuration.
    pub config: ConfigState,
}

impl Storefront {
    /// Opens the storefront: connects the database (running migrations) and
    /// initializes empty session state.
    ///
    /// ## Startup Sequence
    /// 1. Connect to SQLite (WAL mode), run pending migrations
    /// 2. Create an empty cart and wishlist
    /// 3. Freeze the configuration
    pub async fn open(db_config: DbConfig, config: ConfigState) -> SessionResult<Self> {
        let db = Database::new(db_config).await?;

        info!(store_name = %config.store_name, "Storefront session ready");

        Ok(Storefront {
            db: DbState::new(db),
            cart: CartState::new(),
            wishlist: WishlistState::new(),
            config,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_storefront_in_memory() {
        let store = Storefront::open(
            DbConfig::in_memory(),
            ConfigState::default().without_payment_delay(),
        )
        .await
        .unwrap();

        assert!(store.db.inner().health_check().await);
        assert_eq!(store.cart.totals(), CartTotals::default());
    }
}
