//! # State Module
//!
//! The owned state of one storefront session.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  Storefront (constructed once at startup, passed down explicitly)      │
//! │          │                                                              │
//! │          ├──────────────────┬──────────────────┬──────────────┐        │
//! │          ▼                  ▼                  ▼              ▼        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌───────────┐  │
//! │  │   DbState    │  │  CartState   │  │WishlistState │  │ConfigState│  │
//! │  │              │  │              │  │              │  │           │  │
//! │  │  Database    │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │ store name│  │
//! │  │  (SQLite     │  │    Cart>>    │  │   Wishlist>> │  │ coupons   │  │
//! │  │   pool)      │  │  + watch ch. │  │              │  │ pay delay │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └───────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • CartState/WishlistState: protected by Arc<Mutex<T>>                 │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod db;
mod wishlist;

pub use cart::{CartState, CartTotals};
pub use config::ConfigState;
pub use db::DbState;
pub use wishlist::WishlistState;
