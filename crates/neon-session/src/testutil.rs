//! Shared test fixtures: an in-memory storefront with a small seeded catalog.

use chrono::Utc;

use crate::state::{CartState, ConfigState, DbState, WishlistState};
use crate::Storefront;
use neon_core::Product;
use neon_db::{Database, DbConfig};

/// A sized product ($79.00, S–XL).
pub const HOODIE_ID: &str = "prod-hoodie";

/// A one-size product ($129.00).
pub const SNEAKERS_ID: &str = "prod-kicks";

fn hoodie() -> Product {
    Product {
        id: HOODIE_ID.to_string(),
        slug: "urban-streetwear-hoodie".to_string(),
        name: "Urban Streetwear Hoodie".to_string(),
        category: "hoodies".to_string(),
        price_cents: 7900,
        image_ref: "👕".to_string(),
        sizes: vec![
            "S".to_string(),
            "M".to_string(),
            "L".to_string(),
            "XL".to_string(),
        ],
        is_active: true,
        created_at: Utc::now(),
    }
}

fn sneakers() -> Product {
    Product {
        id: SNEAKERS_ID.to_string(),
        slug: "fresh-kicks-sneakers".to_string(),
        name: "Fresh Kicks Sneakers".to_string(),
        category: "sneakers".to_string(),
        price_cents: 12900,
        image_ref: "👟".to_string(),
        sizes: vec![],
        is_active: true,
        created_at: Utc::now(),
    }
}

/// Builds a storefront over an in-memory database with the two fixture
/// products seeded and the payment pause disabled.
pub async fn seeded_storefront() -> Storefront {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    db.products().insert(&hoodie()).await.unwrap();
    db.products().insert(&sneakers()).await.unwrap();

    Storefront {
        db: DbState::new(db),
        cart: CartState::new(),
        wishlist: WishlistState::new(),
        config: ConfigState::default().without_payment_delay(),
    }
}
