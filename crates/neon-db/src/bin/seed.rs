//! # Catalog Seeder
//!
//! Populates the database with the static storefront catalog.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p neon-db --bin seed
//!
//! # Specify database path
//! cargo run -p neon-db --bin seed -- --db ./data/neon.db
//! ```
//!
//! The catalog is fixed content: each run inserts the same products. Seeding
//! a database that already has products is skipped to avoid duplicates.

use std::env;

use chrono::Utc;
use neon_core::Product;
use neon_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// The storefront catalog: (slug, name, category, price_cents, image_ref, sized).
///
/// Apparel carries the standard size run; sneakers, caps and bags are
/// one-size entries.
const CATALOG: &[(&str, &str, &str, i64, &str, bool)] = &[
    (
        "urban-streetwear-hoodie",
        "Urban Streetwear Hoodie",
        "hoodies",
        7900,
        "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=400&h=400&fit=crop&crop=center",
        true,
    ),
    (
        "fresh-kicks-sneakers",
        "Fresh Kicks Sneakers",
        "sneakers",
        12900,
        "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400&h=400&fit=crop&crop=center",
        false,
    ),
    (
        "denim-jacket-classic",
        "Denim Jacket Classic",
        "jackets",
        9900,
        "https://images.unsplash.com/photo-1544022613-e87ca75a784a?w=400&h=400&fit=crop&crop=center",
        true,
    ),
    (
        "street-style-pants",
        "Street Style Pants",
        "jeans",
        6900,
        "https://images.unsplash.com/photo-1473966968600-fa801b869a1a?w=400&h=400&fit=crop&crop=center",
        true,
    ),
    (
        "casual-button-shirt",
        "Casual Button Shirt",
        "shirts",
        5900,
        "https://images.unsplash.com/photo-1602810318383-e386cc2a3ccf?w=400&h=400&fit=crop&crop=center",
        true,
    ),
    (
        "sport-cap-essential",
        "Sport Cap Essential",
        "accessories",
        2900,
        "https://images.unsplash.com/photo-1588850561407-ed78c282e89b?w=400&h=400&fit=crop&crop=center",
        false,
    ),
    (
        "premium-tech-tee",
        "Premium Tech Tee",
        "shirts",
        4500,
        "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop&crop=center",
        true,
    ),
    (
        "designer-backpack",
        "Designer Backpack",
        "accessories",
        8900,
        "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400&h=400&fit=crop&crop=center",
        false,
    ),
];

/// The standard apparel size run.
const SIZE_RUN: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./neon_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Neon Street Catalog Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./neon_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Neon Street Catalog Seeder");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing products
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    let mut seeded = 0;
    for (slug, name, category, price_cents, image_ref, sized) in CATALOG {
        let product = catalog_product(slug, name, category, *price_cents, image_ref, *sized);

        if let Err(e) = db.products().insert(&product).await {
            eprintln!("Failed to insert {}: {}", slug, e);
            continue;
        }

        println!("  {} ${}.{:02}", name, price_cents / 100, price_cents % 100);
        seeded += 1;
    }

    println!();
    println!("✓ Seeded {} products", seeded);

    Ok(())
}

/// Builds a catalog product from a seed row.
fn catalog_product(
    slug: &str,
    name: &str,
    category: &str,
    price_cents: i64,
    image_ref: &str,
    sized: bool,
) -> Product {
    Product {
        id: Uuid::new_v4().to_string(),
        slug: slug.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price_cents,
        image_ref: image_ref.to_string(),
        sizes: if sized {
            SIZE_RUN.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        },
        is_active: true,
        created_at: Utc::now(),
    }
}
