//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! The catalog is effectively static content: it is seeded once (see the
//! `seed` binary) and only read at runtime. There is no update path; a
//! product that should disappear is soft-deleted via `is_active`.

use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use neon_core::Product;

/// Database row shape for a product.
///
/// `sizes` is stored as a JSON array in a TEXT column; it is decoded when
/// converting to the domain [`Product`]. A malformed column decodes as the
/// empty size list rather than failing the whole read.
#[derive(Debug, Clone, FromRow)]
struct ProductRow {
    id: String,
    slug: String,
    name: String,
    category: String,
    price_cents: i64,
    image_ref: String,
    sizes: String,
    is_active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            slug: row.slug,
            name: row.name,
            category: row.category,
            price_cents: row.price_cents,
            image_ref: row.image_ref,
            sizes: serde_json::from_str(&row.sizes).unwrap_or_default(),
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

/// Repository for product catalog operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, slug, name, category, price_cents, image_ref,
                   sizes, is_active, created_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Gets a product by its slug.
    pub async fn get_by_slug(&self, slug: &str) -> DbResult<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, slug, name, category, price_cents, image_ref,
                   sizes, is_active, created_at
            FROM products
            WHERE slug = ?1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Lists all active products, optionally filtered to one category.
    pub async fn list_active(&self, category: Option<&str>) -> DbResult<Vec<Product>> {
        let rows: Vec<ProductRow> = match category {
            Some(category) => {
                sqlx::query_as(
                    r#"
                    SELECT id, slug, name, category, price_cents, image_ref,
                           sizes, is_active, created_at
                    FROM products
                    WHERE is_active = 1 AND category = ?1
                    ORDER BY name
                    "#,
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT id, slug, name, category, price_cents, image_ref,
                           sizes, is_active, created_at
                    FROM products
                    WHERE is_active = 1
                    ORDER BY name
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Inserts a product (used by the seed binary).
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, slug = %product.slug, "Inserting product");

        let sizes = serde_json::to_string(&product.sizes).unwrap_or_else(|_| "[]".to_string());

        sqlx::query(
            r#"
            INSERT INTO products (
                id, slug, name, category, price_cents, image_ref,
                sizes, is_active, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&product.id)
        .bind(&product.slug)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price_cents)
        .bind(&product.image_ref)
        .bind(&sizes)
        .bind(product.is_active)
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts all products (active or not).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Utc;
    use uuid::Uuid;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn test_product(slug: &str, category: &str, active: bool) -> Product {
        Product {
            id: Uuid::new_v4().to_string(),
            slug: slug.to_string(),
            name: format!("Product {}", slug),
            category: category.to_string(),
            price_cents: 7900,
            image_ref: "👕".to_string(),
            sizes: vec!["S".to_string(), "M".to_string()],
            is_active: active,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = test_db().await;
        let repo = db.products();

        let product = test_product("urban-hoodie", "hoodies", true);
        repo.insert(&product).await.unwrap();

        let fetched = repo.get_by_id(&product.id).await.unwrap().unwrap();
        assert_eq!(fetched.slug, "urban-hoodie");
        assert_eq!(fetched.price_cents, 7900);
        assert_eq!(fetched.sizes, vec!["S".to_string(), "M".to_string()]);

        let by_slug = repo.get_by_slug("urban-hoodie").await.unwrap().unwrap();
        assert_eq!(by_slug.id, product.id);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let db = test_db().await;
        assert!(db.products().get_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_active_filters() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&test_product("hoodie-a", "hoodies", true))
            .await
            .unwrap();
        repo.insert(&test_product("hoodie-b", "hoodies", false))
            .await
            .unwrap();
        repo.insert(&test_product("kicks", "sneakers", true))
            .await
            .unwrap();

        let all = repo.list_active(None).await.unwrap();
        assert_eq!(all.len(), 2);

        let hoodies = repo.list_active(Some("hoodies")).await.unwrap();
        assert_eq!(hoodies.len(), 1);
        assert_eq!(hoodies[0].slug, "hoodie-a");

        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_slug_rejected() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&test_product("dup", "hoodies", true))
            .await
            .unwrap();
        let result = repo.insert(&test_product("dup", "hoodies", true)).await;

        assert!(result.is_err());
    }
}
