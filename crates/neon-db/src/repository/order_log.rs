//! # Order Log Repository
//!
//! The persisted order history: an append-only, most-recent-first list of
//! order snapshots, stored WHOLESALE as one JSON array under a single key
//! in the key-value store.
//!
//! ## Access Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Log Access                                     │
//! │                                                                         │
//! │  checkout / cancel                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load()  ──► read entire list ──► mutate in memory ──► save()          │
//! │                                                        (write entire   │
//! │                                                         list back)     │
//! │                                                                         │
//! │  NOT ATOMIC: two concurrent writers would be last-writer-wins.         │
//! │  Accepted for the single-actor session model this store serves.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Defensive Loading
//! A missing key or a payload that fails to parse loads as the EMPTY list.
//! Order history is display data; refusing to start over a corrupt entry
//! would be worse than starting fresh.

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use crate::repository::kv::KvRepository;
use neon_core::Order;

/// The key-value entry the serialized order list lives under.
pub const ORDER_LOG_KEY: &str = "orders";

/// Repository for the persisted order list.
#[derive(Debug, Clone)]
pub struct OrderLogRepository {
    kv: KvRepository,
}

impl OrderLogRepository {
    /// Creates a new OrderLogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderLogRepository {
            kv: KvRepository::new(pool),
        }
    }

    /// Loads the full order list, most recent first.
    ///
    /// Missing or malformed stored content yields `Ok(vec![])`, never an
    /// error (defensive default-to-empty).
    pub async fn load(&self) -> DbResult<Vec<Order>> {
        let raw = self.kv.get(ORDER_LOG_KEY).await?;

        let orders = match raw {
            None => Vec::new(),
            Some(payload) => match serde_json::from_str::<Vec<Order>>(&payload) {
                Ok(orders) => orders,
                Err(e) => {
                    warn!(error = %e, "Stored order list is malformed, treating as empty");
                    Vec::new()
                }
            },
        };

        debug!(count = orders.len(), "Loaded order log");
        Ok(orders)
    }

    /// Writes the full order list back wholesale.
    pub async fn save(&self, orders: &[Order]) -> DbResult<()> {
        let payload =
            serde_json::to_string(orders).map_err(|e| DbError::Serialization(e.to_string()))?;

        self.kv.put(ORDER_LOG_KEY, &payload).await?;

        debug!(count = orders.len(), "Saved order log");
        Ok(())
    }

    /// Prepends a new order to the log (most recent first).
    ///
    /// Load-modify-save; see the module docs for the atomicity caveat.
    pub async fn prepend(&self, order: Order) -> DbResult<()> {
        let mut orders = self.load().await?;
        orders.insert(0, order);
        self.save(&orders).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::{Duration, Utc};
    use neon_core::{OrderLine, OrderStatus, DELIVERY_OFFSET_DAYS};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn test_order(order_number: &str, total_cents: i64) -> Order {
        let placed_at = Utc::now();
        Order {
            order_number: order_number.to_string(),
            status: OrderStatus::Processing,
            total_cents,
            lines: vec![OrderLine {
                product_id: "p1".to_string(),
                variant: Some("M".to_string()),
                name: "Urban Streetwear Hoodie".to_string(),
                image_ref: "👕".to_string(),
                unit_price_cents: total_cents,
                quantity: 1,
            }],
            created_at: placed_at,
            estimated_delivery_at: placed_at + Duration::days(DELIVERY_OFFSET_DAYS),
        }
    }

    #[tokio::test]
    async fn test_load_empty_log() {
        let db = test_db().await;
        assert!(db.order_log().load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_prepend_is_most_recent_first() {
        let db = test_db().await;
        let log = db.order_log();

        log.prepend(test_order("ORD-0001", 7900)).await.unwrap();
        log.prepend(test_order("ORD-0002", 12900)).await.unwrap();

        let orders = log.load().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_number, "ORD-0002");
        assert_eq!(orders[1].order_number, "ORD-0001");
    }

    #[tokio::test]
    async fn test_save_and_reload_roundtrip() {
        let db = test_db().await;
        let log = db.order_log();

        let mut orders = vec![test_order("ORD-0001", 7900)];
        log.save(&orders).await.unwrap();

        orders[0].status = OrderStatus::Cancelled;
        log.save(&orders).await.unwrap();

        let reloaded = log.load().await.unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].status, OrderStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_malformed_payload_loads_as_empty() {
        let db = test_db().await;

        db.kv()
            .put(ORDER_LOG_KEY, "{not valid json!")
            .await
            .unwrap();

        assert!(db.order_log().load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_array_payload_loads_as_empty() {
        let db = test_db().await;

        db.kv()
            .put(ORDER_LOG_KEY, r#"{"orderNumber":"ORD-1"}"#)
            .await
            .unwrap();

        assert!(db.order_log().load().await.unwrap().is_empty());
    }
}
