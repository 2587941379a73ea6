//! # Order Commands
//!
//! Placing, listing and cancelling orders.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      place_order                                        │
//! │                                                                         │
//! │  1. Snapshot the cart ──► Order { status: Processing }                  │
//! │     (empty cart ⇒ return Ok(None); a defined no-op, not an error)      │
//! │                                                                         │
//! │  2. process_payment ──► fixed awaitable pause, always confirms         │
//! │                                                                         │
//! │  3. order_log.prepend ──► load list, insert at front, save wholesale   │
//! │                                                                         │
//! │  4. clear the cart                                                      │
//! │                                                                         │
//! │  Steps 3+4 are not atomic against concurrent mutation. In the          │
//! │  single-actor session model every command runs to completion before    │
//! │  the next one is issued, so the gap is unobservable.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SessionError, SessionResult};
use crate::payment::{process_payment, PaymentMethod};
use crate::state::{CartState, ConfigState, DbState};
use neon_core::{CoreError, Order, OrderStatus};

/// Receipt returned to the frontend after an order is placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_number: String,
    pub store_name: String,
    pub placed_at: String,
    pub estimated_delivery_at: String,
    pub total_cents: i64,
    pub lines: Vec<ReceiptLine>,
}

/// One line on the receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub name: String,
    pub variant: Option<String>,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

impl OrderReceipt {
    fn from_order(order: &Order, store_name: &str) -> Self {
        OrderReceipt {
            order_number: order.order_number.clone(),
            store_name: store_name.to_string(),
            placed_at: order.created_at.to_rfc3339(),
            estimated_delivery_at: order.estimated_delivery_at.to_rfc3339(),
            total_cents: order.total_cents,
            lines: order
                .lines
                .iter()
                .map(|l| ReceiptLine {
                    name: l.name.clone(),
                    variant: l.variant.clone(),
                    quantity: l.quantity,
                    unit_price_cents: l.unit_price_cents,
                    line_total_cents: l.line_total_cents(),
                })
                .collect(),
        }
    }
}

/// Places an order from the current cart.
///
/// ## Behavior
/// - Empty cart: returns `Ok(None)`. No order is produced, the order log is
///   untouched and no error is surfaced. This is the only "failure" of
///   checkout, and it is silent
/// - Otherwise: simulates the payment pause, snapshots the cart into an
///   order, prepends it to the persisted order log, clears the cart and
///   returns the receipt
///
/// ## Arguments
/// * `method` - How the customer chose to pay (simulated either way)
pub async fn place_order(
    db: &DbState,
    cart: &CartState,
    config: &ConfigState,
    method: PaymentMethod,
) -> SessionResult<Option<OrderReceipt>> {
    debug!(?method, "place_order command");

    let order_number = generate_order_number();
    let order = cart.with_cart(|c| c.snapshot_order(order_number, Utc::now()));

    let order = match order {
        Some(order) => order,
        None => {
            debug!("place_order on empty cart: no-op");
            return Ok(None);
        }
    };

    let receipt = process_payment(method, order.total_cents, config.payment_delay()).await;

    db.inner().order_log().prepend(order.clone()).await?;

    cart.with_cart_mut(|c| c.clear());

    info!(
        order_number = %order.order_number,
        total_cents = order.total_cents,
        lines = order.lines.len(),
        confirmed_at = %receipt.confirmed_at,
        "Order placed"
    );

    Ok(Some(OrderReceipt::from_order(&order, &config.store_name)))
}

/// Lists all orders, most recent first.
///
/// A missing or unreadable persisted list comes back as empty, never as an
/// error.
pub async fn list_orders(db: &DbState) -> SessionResult<Vec<Order>> {
    debug!("list_orders command");
    Ok(db.inner().order_log().load().await?)
}

/// Cancels an order by its order number.
///
/// ## Behavior
/// - Order not found: `NOT_FOUND` error
/// - Order delivered or already cancelled: business-logic error
/// - Otherwise: flips the status to `Cancelled` and saves the list back
///   wholesale. The order itself is never deleted.
///
/// ## Returns
/// The updated order
pub async fn cancel_order(db: &DbState, order_number: &str) -> SessionResult<Order> {
    debug!(order_number = %order_number, "cancel_order command");

    let log = db.inner().order_log();
    let mut orders = log.load().await?;

    let order = orders
        .iter_mut()
        .find(|o| o.order_number == order_number)
        .ok_or_else(|| SessionError::not_found("Order", order_number))?;

    if !order.status.is_cancellable() {
        return Err(CoreError::InvalidOrderStatus {
            order_number: order_number.to_string(),
            current_status: format!("{:?}", order.status).to_lowercase(),
        }
        .into());
    }

    order.status = OrderStatus::Cancelled;
    let cancelled = order.clone();

    log.save(&orders).await?;

    info!(order_number = %order_number, "Order cancelled");

    Ok(cancelled)
}

/// Generates an order number in format: ORD-YYYYMMDD-NNNN
///
/// ## Format
/// - YYYYMMDD: Date
/// - NNNN: Sub-second derived sequence (padded to 4 digits)
///
/// Uniqueness is best-effort, which is all the order log asks for.
///
/// ## Example
/// `ORD-20260806-4821`
fn generate_order_number() -> String {
    let now = Utc::now();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    let seq = nanos % 10_000;

    format!("ORD-{}-{:04}", now.format("%Y%m%d"), seq)
}

// =============================================================================
// Unit Tests
// =============================================================================
