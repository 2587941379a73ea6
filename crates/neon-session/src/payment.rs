//! # Simulated Payment
//!
//! There is no real payment integration: "processing a payment" is a fixed
//! awaitable pause followed by an unconditional confirmation. The pause has
//! no abort path and cannot fail.
//!
//! ## Flow
//! ```text
//! place_order
//!      │
//!      ▼
//! process_payment(method, amount) ── sleep(payment_delay) ──► PaymentReceipt
//!      │
//!      ▼
//! order persisted, cart cleared
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::debug;

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer chose to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Pay when the order arrives.
    CashOnDelivery,
    /// Card payment (simulated).
    Card,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::CashOnDelivery
    }
}

// =============================================================================
// Payment Receipt
// =============================================================================

/// Confirmation of a (simulated) payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub amount_cents: i64,
    pub confirmed_at: DateTime<Utc>,
}

/// Simulates processing a payment: waits out the configured pause and
/// confirms.
///
/// Always succeeds. Not cancellable: callers await it to completion.
pub async fn process_payment(
    method: PaymentMethod,
    amount_cents: i64,
    delay: Duration,
) -> PaymentReceipt {
    debug!(?method, amount_cents, delay_ms = delay.as_millis() as u64, "Processing payment");

    if !delay.is_zero() {
        sleep(delay).await;
    }

    PaymentReceipt {
        method,
        amount_cents,
        confirmed_at: Utc::now(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
