//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`NEON_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use neon_core::Coupon;

/// Storefront configuration.
///
/// ## Fields
/// All fields have sensible defaults for development.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (displayed on order receipts)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Coupon codes the store recognizes
    pub coupons: Vec<Coupon>,

    /// Simulated payment processing pause, in milliseconds.
    /// Zero disables the pause (used in tests).
    pub payment_delay_ms: u64,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Neon Street"
    /// - Currency: USD ($)
    /// - Coupons: SAVE10 (10% off)
    /// - Payment pause: 1.5 seconds
    fn default() -> Self {
        ConfigState {
            store_name: "Neon Street".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            coupons: vec![Coupon {
                code: "SAVE10".to_string(),
                discount_bps: 1000,
            }],
            payment_delay_ms: 1_500,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `NEON_STORE_NAME`: Override store name
    /// - `NEON_PAYMENT_DELAY_MS`: Override the simulated payment pause
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("NEON_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(delay) = std::env::var("NEON_PAYMENT_DELAY_MS") {
            if let Ok(ms) = delay.parse::<u64>() {
                config.payment_delay_ms = ms;
            }
        }

        config
    }

    /// Looks up a coupon by its exact code.
    pub fn find_coupon(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.code == code)
    }

    /// The simulated payment pause as a Duration.
    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    /// Returns a config with the payment pause disabled (for tests).
    pub fn without_payment_delay(mut self) -> Self {
        self.payment_delay_ms = 0;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_include_save10() {
        let config = ConfigState::default();
        let coupon = config.find_coupon("SAVE10").unwrap();
        assert_eq!(coupon.discount_bps, 1000);

        assert!(config.find_coupon("save10").is_none()); // case-sensitive
        assert!(config.find_coupon("NOPE").is_none());
    }

    #[test]
    fn test_without_payment_delay() {
        let config = ConfigState::default().without_payment_delay();
        assert_eq!(config.payment_delay(), Duration::ZERO);
    }
}
