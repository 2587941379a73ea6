//! # Error Types
//!
//! Domain-specific error types for neon-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  neon-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  neon-db errors (separate crate)                                       │
//! │  └── DbError          - Persistence operation failures                 │
//! │                                                                         │
//! │  neon-session errors (separate crate)                                  │
//! │  └── SessionError     - What callers of the command layer see          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → SessionError → caller   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (slug, order number, etc.)
//! 3. Errors are enum variants, never String
//!
//! Note that several cart operations are deliberately NOT errors: removing
//! or re-quantifying a line that is not in the cart, and checking out an
//! empty cart, are defined no-ops.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product exists but is not available for sale (soft-deleted).
    #[error("Product is not available: {0}")]
    ProductInactive(String),

    /// Order cannot be found in the order log.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Order is not in a status that allows the requested operation.
    ///
    /// ## When This Occurs
    /// - Cancelling a delivered order
    /// - Cancelling an already-cancelled order
    #[error("Order {order_number} is {current_status}, cannot perform operation")]
    InvalidOrderStatus {
        order_number: String,
        current_status: String,
    },

    /// Coupon code is not recognized by the store.
    #[error("Unknown coupon code: {0}")]
    UnknownCoupon(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unexpected characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in the allowed set (e.g., a size the product lacks).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidOrderStatus {
            order_number: "ORD-20260806-0042".to_string(),
            current_status: "delivered".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Order ORD-20260806-0042 is delivered, cannot perform operation"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::Required {
            field: "product_id".to_string(),
        };
        assert_eq!(err.to_string(), "product_id is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "product_id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
