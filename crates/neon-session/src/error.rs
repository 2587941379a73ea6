//! # Session Error Type
//!
//! Unified error type for the command layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  Command Function                                                      │
//! │  Result<T, SessionError>                                               │
//! │         │                                                              │
//! │         ├── Persistence failure ──── DbError ──────┐                   │
//! │         │                                          ▼                   │
//! │         ├── Rule violation ───────── CoreError ── SessionError ──► UI  │
//! │         │                                          ▲                   │
//! │         └── Bad input ────────────── ValidationError                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The error carries both a machine-readable `code` for programmatic
//! handling and a human-readable `message` for display. It serializes to:
//! ```json
//! { "code": "NOT_FOUND", "message": "Product not found: p-123" }
//! ```

use serde::Serialize;
use thiserror::Error;

use neon_core::{CoreError, ValidationError};
use neon_db::DbError;

/// Error returned from session commands.
#[derive(Debug, Clone, Serialize, Error)]
#[error("[{code:?}] {message}")]
#[serde(rename_all = "camelCase")]
pub struct SessionError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Persistence operation failed
    DatabaseError,

    /// Business rule violation (e.g., cancelling a delivered order)
    BusinessLogic,

    /// Internal error
    Internal,
}

impl SessionError {
    /// Creates a new session error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        SessionError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        SessionError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        SessionError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        SessionError::new(ErrorCode::Internal, message)
    }
}

/// Converts persistence errors to session errors.
impl From<DbError> for SessionError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => SessionError::not_found(&entity, &id),
            DbError::UniqueViolation { field, value } => SessionError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::ConnectionFailed(_) => {
                SessionError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                SessionError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                SessionError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::Serialization(e) => {
                tracing::error!("Serialization failed: {}", e);
                SessionError::new(ErrorCode::Internal, "Failed to encode stored data")
            }
            DbError::PoolExhausted => {
                SessionError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                SessionError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to session errors.
impl From<CoreError> for SessionError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => SessionError::not_found("Product", &id),
            CoreError::ProductInactive(id) => SessionError::validation(format!(
                "Product is not available for sale: {}",
                id
            )),
            CoreError::OrderNotFound(number) => SessionError::not_found("Order", &number),
            CoreError::InvalidOrderStatus {
                order_number,
                current_status,
            } => SessionError::new(
                ErrorCode::BusinessLogic,
                format!("Order {} is {}", order_number, current_status),
            ),
            CoreError::UnknownCoupon(code) => {
                SessionError::validation(format!("Unknown coupon code: {}", code))
            }
            CoreError::Validation(e) => SessionError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors directly (skipping the CoreError wrapper).
impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::validation(err.to_string())
    }
}

/// Result type for session commands.
pub type SessionResult<T> = Result<T, SessionError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_shape() {
        let err = SessionError::not_found("Product", "p-123");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: p-123");
    }

    #[test]
    fn test_core_error_mapping() {
        let err: SessionError = CoreError::InvalidOrderStatus {
            order_number: "ORD-1".to_string(),
            current_status: "delivered".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::BusinessLogic);

        let err: SessionError = CoreError::ProductNotFound("p-1".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
