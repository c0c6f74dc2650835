//! # Error Types
//!
//! Domain-specific error types for ironmonger-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ironmonger-core errors (this file)                                    │
//! │  ├── CoreError        - What every service operation returns           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  ironmonger-db errors (separate crate)                                 │
//! │  └── DbError          - Database failures, classified into CoreError   │
//! │                                                                         │
//! │  HTTP errors (api app)                                                 │
//! │  └── ApiError         - Status code + JSON body                        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ← DbError;  CoreError → ApiError    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by every service operation.
///
/// Each variant is classified where it occurs and reaches the HTTP
/// boundary unchanged.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed or out-of-range caller data. Never touches storage.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: i64 },

    /// A uniqueness or referential rule would be violated.
    ///
    /// ## When This Occurs
    /// - Duplicate client national id
    /// - Deleting a client or product referenced by a sale
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The guarded stock decrement failed for a line item.
    ///
    /// ## User Workflow
    /// ```text
    /// POST /api/sales  (product 2, qty 5)
    ///      │
    ///      ▼
    /// UPDATE products SET stock = stock - 5 WHERE id = 2 AND stock >= 5
    ///      │
    ///      ▼  0 rows affected
    /// InsufficientStock { product_id: 2, requested: 5 }  → whole sale rolled back
    /// ```
    #[error("Insufficient stock for product {product_id}: requested {requested}")]
    InsufficientStock { product_id: i64, requested: i64 },

    /// A stored aggregate no longer fits in the money range.
    #[error("Amount out of range: {0}")]
    Overflow(String),

    /// Infrastructure failure (connection loss, disk errors, ...).
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        CoreError::NotFound {
            entity: entity.into(),
            id,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g. email without '@').
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A collection that must have at least one element is empty.
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// An amount computed from the input does not fit in the money range.
    #[error("{field} is too large")]
    Overflow { field: String },
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
        let err = CoreError::InsufficientStock {
            product_id: 2,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 2: requested 5"
        );

        let err = CoreError::not_found("Sale", 42);
        assert_eq!(err.to_string(), "Sale not found: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "national_id".to_string(),
        };
        assert_eq!(err.to_string(), "national_id is required");

        let err = ValidationError::MustBePositive {
            field: "items[1].quantity".to_string(),
        };
        assert_eq!(err.to_string(), "items[1].quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Empty {
            field: "items".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidInput(_)));
    }
}
