//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  BasketError          - Everything a basket/product operation returns  │
//! │  ├── TypeMismatch     - Untyped input of the wrong JSON shape          │
//! │  ├── InvalidArgument  - Wraps ValidationError (price, weight, qty)     │
//! │  └── CapacityExceeded - Item-count or weight limit (CapacityLimit)     │
//! │                                                                         │
//! │  ValidationError      - Field-level input failures                     │
//! │  ConfigError          - Bad configuration (see config.rs)              │
//! │                                                                         │
//! │  Flow: ValidationError → BasketError → caller                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, limit, requested amount)
//! 3. Errors are enum variants, never String
//! 4. Every error is returned before the basket is touched

use thiserror::Error;

// =============================================================================
// Error Kind
// =============================================================================

/// Flat error category, for callers that only branch on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TypeMismatch,
    InvalidArgument,
    CapacityExceeded,
}

// =============================================================================
// Capacity Limit
// =============================================================================

/// Which basket limit an `add_product` call would have broken.
///
/// The item-count limit is always checked before the weight limit, so a call
/// that breaks both reports `ItemCount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityLimit {
    /// Total number of held units would exceed `max`.
    ItemCount { max: u32, current: u32, requested: u32 },

    /// Total held weight would exceed `max`.
    Weight { max: u64, current: u64, requested: u64 },
}

impl std::fmt::Display for CapacityLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityLimit::ItemCount {
                max,
                current,
                requested,
            } => write!(
                f,
                "item count limit of {max} exceeded: holding {current}, adding {requested}"
            ),
            CapacityLimit::Weight {
                max,
                current,
                requested,
            } => write!(
                f,
                "weight limit of {max} exceeded: holding {current}, adding {requested}"
            ),
        }
    }
}

// =============================================================================
// Basket Error
// =============================================================================

/// Errors returned by product construction and basket operations.
#[derive(Debug, Error)]
pub enum BasketError {
    /// An untyped argument has the wrong shape.
    ///
    /// ## When This Occurs
    /// - JSON price/weight/quantity that is not an integer
    /// - A list- or map-shaped key passed to `delete_product`
    ///
    /// The typed API makes this impossible at compile time; only the JSON
    /// boundary and `LookupKey` can produce it.
    #[error("{field}: expected {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
    },

    /// Argument has the right type but breaks a domain rule.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Adding would push the basket past one of its limits.
    ///
    /// ## User Workflow
    /// ```text
    /// add_product(keyboard, qty: 5)   (basket holds 28)
    ///      │
    ///      ▼
    /// 28 + 5 > 30
    ///      │
    ///      ▼
    /// CapacityExceeded(ItemCount { max: 30, current: 28, requested: 5 })
    ///      │
    ///      ▼
    /// Basket unchanged
    /// ```
    #[error("Basket capacity exceeded: {0}")]
    CapacityExceeded(CapacityLimit),
}

impl BasketError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BasketError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            BasketError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            BasketError::CapacityExceeded(_) => ErrorKind::CapacityExceeded,
        }
    }

    pub(crate) fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        BasketError::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state changes; see [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be at least `min`.
    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum { field: String, min: u64, value: u64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with BasketError.
pub type BasketResult<T> = Result<T, BasketError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_messages_name_the_limit() {
        let err = BasketError::CapacityExceeded(CapacityLimit::ItemCount {
            max: 30,
            current: 30,
            requested: 1,
        });
        assert_eq!(
            err.to_string(),
            "Basket capacity exceeded: item count limit of 30 exceeded: holding 30, adding 1"
        );

        let err = BasketError::CapacityExceeded(CapacityLimit::Weight {
            max: 100,
            current: 100,
            requested: 10,
        });
        assert!(err.to_string().contains("weight limit of 100"));
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = BasketError::type_mismatch("price", "integer", "string");
        assert_eq!(err.to_string(), "price: expected integer, got string");
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_validation_converts_to_invalid_argument() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let err: BasketError = validation_err.into();
        assert!(matches!(err, BasketError::InvalidArgument(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "Invalid argument: quantity must be positive");
    }
}
