//! # Validation Module
//!
//! Input and capacity validation for products and baskets.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Type system                                                  │
//! │  ├── u64 price/weight, u32 quantity, &Product                          │
//! │  └── Negative or fractional values cannot be expressed                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: JSON boundary (dynamic.rs)                                   │
//! │  └── TypeMismatch for non-integer input                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── Domain rules: price >= 1, weight >= 1, quantity >= 1              │
//! │  └── Capacity: item count first, then weight                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::validation::{validate_price, validate_quantity};
//!
//! assert!(validate_price(500).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{BasketError, BasketResult, CapacityLimit, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Smallest allowed price and weight.
pub const MIN_UNIT_VALUE: u64 = 1;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be at least 1
///
/// ## Example
/// ```rust
/// use basket_core::validation::validate_price;
///
/// assert!(validate_price(1).is_ok());
/// assert!(validate_price(0).is_err());
/// ```
pub fn validate_price(price: u64) -> ValidationResult<()> {
    at_least_one("price", price)
}

/// Validates a product weight.
///
/// ## Rules
/// - Must be at least 1
pub fn validate_weight(weight: u64) -> ValidationResult<()> {
    at_least_one("weight", weight)
}

fn at_least_one(field: &str, value: u64) -> ValidationResult<()> {
    if value < MIN_UNIT_VALUE {
        return Err(ValidationError::BelowMinimum {
            field: field.to_string(),
            min: MIN_UNIT_VALUE,
            value,
        });
    }

    Ok(())
}

// =============================================================================
// Basket Validators
// =============================================================================

/// Validates a quantity passed to `add_product`.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Basket: Add Product                                                    │
/// │                                                                         │
/// │  validate_quantity(qty) ← THIS FUNCTION                                │
/// │       │                                                                 │
/// │       ├── qty == 0? → InvalidArgument                                  │
/// │       │                                                                 │
/// │       └── OK → validate_item_capacity → validate_weight_capacity       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Checks that adding `requested` units keeps the item count within `max`.
pub fn validate_item_capacity(current: u32, requested: u32, max: u32) -> BasketResult<()> {
    let fits = current
        .checked_add(requested)
        .is_some_and(|total| total <= max);

    if !fits {
        return Err(BasketError::CapacityExceeded(CapacityLimit::ItemCount {
            max,
            current,
            requested,
        }));
    }

    Ok(())
}

/// Checks that adding `requested` weight keeps the total within `max`.
///
/// `requested` is the full weight of the addition (`weight * quantity`).
pub fn validate_weight_capacity(current: u64, requested: u64, max: u64) -> BasketResult<()> {
    let fits = current
        .checked_add(requested)
        .is_some_and(|total| total <= max);

    if !fits {
        return Err(BasketError::CapacityExceeded(CapacityLimit::Weight {
            max,
            current,
            requested,
        }));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
