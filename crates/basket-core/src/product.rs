//! # Product
//!
//! The immutable value a basket holds, and the factory that numbers it.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Identity                                │
//! │                                                                         │
//! │  ProductFactory::global()          ProductFactory::new() (tests)       │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │ next_id: AtomicU64   │          │ next_id: AtomicU64   │            │
//! │  │ 1 → 2 → 3 → ...      │          │ 1 → 2 → ...          │            │
//! │  └──────────┬───────────┘          └──────────────────────┘            │
//! │             │ fetch_add(1)                                              │
//! │             ▼                                                           │
//! │  ┌──────────────────────┐                                               │
//! │  │ Product              │  id, name, price, weight                     │
//! │  │ (read-only fields)   │  fixed for the life of the value             │
//! │  └──────────────────────┘                                               │
//! │                                                                         │
//! │  Ids start at 1, only grow, and are never handed out twice.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutability
//! Fields are private and there are no setters, so a product cannot be
//! changed after construction:
//!
//! ```rust,compile_fail
//! use basket_core::Product;
//!
//! let mut laptop = Product::new("Laptop", 1200, 5).unwrap();
//! laptop.price = 1500;
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use ts_rs::TS;

use crate::error::BasketResult;
use crate::validation::{validate_price, validate_weight};

// =============================================================================
// Product Id
// =============================================================================

/// Process-unique product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct ProductId(u64);

impl ProductId {
    /// Wraps a raw id value.
    ///
    /// Only useful for lookups; real ids come from [`ProductFactory`].
    #[inline]
    pub const fn from_raw(id: u64) -> Self {
        ProductId(id)
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A purchasable item.
///
/// Cloning a product yields the same item (same id); baskets hold clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Product {
    id: ProductId,
    name: String,
    price: u64,
    weight: u64,
}

impl Product {
    /// Creates a product numbered by the process-wide factory.
    ///
    /// ## Errors
    /// `InvalidArgument` when `price` or `weight` is below 1. A rejected
    /// product does not consume an id.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::Product;
    ///
    /// let kettle = Product::new("Kettle", 300, 3).unwrap();
    /// assert_eq!(kettle.price(), 300);
    /// assert!(Product::new("Broken", 0, 3).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: u64, weight: u64) -> BasketResult<Self> {
        ProductFactory::global().create(name, price, weight)
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> u64 {
        self.price
    }

    #[inline]
    pub fn weight(&self) -> u64 {
        self.weight
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (#{}): price {}, weight {}",
            self.name, self.id, self.price, self.weight
        )
    }
}

// =============================================================================
// Product Factory
// =============================================================================

static GLOBAL_FACTORY: ProductFactory = ProductFactory::new();

/// Hands out product ids from a single atomic counter.
///
/// ## Thread Safety
/// The counter is an `AtomicU64`, so products may be built from several
/// threads without ever sharing an id.
#[derive(Debug)]
pub struct ProductFactory {
    next_id: AtomicU64,
}

impl ProductFactory {
    /// Creates a factory whose first id is 1.
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a factory whose first id is `first`.
    pub const fn starting_at(first: u64) -> Self {
        ProductFactory {
            next_id: AtomicU64::new(first),
        }
    }

    /// The process-wide factory behind [`Product::new`].
    pub fn global() -> &'static ProductFactory {
        &GLOBAL_FACTORY
    }

    /// Returns the id the next successful `create` will assign.
    pub fn peek_next_id(&self) -> ProductId {
        ProductId(self.next_id.load(Ordering::SeqCst))
    }

    /// Validates the inputs, then assigns the next id.
    pub fn create(&self, name: impl Into<String>, price: u64, weight: u64) -> BasketResult<Product> {
        validate_price(price)?;
        validate_weight(weight)?;

        let id = ProductId(self.next_id.fetch_add(1, Ordering::SeqCst));
        Ok(Product {
            id,
            name: name.into(),
            price,
            weight,
        })
    }
}

impl Default for ProductFactory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
