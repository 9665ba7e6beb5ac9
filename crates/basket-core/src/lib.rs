//! # basket-core: Marketplace Basket Accounting
//!
//! Products, the basket that holds them, and the rules that bound it. Pure
//! in-memory logic with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        basket-core                                      │
//! │                                                                         │
//! │   ┌───────────┐      ┌───────────┐      ┌───────────┐                  │
//! │   │  product  │ ───► │  basket   │ ◄─── │  config   │                  │
//! │   │  Product  │      │  Basket   │      │  limits   │                  │
//! │   │  Factory  │      │  Summary  │      │  shipping │                  │
//! │   └───────────┘      └─────┬─────┘      └───────────┘                  │
//! │                            │                                            │
//! │        ┌───────────────────┼───────────────────┐                        │
//! │        ▼                   ▼                   ▼                        │
//! │   ┌───────────┐      ┌───────────┐      ┌───────────┐                  │
//! │   │validation │      │    key    │      │  dynamic  │                  │
//! │   │  rules    │      │ LookupKey │      │ JSON input│                  │
//! │   └───────────┘      └───────────┘      └───────────┘                  │
//! │                                                                         │
//! │   NO I/O • NO DATABASE • NO NETWORK                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - `Product` and the id-assigning `ProductFactory`
//! - [`basket`] - `Basket`, its lines and totals
//! - [`shipping`] - Shipping tiers
//! - [`config`] - Limits and shipping configuration
//! - [`key`] - Keys accepted by `Basket::delete_product`
//! - [`dynamic`] - Entry points for untyped JSON input
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{Basket, Product};
//!
//! let mut basket = Basket::new();
//! let tv = Product::new("TV", 800, 20).unwrap();
//! let phone = Product::new("Phone", 700, 2).unwrap();
//!
//! basket.add_product(&tv, 1).unwrap();
//! basket.add_product(&phone, 2).unwrap();
//!
//! assert_eq!(basket.total_price(), 2200);
//! assert_eq!(basket.total_weight(), 24);
//! assert_eq!(basket.get_shipping_cost(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod config;
pub mod dynamic;
pub mod error;
pub mod key;
pub mod product;
pub mod shipping;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{Basket, BasketLine, BasketSummary};
pub use config::{BasketConfig, BasketLimits, ConfigError};
pub use error::{BasketError, BasketResult, CapacityLimit, ErrorKind, ValidationError};
pub use key::LookupKey;
pub use product::{Product, ProductFactory, ProductId};
pub use shipping::{ShippingPolicy, ShippingTier};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of units a basket may hold.
pub const MAX_BASKET_ITEMS: u32 = 30;

/// Maximum total weight a basket may hold.
pub const MAX_BASKET_WEIGHT: u64 = 100;

/// Quantity used by `Basket::add_one`.
pub const DEFAULT_QUANTITY: u32 = 1;
