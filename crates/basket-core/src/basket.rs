//! # Basket
//!
//! A bounded collection of products with per-product quantity.
//!
//! ## Basket Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Operations                                    │
//! │                                                                         │
//! │  Operation              Checks                     State Change         │
//! │  ─────────              ──────                     ────────────         │
//! │                                                                         │
//! │  add_product(p, q) ───► q >= 1                                          │
//! │                         count + q <= 30                                 │
//! │                         weight + p.weight·q <= 100 ──► line.qty += q   │
//! │                                                                         │
//! │  delete_product(key) ─► key usable? ─────────────────► line removed    │
//! │                                                                         │
//! │  list_products() ─────────────────────────────────────► (read only)    │
//! │  total_price() / total_weight() / get_shipping_cost() / get_price()    │
//! │                                                                         │
//! │  NOTE: Every check runs before the first write. A rejected add leaves  │
//! │        the basket exactly as it was.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `Basket` has no interior locking. Share it across threads behind a
//! `Mutex<Basket>`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::config::{BasketConfig, ConfigError};
use crate::error::BasketResult;
use crate::key::LookupKey;
use crate::product::{Product, ProductId};
use crate::validation::{validate_item_capacity, validate_quantity, validate_weight_capacity};
use crate::DEFAULT_QUANTITY;

/// One product held in a basket, with its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketLine {
    product: Product,
    quantity: u32,
}

impl BasketLine {
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price of the whole line (price × quantity).
    pub fn line_price(&self) -> u64 {
        self.product.price().saturating_mul(u64::from(self.quantity))
    }

    /// Weight of the whole line (weight × quantity).
    pub fn line_weight(&self) -> u64 {
        self.product.weight().saturating_mul(u64::from(self.quantity))
    }
}

/// The shopping basket.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product raises quantity)
/// - Every line has quantity >= 1 (deleting removes the whole line)
/// - Total units <= `max_items` (30 by default)
/// - Total weight <= `max_weight` (100 by default)
/// - Lines keep the order in which their product was first added
#[derive(Debug, Clone, Default)]
pub struct Basket {
    lines: Vec<BasketLine>,
    config: BasketConfig,
}

impl Basket {
    /// Creates an empty basket with the default limits and shipping tiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty basket with custom limits and shipping tiers.
    ///
    /// ## Errors
    /// Whatever [`BasketConfig::validate`] rejects (zero limits, unsorted tiers).
    pub fn with_config(config: BasketConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Basket {
            lines: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &BasketConfig {
        &self.config
    }

    /// Adds `quantity` units of `product`.
    ///
    /// ## Errors
    /// Checked in this order, all before the basket is modified:
    /// - `InvalidArgument` if `quantity` is 0
    /// - `CapacityExceeded(ItemCount)` if the unit count would pass the limit
    /// - `CapacityExceeded(Weight)` if the total weight would pass the limit
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{Basket, Product};
    ///
    /// let mut basket = Basket::new();
    /// let microwave = Product::new("Microwave", 500, 10).unwrap();
    ///
    /// basket.add_product(&microwave, 2).unwrap();
    /// assert_eq!(basket.total_price(), 1000);
    /// assert_eq!(basket.get_shipping_cost(), 0);
    /// ```
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> BasketResult<()> {
        validate_quantity(quantity)?;

        let limits = self.config.limits;
        validate_item_capacity(self.item_count(), quantity, limits.max_items)
            .inspect_err(|err| warn!(product_id = %product.id(), quantity, %err, "Rejected add"))?;

        let added_weight = product.weight().saturating_mul(u64::from(quantity));
        validate_weight_capacity(self.total_weight(), added_weight, limits.max_weight)
            .inspect_err(|err| warn!(product_id = %product.id(), quantity, %err, "Rejected add"))?;

        match self.lines.iter_mut().find(|l| l.product.id() == product.id()) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(BasketLine {
                product: product.clone(),
                quantity,
            }),
        }

        debug!(product_id = %product.id(), quantity, "Added product to basket");
        Ok(())
    }

    /// Adds a single unit of `product`.
    pub fn add_one(&mut self, product: &Product) -> BasketResult<()> {
        self.add_product(product, DEFAULT_QUANTITY)
    }

    /// Removes every unit of the product named by `key`.
    ///
    /// Keys that match nothing are ignored. Only keys that cannot name a
    /// product at all (lists, maps) fail, with `TypeMismatch`, and the basket
    /// is left untouched.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{Basket, Product};
    ///
    /// let mut basket = Basket::new();
    /// let camera = Product::new("Camera", 700, 5).unwrap();
    /// basket.add_product(&camera, 2).unwrap();
    ///
    /// basket.delete_product(999u64).unwrap();   // no such product
    /// basket.delete_product("camera").unwrap(); // never matches
    /// assert!(basket.delete_product(vec![1u64]).is_err());
    ///
    /// basket.delete_product(camera.id()).unwrap();
    /// assert!(basket.is_empty());
    /// ```
    pub fn delete_product<K: LookupKey>(&mut self, key: K) -> BasketResult<()> {
        let Some(id) = key.lookup_id()? else {
            return Ok(());
        };

        let before = self.lines.len();
        self.lines.retain(|l| l.product.id() != id);

        if self.lines.len() != before {
            debug!(product_id = %id, "Deleted product from basket");
        }
        Ok(())
    }

    /// Returns every held product, repeated by quantity.
    ///
    /// The returned `Vec` is a fresh copy; changing it does not touch the basket.
    pub fn list_products(&self) -> Vec<Product> {
        self.lines
            .iter()
            .flat_map(|l| std::iter::repeat(l.product.clone()).take(l.quantity as usize))
            .collect()
    }

    /// Sum of price over every held unit.
    pub fn total_price(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.line_price()))
    }

    /// Sum of weight over every held unit.
    pub fn total_weight(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.line_weight()))
    }

    /// Shipping fee for the current total price.
    pub fn get_shipping_cost(&self) -> u64 {
        self.config.shipping.cost_for(self.total_price())
    }

    /// Total price plus shipping.
    pub fn get_price(&self) -> u64 {
        self.total_price().saturating_add(self.get_shipping_cost())
    }

    /// Number of held units.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Quantity held of the given product, 0 if absent.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product.id() == id)
            .map_or(0, |l| l.quantity)
    }

    /// Held lines in insertion order.
    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Basket totals summary for display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BasketSummary {
    pub item_count: u32,
    pub total_price: u64,
    pub total_weight: u64,
    pub shipping_cost: u64,
    pub price: u64,
}

impl From<&Basket> for BasketSummary {
    fn from(basket: &Basket) -> Self {
        BasketSummary {
            item_count: basket.item_count(),
            total_price: basket.total_price(),
            total_weight: basket.total_weight(),
            shipping_cost: basket.get_shipping_cost(),
            price: basket.get_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BasketLimits;
    use crate::error::{BasketError, CapacityLimit, ErrorKind};
    use crate::product::ProductFactory;

    fn product(factory: &ProductFactory, price: u64, weight: u64) -> Product {
        factory.create("Test product", price, weight).unwrap()
    }

    #[test]
    fn test_empty_basket() {
        let basket = Basket::new();

        assert_eq!(basket.total_price(), 0);
        assert_eq!(basket.total_weight(), 0);
        assert_eq!(basket.get_shipping_cost(), 0);
        assert_eq!(basket.get_price(), 0);
        assert!(basket.list_products().is_empty());
        assert!(basket.is_empty());
    }

    #[test]
    fn test_add_same_product_increases_quantity() {
        let factory = ProductFactory::new();
        let mut basket = Basket::new();
        let kettle = product(&factory, 300, 3);

        basket.add_product(&kettle, 2).unwrap();
        basket.add_one(&kettle).unwrap();

        assert_eq!(basket.lines().len(), 1);
        assert_eq!(basket.quantity_of(kettle.id()), 3);
        assert_eq!(basket.list_products().len(), 3);
        assert_eq!(basket.total_weight(), 9);
    }

    #[test]
    fn test_zero_quantity_is_invalid() {
        let factory = ProductFactory::new();
        let mut basket = Basket::new();
        let kettle = product(&factory, 100, 3);

        let err = basket.add_product(&kettle, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(basket.is_empty());
    }

    #[test]
    fn test_item_count_checked_before_weight() {
        let factory = ProductFactory::new();
        let mut basket = Basket::new();
        let heavy = product(&factory, 1, 50);

        // 31 units of weight 50 breaks both limits; count wins.
        let err = basket.add_product(&heavy, 31).unwrap_err();
        assert!(matches!(
            err,
            BasketError::CapacityExceeded(CapacityLimit::ItemCount { requested: 31, .. })
        ));
    }

    #[test]
    fn test_rejected_add_is_atomic() {
        let factory = ProductFactory::new();
        let mut basket = Basket::new();
        let heater = product(&factory, 200, 10);

        basket.add_product(&heater, 9).unwrap();
        let err = basket.add_product(&heater, 2).unwrap_err();

        assert!(matches!(
            err,
            BasketError::CapacityExceeded(CapacityLimit::Weight { current: 90, requested: 20, .. })
        ));
        assert_eq!(basket.quantity_of(heater.id()), 9);
        assert_eq!(basket.total_weight(), 90);
    }

    #[test]
    fn test_custom_limits() {
        let factory = ProductFactory::new();
        let mut basket = Basket::with_config(BasketConfig {
            limits: BasketLimits {
                max_items: 2,
                max_weight: 1000,
            },
            ..BasketConfig::default()
        })
        .unwrap();
        let pen = product(&factory, 10, 1);

        basket.add_product(&pen, 2).unwrap();
        assert!(basket.add_one(&pen).is_err());
    }

    #[test]
    fn test_with_config_rejects_invalid_config() {
        let zero_items = BasketConfig {
            limits: BasketLimits {
                max_items: 0,
                max_weight: 100,
            },
            ..BasketConfig::default()
        };
        assert!(matches!(
            Basket::with_config(zero_items),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_deserialized_tiers_drive_shipping() {
        let unsorted = r#"{ "shipping": { "tiers": [
            { "min_total": 1000, "cost": 0 },
            { "min_total": 500, "cost": 100 },
            { "min_total": 1, "cost": 250 }
        ] } }"#;
        assert!(serde_json::from_str::<BasketConfig>(unsorted).is_err());

        let sorted = r#"{ "shipping": { "tiers": [
            { "min_total": 1, "cost": 250 },
            { "min_total": 500, "cost": 100 },
            { "min_total": 1000, "cost": 0 }
        ] } }"#;
        let config: BasketConfig = serde_json::from_str(sorted).unwrap();
        let mut basket = Basket::with_config(config).unwrap();
        let factory = ProductFactory::new();
        basket.add_one(&product(&factory, 600, 1)).unwrap();

        assert_eq!(basket.get_shipping_cost(), 100);
    }

    #[test]
    fn test_delete_keeps_other_lines_and_order() {
        let factory = ProductFactory::new();
        let mut basket = Basket::new();
        let tv = product(&factory, 800, 20);
        let laptop = product(&factory, 1200, 5);
        let drive = product(&factory, 100, 1);

        basket.add_product(&tv, 1).unwrap();
        basket.add_product(&laptop, 2).unwrap();
        basket.add_product(&drive, 3).unwrap();
        basket.delete_product(laptop.id()).unwrap();

        let ids: Vec<_> = basket.lines().iter().map(|l| l.product().id()).collect();
        assert_eq!(ids, vec![tv.id(), drive.id()]);
        assert_eq!(basket.total_price(), 1100);
        assert_eq!(basket.total_weight(), 23);
    }

    #[test]
    fn test_list_products_is_a_copy() {
        let factory = ProductFactory::new();
        let mut basket = Basket::new();
        let phone = product(&factory, 100, 10);
        basket.add_product(&phone, 2).unwrap();

        let mut first = basket.list_products();
        first.clear();

        assert_eq!(basket.list_products().len(), 2);
    }

    #[test]
    fn test_summary() {
        let factory = ProductFactory::new();
        let mut basket = Basket::new();
        basket.add_one(&product(&factory, 500, 10)).unwrap();

        let summary = BasketSummary::from(&basket);
        assert_eq!(
            summary,
            BasketSummary {
                item_count: 1,
                total_price: 500,
                total_weight: 10,
                shipping_cost: 100,
                price: 600,
            }
        );

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["shippingCost"], 100);
    }
}
