//! # Shipping
//!
//! Shipping cost is a step function of the basket's total price.
//!
//! ## Default Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total_price        shipping                                            │
//! │  ───────────        ────────                                            │
//! │  0 (empty)          0                                                   │
//! │  1 - 499            250                                                 │
//! │  500 - 999          100                                                 │
//! │  >= 1000            0 (free)                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Totals at or above this pay the reduced fee.
pub const REDUCED_SHIPPING_THRESHOLD: u64 = 500;

/// Totals at or above this ship free.
pub const FREE_SHIPPING_THRESHOLD: u64 = 1000;

pub const STANDARD_SHIPPING_COST: u64 = 250;
pub const REDUCED_SHIPPING_COST: u64 = 100;

/// One step of the shipping table: totals from `min_total` upward cost `cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingTier {
    pub min_total: u64,
    pub cost: u64,
}

/// Ordered shipping table.
///
/// Tiers are sorted by `min_total`; the last tier whose `min_total` is not
/// above the total wins. An empty basket never pays shipping, and a total
/// below the first tier ships free.
///
/// Deserializing goes through the same ordering check as [`ShippingPolicy::from_tiers`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShippingTable")]
pub struct ShippingPolicy {
    tiers: Vec<ShippingTier>,
}

/// Wire shape of a policy before its tiers are checked.
#[derive(Deserialize)]
struct ShippingTable {
    tiers: Vec<ShippingTier>,
}

impl TryFrom<ShippingTable> for ShippingPolicy {
    type Error = ConfigError;

    fn try_from(table: ShippingTable) -> Result<Self, Self::Error> {
        ShippingPolicy::from_tiers(table.tiers).ok_or(ConfigError::UnsortedShippingTiers)
    }
}

impl ShippingPolicy {
    /// Builds a policy from tiers, which must be strictly ascending by
    /// `min_total`. Returns `None` otherwise.
    pub fn from_tiers(tiers: Vec<ShippingTier>) -> Option<Self> {
        let policy = ShippingPolicy { tiers };
        policy.is_sorted().then_some(policy)
    }

    pub fn tiers(&self) -> &[ShippingTier] {
        &self.tiers
    }

    pub(crate) fn is_sorted(&self) -> bool {
        self.tiers
            .windows(2)
            .all(|pair| pair[0].min_total < pair[1].min_total)
    }

    /// Returns the shipping cost for a basket whose total price is `total_price`.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::shipping::ShippingPolicy;
    ///
    /// let policy = ShippingPolicy::default();
    /// assert_eq!(policy.cost_for(0), 0);
    /// assert_eq!(policy.cost_for(499), 250);
    /// assert_eq!(policy.cost_for(500), 100);
    /// assert_eq!(policy.cost_for(1000), 0);
    /// ```
    pub fn cost_for(&self, total_price: u64) -> u64 {
        if total_price == 0 {
            return 0;
        }

        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.min_total <= total_price)
            .map_or(0, |tier| tier.cost)
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy {
            tiers: vec![
                ShippingTier {
                    min_total: 1,
                    cost: STANDARD_SHIPPING_COST,
                },
                ShippingTier {
                    min_total: REDUCED_SHIPPING_THRESHOLD,
                    cost: REDUCED_SHIPPING_COST,
                },
                ShippingTier {
                    min_total: FREE_SHIPPING_THRESHOLD,
                    cost: 0,
                },
            ],
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
