//! Basket configuration.
//!
//! Defaults match the marketplace rules (30 items, weight 100, standard
//! shipping tiers). Limits can be overridden from environment variables or
//! a JSON document.

use serde::{Deserialize, Serialize};
use std::env;

use crate::shipping::ShippingPolicy;
use crate::{MAX_BASKET_ITEMS, MAX_BASKET_WEIGHT};

/// Capacity limits enforced by `Basket::add_product`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasketLimits {
    /// Maximum number of units held at once
    pub max_items: u32,

    /// Maximum total weight held at once
    pub max_weight: u64,
}

impl Default for BasketLimits {
    fn default() -> Self {
        BasketLimits {
            max_items: MAX_BASKET_ITEMS,
            max_weight: MAX_BASKET_WEIGHT,
        }
    }
}

/// Full basket configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasketConfig {
    pub limits: BasketLimits,
    pub shipping: ShippingPolicy,
}

impl BasketConfig {
    /// Load limits from `BASKET_MAX_ITEMS` / `BASKET_MAX_WEIGHT`, falling back
    /// to defaults. Shipping always uses the default tiers.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`BasketConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = BasketLimits::default();

        let config = BasketConfig {
            limits: BasketLimits {
                max_items: lookup("BASKET_MAX_ITEMS")
                    .unwrap_or_else(|| defaults.max_items.to_string())
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("BASKET_MAX_ITEMS".to_string()))?,

                max_weight: lookup("BASKET_MAX_WEIGHT")
                    .unwrap_or_else(|| defaults.max_weight.to_string())
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("BASKET_MAX_WEIGHT".to_string()))?,
            },
            shipping: ShippingPolicy::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: BasketConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects zero limits and shipping tiers that are not strictly ascending.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_items == 0 {
            return Err(ConfigError::InvalidValue("max_items".to_string()));
        }
        if self.limits.max_weight == 0 {
            return Err(ConfigError::InvalidValue("max_weight".to_string()));
        }
        if !self.shipping.is_sorted() {
            return Err(ConfigError::UnsortedShippingTiers);
        }
        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Shipping tiers must be strictly ascending by min_total")]
    UnsortedShippingTiers,

    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BasketConfig::default();
        assert_eq!(config.limits.max_items, 30);
        assert_eq!(config.limits.max_weight, 100);
        assert_eq!(config.shipping, ShippingPolicy::default());
    }

    #[test]
    fn test_from_lookup_overrides_and_falls_back() {
        let config = BasketConfig::from_lookup(|key| match key {
            "BASKET_MAX_ITEMS" => Some(" 5 ".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.limits.max_items, 5);
        assert_eq!(config.limits.max_weight, 100);
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = BasketConfig::from_lookup(|key| {
            (key == "BASKET_MAX_WEIGHT").then(|| "heavy".to_string())
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for BASKET_MAX_WEIGHT");

        let err = BasketConfig::from_lookup(|key| {
            (key == "BASKET_MAX_ITEMS").then(|| "0".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_from_json_partial_document() {
        let config = BasketConfig::from_json(r#"{ "limits": { "max_weight": 250 } }"#).unwrap();
        assert_eq!(config.limits.max_items, 30);
        assert_eq!(config.limits.max_weight, 250);
        assert_eq!(config.shipping.cost_for(499), 250);
    }

    #[test]
    fn test_from_json_rejects_unsorted_tiers() {
        let raw = r#"{
            "shipping": { "tiers": [
                { "min_total": 500, "cost": 100 },
                { "min_total": 1, "cost": 250 }
            ] }
        }"#;
        let err = BasketConfig::from_json(raw).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("strictly ascending"));

        // serde_json straight into the struct hits the same check.
        assert!(serde_json::from_str::<BasketConfig>(raw).is_err());

        assert!(matches!(
            BasketConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
