//! # Untyped Input
//!
//! Entry points for callers holding raw JSON (form posts, fixtures, scripts)
//! instead of typed values. Each one checks JSON types, then defers to the
//! typed API, so every domain rule is enforced in one place.
//!
//! ```text
//! {"name": "Kettle", "price": "300", "weight": 3}
//!                              │
//!                              ▼
//!        TypeMismatch { field: "price", expected: "integer", found: "string" }
//! ```

use serde_json::Value;

use crate::basket::Basket;
use crate::error::{BasketError, BasketResult, ValidationError};
use crate::product::{Product, ProductFactory};

/// JSON type name used in `TypeMismatch` messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads a positive integer. Negative integers have the right type, so they
/// fail as `InvalidArgument` rather than `TypeMismatch`.
fn positive_integer(field: &str, value: &Value) -> BasketResult<u64> {
    let mismatch = || BasketError::type_mismatch(field, "integer", json_type_name(value));

    let Value::Number(n) = value else {
        return Err(mismatch());
    };

    match (n.as_u64(), n.as_i64()) {
        (Some(v), _) => Ok(v),
        (None, Some(_)) => Err(ValidationError::MustBePositive {
            field: field.to_string(),
        }
        .into()),
        _ => Err(mismatch()),
    }
}

fn field<'a>(object: &'a Value, name: &str) -> &'a Value {
    object.get(name).unwrap_or(&Value::Null)
}

impl ProductFactory {
    /// Builds a product from `{"name": .., "price": .., "weight": ..}`.
    ///
    /// ## Errors
    /// - `TypeMismatch` if the document is not an object, `name` is not a
    ///   string, or `price`/`weight` are not integers
    /// - `InvalidArgument` if `price` or `weight` is below 1
    pub fn create_from_json(&self, value: &Value) -> BasketResult<Product> {
        if !value.is_object() {
            return Err(BasketError::type_mismatch(
                "product",
                "object",
                json_type_name(value),
            ));
        }

        let name = match field(value, "name") {
            Value::String(name) => name.clone(),
            other => {
                return Err(BasketError::type_mismatch(
                    "name",
                    "string",
                    json_type_name(other),
                ))
            }
        };
        let price = positive_integer("price", field(value, "price"))?;
        let weight = positive_integer("weight", field(value, "weight"))?;

        self.create(name, price, weight)
    }
}

impl Product {
    /// [`ProductFactory::create_from_json`] on the process-wide factory.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{ErrorKind, Product};
    /// use serde_json::json;
    ///
    /// let kettle = Product::from_json(&json!({"name": "Kettle", "price": 300, "weight": 3})).unwrap();
    /// assert_eq!(kettle.weight(), 3);
    ///
    /// let err = Product::from_json(&json!({"name": "Kettle", "price": "300", "weight": 3})).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    /// ```
    pub fn from_json(value: &Value) -> BasketResult<Self> {
        ProductFactory::global().create_from_json(value)
    }
}

impl Basket {
    /// [`Basket::add_product`] with an untyped quantity.
    ///
    /// Integers too large for `u32` are clamped, which always trips the
    /// item-count limit.
    pub fn add_product_json(&mut self, product: &Product, quantity: &Value) -> BasketResult<()> {
        let quantity = positive_integer("quantity", quantity)?;
        self.add_product(product, u32::try_from(quantity).unwrap_or(u32::MAX))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CapacityLimit, ErrorKind};
    use serde_json::json;

    #[test]
    fn test_create_from_json() {
        let factory = ProductFactory::new();
        let tv = factory
            .create_from_json(&json!({"name": "TV", "price": 800, "weight": 20}))
            .unwrap();

        assert_eq!(tv.id().get(), 1);
        assert_eq!(tv.name(), "TV");
        assert_eq!(tv.price(), 800);
    }

    #[test]
    fn test_wrong_types_are_type_mismatch() {
        let factory = ProductFactory::new();
        let cases = [
            json!({"name": "x", "price": "1000", "weight": 5}),
            json!({"name": "x", "price": 1000, "weight": "5"}),
            json!({"name": "x", "price": null, "weight": 10}),
            json!({"name": "x", "price": 200}),
            json!({"name": "x", "price": [], "weight": 5}),
            json!({"name": "x", "price": 100, "weight": {}}),
            json!({"name": "x", "price": 1.5, "weight": 5}),
            json!({"name": 5, "price": 100, "weight": 5}),
            json!([100, 5]),
        ];

        for case in cases {
            let err = factory.create_from_json(&case).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch, "{case}");
        }
        assert_eq!(factory.peek_next_id().get(), 1);
    }

    #[test]
    fn test_out_of_range_is_invalid_argument() {
        let factory = ProductFactory::new();
        for case in [
            json!({"name": "x", "price": 0, "weight": 5}),
            json!({"name": "x", "price": -10, "weight": 5}),
        ] {
            let err = factory.create_from_json(&case).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_error_message_names_field_and_types() {
        let factory = ProductFactory::new();
        let err = factory
            .create_from_json(&json!({"name": "x", "price": 100, "weight": "5"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "weight: expected integer, got string");
    }

    #[test]
    fn test_add_product_json_quantity() {
        let factory = ProductFactory::new();
        let mut basket = Basket::new();
        let kettle = factory.create("Kettle", 300, 3).unwrap();

        for bad in [json!("two"), json!(null), json!({}), json!(2.0)] {
            let err = basket.add_product_json(&kettle, &bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        }
        for bad in [json!(0), json!(-3)] {
            let err = basket.add_product_json(&kettle, &bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
        assert!(basket.is_empty());

        let err = basket
            .add_product_json(&kettle, &json!(u64::MAX))
            .unwrap_err();
        assert!(matches!(
            err,
            BasketError::CapacityExceeded(CapacityLimit::ItemCount { .. })
        ));

        basket.add_product_json(&kettle, &json!(2)).unwrap();
        assert_eq!(basket.item_count(), 2);
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(1)), "integer");
        assert_eq!(json_type_name(&json!(-1)), "integer");
        assert_eq!(json_type_name(&json!(1.5)), "float");
        assert_eq!(json_type_name(&json!(true)), "boolean");
    }
}
