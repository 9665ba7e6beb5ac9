//! # Lookup Keys
//!
//! What `Basket::delete_product` accepts as a product key.
//!
//! ## Key Classes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Key                              lookup_id()                           │
//! │  ───                              ───────────                           │
//! │  ProductId, u64, i32, ...         Ok(Some(id))   (negative → Ok(None)) │
//! │  f64 with no fraction (3.0)       Ok(Some(3))                          │
//! │  f64 with a fraction (1.5)        Ok(None)       silent no-op          │
//! │  bool (false / true)              Ok(Some(0 / 1))                       │
//! │  &str, String, tuples, None       Ok(None)       silent no-op          │
//! │  Vec, slices, maps, sets          Err(TypeMismatch)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scalar and tuple keys are well-formed lookups that simply match nothing;
//! sequence- and map-shaped keys cannot name a product and are rejected.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde_json::Value;

use crate::error::{BasketError, BasketResult};
use crate::product::ProductId;

/// A value that can be used to look a product up in a basket.
pub trait LookupKey {
    /// Resolves the key to a product id.
    ///
    /// - `Ok(Some(id))`: may match a held product
    /// - `Ok(None)`: well-formed, never matches
    /// - `Err(TypeMismatch)`: unusable as a key
    fn lookup_id(&self) -> BasketResult<Option<ProductId>>;
}

const FIELD: &str = "product_id";
const EXPECTED: &str = "a scalar or tuple key";

fn unusable(found: &str) -> BasketError {
    BasketError::type_mismatch(FIELD, EXPECTED, found)
}

fn from_float(value: f64) -> Option<ProductId> {
    let integral = value.is_finite() && value.fract() == 0.0 && value >= 0.0;
    (integral && value < u64::MAX as f64).then(|| ProductId::from_raw(value as u64))
}

impl LookupKey for ProductId {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Ok(Some(*self))
    }
}

macro_rules! unsigned_key {
    ($($ty:ty),*) => {$(
        impl LookupKey for $ty {
            fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
                Ok(Some(ProductId::from_raw(u64::from(*self))))
            }
        }
    )*};
}

macro_rules! fallible_key {
    ($($ty:ty),*) => {$(
        impl LookupKey for $ty {
            fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
                Ok(u64::try_from(*self).ok().map(ProductId::from_raw))
            }
        }
    )*};
}

unsigned_key!(u8, u16, u32, u64);
fallible_key!(i8, i16, i32, i64, isize, usize);

impl LookupKey for f64 {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Ok(from_float(*self))
    }
}

impl LookupKey for f32 {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Ok(from_float(f64::from(*self)))
    }
}

/// Booleans compare equal to 0 and 1, like integral floats compare equal to
/// their integer value.
impl LookupKey for bool {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Ok(Some(ProductId::from_raw(u64::from(*self))))
    }
}

impl LookupKey for str {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Ok(None)
    }
}

impl LookupKey for String {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Ok(None)
    }
}

impl<T: LookupKey> LookupKey for Option<T> {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        match self {
            Some(key) => key.lookup_id(),
            None => Ok(None),
        }
    }
}

macro_rules! tuple_key {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: LookupKey),+> LookupKey for ($($name,)+) {
            fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
                // A tuple is only a valid key if every element is.
                $( self.$idx.lookup_id()?; )+
                Ok(None)
            }
        }
    };
}

tuple_key!(A 0);
tuple_key!(A 0, B 1);
tuple_key!(A 0, B 1, C 2);

impl<T> LookupKey for [T] {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Err(unusable("list"))
    }
}

impl<T, const N: usize> LookupKey for [T; N] {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Err(unusable("list"))
    }
}

impl<T> LookupKey for Vec<T> {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Err(unusable("list"))
    }
}

impl<K, V, S> LookupKey for HashMap<K, V, S> {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Err(unusable("map"))
    }
}

impl<K, V> LookupKey for BTreeMap<K, V> {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Err(unusable("map"))
    }
}

impl<T, S> LookupKey for HashSet<T, S> {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Err(unusable("set"))
    }
}

impl<T> LookupKey for BTreeSet<T> {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        Err(unusable("set"))
    }
}

/// Untyped keys: integers, integral floats and booleans name ids, other scalars never
/// match, arrays and objects are rejected.
impl LookupKey for Value {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        match self {
            Value::Null | Value::String(_) => Ok(None),
            Value::Bool(b) => b.lookup_id(),
            Value::Number(n) => Ok(match (n.as_u64(), n.as_i64(), n.as_f64()) {
                (Some(id), _, _) => Some(ProductId::from_raw(id)),
                (None, Some(_), _) => None,
                (None, None, Some(f)) => from_float(f),
                _ => None,
            }),
            Value::Array(_) => Err(unusable("array")),
            Value::Object(_) => Err(unusable("object")),
        }
    }
}

impl<K: LookupKey + ?Sized> LookupKey for &K {
    fn lookup_id(&self) -> BasketResult<Option<ProductId>> {
        (**self).lookup_id()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
