//! Deterministic cache keys derived from call arguments.
//!
//! A key is the stable JSON serialization of the argument list. Serialization
//! is total and order-preserving: equal argument values produce identical
//! keys regardless of where they came from (value equality, not identity),
//! and tuple/sequence element order is part of the key, so `(1, 2)` and
//! `(2, 1)` never collide.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Key derivation failure.
///
/// Raised when an argument has no JSON representation - non-finite floats
/// (`NaN`, infinities) and maps with non-string keys are the practical cases.
/// Function-valued and cyclic arguments cannot occur here; they are
/// unrepresentable in a `Serialize` argument type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("argument is not serializable as a cache key: {reason}")]
    Unserializable { reason: String },
}

/// A deterministic cache key for one argument list.
///
/// Opaque to callers; compared and hashed as a whole. Construction is the
/// only place key semantics live, so two `CacheKey`s are equal exactly when
/// the argument lists they were derived from serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for `args`.
    pub fn derive<T: Serialize>(args: &T) -> Result<Self, KeyError> {
        serde_json::to_string(args)
            .map(Self)
            .map_err(|err| KeyError::Unserializable {
                reason: err.to_string(),
            })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::CacheKey;

    #[test]
    fn equal_values_yield_equal_keys() {
        let a = CacheKey::derive(&(1_u64, "milk")).unwrap();
        let b = CacheKey::derive(&(1_u64, "milk")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn argument_order_is_part_of_the_key() {
        let a = CacheKey::derive(&(1_u64, 2_u64)).unwrap();
        let b = CacheKey::derive(&(2_u64, 1_u64)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn distinct_values_yield_distinct_keys() {
        let a = CacheKey::derive(&10_u64).unwrap();
        let b = CacheKey::derive(&11_u64).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn owned_and_borrowed_strings_agree() {
        let a = CacheKey::derive(&"abc").unwrap();
        let b = CacheKey::derive(&String::from("abc")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn non_finite_float_is_rejected() {
        assert!(CacheKey::derive(&f64::NAN).is_err());
        assert!(CacheKey::derive(&f64::INFINITY).is_err());
    }

    #[test]
    fn finite_float_is_accepted() {
        let key = CacheKey::derive(&1.5_f64).unwrap();
        assert_eq!(key.as_str(), "1.5");
    }
}
