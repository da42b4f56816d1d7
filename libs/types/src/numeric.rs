//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! The wire protocol carries `f64`; conversion happens at the boundary and
//! everything past it computes in `Decimal`.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative price.
///
/// Construction is validating: a negative or non-finite value cannot
/// become a `Price`. Zero is representable because the price history
/// permits it; order validation rejects zero separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal, rejecting negative values.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Create a price from a wire float, rejecting NaN, infinities and
    /// negative values.
    pub fn from_f64(value: f64) -> Option<Self> {
        Decimal::from_f64(value).and_then(Self::try_new)
    }

    /// The zero price.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Get the inner decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Lossy conversion for the wire boundary.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative quantity.
///
/// Same validation discipline as [`Price`]: negatives are unrepresentable,
/// zero is representable (a level drained to zero is removed by the book).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a quantity from a decimal, rejecting negative values.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Create a quantity from a wire float, rejecting NaN, infinities and
    /// negative values.
    pub fn from_f64(value: f64) -> Option<Self> {
        Decimal::from_f64(value).and_then(Self::try_new)
    }

    /// The zero quantity.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Get the inner decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Lossy conversion for the wire boundary.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rejects_negative() {
        assert!(Price::try_new(Decimal::new(-1, 2)).is_none());
        assert!(Price::from_f64(-3.65).is_none());
    }

    #[test]
    fn test_price_accepts_zero() {
        let p = Price::try_new(Decimal::ZERO).unwrap();
        assert!(p.is_zero());
    }

    #[test]
    fn test_price_rejects_non_finite() {
        assert!(Price::from_f64(f64::NAN).is_none());
        assert!(Price::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn test_price_wire_round_trip() {
        let p = Price::from_f64(3.62).unwrap();
        assert_eq!(p.as_decimal(), Decimal::new(362, 2));
        assert_eq!(p.to_f64(), 3.62);
    }

    #[test]
    fn test_quantity_rejects_negative() {
        assert!(Quantity::try_new(Decimal::new(-100, 0)).is_none());
        assert!(Quantity::from_f64(-1.0).is_none());
    }

    #[test]
    fn test_quantity_ordering() {
        let small = Quantity::from_f64(1.0).unwrap();
        let large = Quantity::from_f64(2.5).unwrap();
        assert!(small < large);
    }

    #[test]
    fn test_serde_transparent() {
        let p = Price::from_f64(3.55).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
