//! Signed monetary amount backed by a fixed-precision decimal.
//!
//! Uses `rust_decimal` internally so exact and tolerance comparisons are
//! plain decimal arithmetic with no binary floating-point error.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A signed transaction amount.
///
/// The value is kept at the precision it was parsed with. Equality is
/// numeric, so `10.5` and `10.50` compare equal; no rounding is applied
/// on construction.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use ledger_recon::Amount;
///
/// let a = Amount::from_str("10.50").unwrap();
/// let b = Amount::from_str("10.5").unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Number of fractional digits that matter when matching.
    pub const MATCH_SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates an amount from a `Decimal`.
    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Creates an amount from integer minor units (cents).
    pub fn from_minor_units(units: i64) -> Self {
        Amount(Decimal::new(units, Self::MATCH_SCALE))
    }

    /// Absolute difference between two amounts, or `None` on overflow.
    pub fn abs_diff(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(|d| Amount(d.abs()))
    }

    /// Sum of two amounts, or `None` on overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Rounds to [`Self::MATCH_SCALE`] fractional digits, half to even.
    pub fn round_to_match_scale(self) -> Self {
        Amount(self.0.round_dp(Self::MATCH_SCALE))
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    #[test]
    fn test_from_str_keeps_precision() {
        assert_eq!(amt("1.0").to_string(), "1.0");
        assert_eq!(amt("  2.50  ").to_string(), "2.50");
        assert_eq!(amt("-12.345").to_string(), "-12.345");
    }

    #[test]
    fn test_equality_is_numeric() {
        assert_eq!(amt("100"), amt("100.00"));
        assert_ne!(amt("100.00"), amt("100.001"));
    }

    #[test]
    fn test_abs_diff_is_symmetric() {
        assert_eq!(amt("10.00").abs_diff(amt("10.03")), Some(amt("0.03")));
        assert_eq!(amt("10.03").abs_diff(amt("10.00")), Some(amt("0.03")));
        assert_eq!(amt("-1.00").abs_diff(amt("1.00")), Some(amt("2.00")));
    }

    #[test]
    fn test_overflow_is_reported_not_panicked() {
        let max = Amount::new(Decimal::MAX);
        let min = Amount::new(Decimal::MIN);

        assert_eq!(max.abs_diff(min), None);
        assert_eq!(min.abs_diff(max), None);
        assert_eq!(max.checked_add(amt("1")), None);
        assert_eq!(max.abs_diff(max), Some(Amount::ZERO));
    }

    #[test]
    fn test_round_to_match_scale() {
        assert_eq!(amt("0.010000001").round_to_match_scale(), amt("0.01"));
        assert_eq!(amt("0.014").round_to_match_scale(), amt("0.01"));
        assert_eq!(amt("0.016").round_to_match_scale(), amt("0.02"));
        // half to even
        assert_eq!(amt("0.015").round_to_match_scale(), amt("0.02"));
        assert_eq!(amt("0.025").round_to_match_scale(), amt("0.02"));
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(Amount::from_minor_units(1), amt("0.01"));
        assert_eq!(Amount::from_minor_units(-250), amt("-2.50"));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(amt("1.5").checked_add(amt("0.01")), Some(amt("1.51")));
        assert_eq!(amt("1.5").checked_add(amt("-2")), Some(amt("-0.5")));
        assert!(Amount::ZERO < amt("0.01"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Amount::from_str("abc").is_err());
        assert!(Amount::from_str("").is_err());
    }
}
