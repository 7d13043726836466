//! Fixed-point currency amounts.
//!
//! All monetary values are held in the smallest currency unit (cents) as
//! unsigned integers; nothing in the engine stores or computes with floats.
//! Display output is always two decimal places with trailing zeros preserved
//! ("0.10", never "0.1"), which is the convention every rendering layer
//! downstream of the engine relies on.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A non-negative currency amount in the smallest unit (cents).
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition; overflow is a domain invariant violation.
    pub fn checked_add(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::invariant("amount overflow"))
    }

    /// Checked multiplication by a unit count.
    pub fn checked_mul(self, factor: u64) -> DomainResult<Money> {
        self.0
            .checked_mul(factor)
            .map(Money)
            .ok_or_else(|| DomainError::invariant("amount overflow"))
    }

    /// Saturating addition, for aggregation paths that must never fail.
    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction; floors at zero (amounts are never negative).
    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }

    /// Percentage of this amount, expressed in basis points (1/100 of a
    /// percent), rounded half-up to the nearest cent.
    ///
    /// Intermediate math is `u128` so the product cannot overflow.
    pub fn percent_bps(self, basis_points: u32) -> Money {
        let numer = self.0 as u128 * basis_points as u128;
        let cents = (numer + 5_000) / 10_000;
        Money(u64::try_from(cents).unwrap_or(u64::MAX))
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_preserves_trailing_zeros() {
        assert_eq!(Money::from_cents(10).to_string(), "0.10");
        assert_eq!(Money::from_cents(100).to_string(), "1.00");
        assert_eq!(Money::from_cents(123_405).to_string(), "1234.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn percent_bps_rounds_half_up() {
        // 8.25% of $10.99 = 90.6675 cents -> 91.
        assert_eq!(Money::from_cents(1_099).percent_bps(825).cents(), 91);
        // 15% of $100.00 is exact.
        assert_eq!(Money::from_cents(10_000).percent_bps(1_500).cents(), 1_500);
        // 0.5 cent boundary rounds up: 1% of $0.50 = 0.5 cents -> 1.
        assert_eq!(Money::from_cents(50).percent_bps(100).cents(), 1);
    }

    #[test]
    fn checked_ops_surface_overflow_as_invariant() {
        let max = Money::from_cents(u64::MAX);
        let err = max.checked_add(Money::from_cents(1)).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        let err = max.checked_mul(2).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        let small = Money::from_cents(10);
        let big = Money::from_cents(25);
        assert_eq!(small.saturating_sub(big), Money::ZERO);
        assert_eq!(big.saturating_sub(small), Money::from_cents(15));
    }

    #[test]
    fn serde_is_transparent_cents() {
        let m = Money::from_cents(250);
        assert_eq!(serde_json::to_string(&m).unwrap(), "250");
        let back: Money = serde_json::from_str("250").unwrap();
        assert_eq!(back, m);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a sub-100% percentage never exceeds the base amount.
            #[test]
            fn percent_stays_within_base(cents in 0u64..=1_000_000_000_000, bps in 0u32..=10_000) {
                let m = Money::from_cents(cents);
                prop_assert!(m.percent_bps(bps) <= m);
            }

            /// Property: display always has exactly two decimal places.
            #[test]
            fn display_has_two_decimals(cents in 0u64..=1_000_000_000_000) {
                let s = Money::from_cents(cents).to_string();
                let (_, frac) = s.split_once('.').expect("decimal point");
                prop_assert_eq!(frac.len(), 2);
            }
        }
    }
}
