//! Fair allocation using the Largest Remainder Method.
//!
//! Where [`Split`](super::Split) hands all rounding slack to the last
//! share, allocation spreads it one minimal amount at a time:
//! 1. Calculate exact allocations
//! 2. Truncate each to the currency's minor unit
//! 3. Hand the leftover units to the items with the largest fractional parts

use coinage_shared::MinorUnit;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::value::Money;
use crate::error::{MoneyError, MoneyResult};

impl Money {
    /// Allocates equally across `count` recipients; earlier recipients get
    /// the extra minor units.
    ///
    /// ```
    /// use coinage_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let parts = Money::euro(dec!(100)).allocate(3).unwrap();
    /// let amounts: Vec<_> = parts.iter().map(Money::amount).collect();
    /// assert_eq!(amounts, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `count` is zero.
    pub fn allocate(&self, count: usize) -> MoneyResult<Vec<Self>> {
        if count == 0 {
            return Err(MoneyError::OutOfRange(
                "allocation needs at least one recipient".to_string(),
            ));
        }
        self.allocate_weighted(&vec![Decimal::ONE; count])
    }

    /// Allocates by percentages, which must sum to 100.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty slice or percentages that do
    /// not sum to 100, and `OutOfRange` for a negative percentage.
    pub fn allocate_by_percentages(&self, percentages: &[Decimal]) -> MoneyResult<Vec<Self>> {
        if percentages.is_empty() {
            return Err(MoneyError::InvalidArgument(
                "percentages must not be empty".to_string(),
            ));
        }
        if percentages.iter().any(Decimal::is_sign_negative) {
            return Err(MoneyError::OutOfRange(
                "percentages must not be negative".to_string(),
            ));
        }
        let total: Decimal = percentages.iter().copied().sum();
        if total != Decimal::ONE_HUNDRED {
            return Err(MoneyError::InvalidArgument(format!(
                "percentages must sum to 100, got {total}"
            )));
        }
        self.allocate_weighted(percentages)
    }

    fn allocate_weighted(&self, weights: &[Decimal]) -> MoneyResult<Vec<Self>> {
        let overflow = MoneyError::Overflow {
            operation: "allocation",
        };
        let total_weight: Decimal = weights.iter().copied().sum();
        let magnitude = self.amount().abs();
        let unit = allocation_unit(self);

        let exact = weights
            .iter()
            .map(|weight| {
                magnitude
                    .checked_mul(*weight)
                    .and_then(|scaled| scaled.checked_div(total_weight))
                    .ok_or_else(|| overflow.clone())
            })
            .collect::<MoneyResult<Vec<_>>>()?;

        let mut allocated: Vec<Decimal> = exact
            .iter()
            .map(|amount| truncate_to_unit(*amount, unit))
            .collect();

        let leftover = magnitude - allocated.iter().copied().sum::<Decimal>();
        let units_to_distribute = (leftover / unit)
            .round_dp_with_strategy(0, RoundingStrategy::ToZero)
            .to_usize()
            .ok_or(overflow)?;

        if units_to_distribute > 0 {
            let mut by_remainder: Vec<(usize, Decimal)> = exact
                .iter()
                .zip(&allocated)
                .map(|(exact, truncated)| *exact - *truncated)
                .enumerate()
                .collect();
            // Stable sort keeps earlier recipients first on ties.
            by_remainder.sort_by(|a, b| b.1.cmp(&a.1));
            for (index, _) in by_remainder.iter().take(units_to_distribute) {
                allocated[*index] += unit;
            }
        }

        let negative = self.is_negative();
        Ok(allocated
            .into_iter()
            .map(|amount| {
                let signed = if negative { -amount } else { amount };
                Self::with_unit(signed, self.currency(), self.minor_unit())
            })
            .collect())
    }
}

/// Smallest step to allocate in. Currencies without a minor unit use the
/// amount's own scale.
fn allocation_unit(money: &Money) -> Decimal {
    if money.minor_unit() == MinorUnit::NotApplicable {
        Decimal::new(1, money.amount().scale())
    } else {
        money.minor_unit().minimal_amount()
    }
}

fn truncate_to_unit(amount: Decimal, unit: Decimal) -> Decimal {
    (amount / unit).round_dp_with_strategy(0, RoundingStrategy::ToZero) * unit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyRegistry;
    use rust_decimal_macros::dec;

    fn amounts(parts: &[Money]) -> Vec<Decimal> {
        parts.iter().map(Money::amount).collect()
    }

    fn total(parts: &[Money]) -> Decimal {
        parts.iter().map(Money::amount).sum()
    }

    // =========================================================================
    // allocate tests
    // =========================================================================

    #[test]
    fn test_allocate_zero_recipients() {
        assert!(matches!(
            Money::euro(dec!(100)).allocate(0),
            Err(MoneyError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_allocate_single() {
        let parts = Money::euro(dec!(100)).allocate(1).unwrap();
        assert_eq!(amounts(&parts), vec![dec!(100)]);
    }

    #[test]
    fn test_allocate_thirds() {
        // First recipient gets the extra cent
        let parts = Money::euro(dec!(100)).allocate(3).unwrap();
        assert_eq!(amounts(&parts), vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    }

    #[test]
    fn test_allocate_sum_invariant() {
        let test_cases = [
            (dec!(100), 3),
            (dec!(100), 7),
            (dec!(1000), 3),
            (dec!(1), 3),
            (dec!(0.01), 3),
            (dec!(999.99), 7),
            (dec!(-10), 3),
        ];

        for (amount, count) in test_cases {
            let parts = Money::euro(amount).allocate(count).unwrap();
            assert_eq!(
                total(&parts),
                amount,
                "Sum invariant failed for amount={amount}, count={count}"
            );
        }
    }

    #[test]
    fn test_allocate_negative_mirrors_positive() {
        let parts = Money::euro(dec!(-100)).allocate(3).unwrap();
        assert_eq!(
            amounts(&parts),
            vec![dec!(-33.34), dec!(-33.33), dec!(-33.33)]
        );
    }

    #[test]
    fn test_allocate_fifth_currency() {
        let registry = CurrencyRegistry::new();
        let parts = registry.money(dec!(1), "MRU").unwrap().allocate(3).unwrap();
        assert_eq!(amounts(&parts), vec![dec!(0.4), dec!(0.4), dec!(0.2)]);
    }

    // =========================================================================
    // allocate_by_percentages tests
    // =========================================================================

    #[test]
    fn test_allocate_by_percentages_uneven() {
        let percentages = [dec!(50), dec!(30), dec!(20)];
        let parts = Money::euro(dec!(100))
            .allocate_by_percentages(&percentages)
            .unwrap();
        assert_eq!(amounts(&parts), vec![dec!(50), dec!(30), dec!(20)]);
    }

    #[test]
    fn test_allocate_by_percentages_largest_remainder_wins() {
        let percentages = [dec!(33.33), dec!(33.33), dec!(33.34)];
        let parts = Money::euro(dec!(0.10))
            .allocate_by_percentages(&percentages)
            .unwrap();
        assert_eq!(amounts(&parts), vec![dec!(0.03), dec!(0.03), dec!(0.04)]);
    }

    #[test]
    fn test_allocate_by_percentages_sum_invariant() {
        let test_cases = [
            (dec!(100), vec![dec!(33.33), dec!(33.33), dec!(33.34)]),
            (dec!(1000), vec![dec!(25), dec!(25), dec!(25), dec!(25)]),
            (dec!(99.99), vec![dec!(10), dec!(20), dec!(30), dec!(40)]),
        ];

        for (amount, percentages) in test_cases {
            let parts = Money::euro(amount)
                .allocate_by_percentages(&percentages)
                .unwrap();
            assert_eq!(
                total(&parts),
                amount,
                "Sum invariant failed for amount={amount}, percentages={percentages:?}"
            );
        }
    }

    #[test]
    fn test_allocate_by_percentages_validation() {
        let euros = Money::euro(dec!(100));
        assert!(matches!(
            euros.allocate_by_percentages(&[]),
            Err(MoneyError::InvalidArgument(_))
        ));
        assert!(matches!(
            euros.allocate_by_percentages(&[dec!(50), dec!(40)]),
            Err(MoneyError::InvalidArgument(_))
        ));
        assert!(matches!(
            euros.allocate_by_percentages(&[dec!(120), dec!(-20)]),
            Err(MoneyError::OutOfRange(_))
        ));
    }
}
