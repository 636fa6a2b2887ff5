//! Money-conserving division.
//!
//! Every share but the last is rounded to the currency's minor unit; the
//! last share absorbs the rounding slack, so the shares always sum to the
//! original amount.

use rust_decimal::Decimal;

use super::value::Money;
use crate::error::{MoneyError, MoneyResult};

#[derive(Debug, Clone)]
enum Weights {
    Equal { count: usize, share: Decimal },
    Ratios { ratios: Vec<u32>, total: Decimal },
}

/// Lazy iterator over the shares of a split.
///
/// Clone it to enumerate the shares again.
///
/// ```
/// use coinage_core::money::Money;
/// use rust_decimal_macros::dec;
///
/// let shares: Vec<_> = Money::euro(dec!(100.12)).split(3).unwrap().collect();
/// assert_eq!(shares[0].amount(), dec!(33.37));
/// assert_eq!(shares[2].amount(), dec!(33.38));
/// ```
#[derive(Debug, Clone)]
pub struct Split {
    source: Money,
    weights: Weights,
    index: usize,
    allocated: Decimal,
}

impl Split {
    fn share_count(&self) -> usize {
        match &self.weights {
            Weights::Equal { count, .. } => *count,
            Weights::Ratios { ratios, .. } => ratios.len(),
        }
    }

    fn share_at(&self, index: usize) -> Decimal {
        let source = &self.source;
        match &self.weights {
            Weights::Equal { share, .. } => *share,
            Weights::Ratios { ratios, total } => {
                let weighted = source.amount() * Decimal::from(ratios[index]) / *total;
                source.minor_unit().round(weighted)
            }
        }
    }
}

impl Iterator for Split {
    type Item = Money;

    fn next(&mut self) -> Option<Self::Item> {
        let count = self.share_count();
        if self.index >= count {
            return None;
        }
        let amount = if self.index + 1 == count {
            self.source.amount() - self.allocated
        } else {
            self.share_at(self.index)
        };
        self.allocated += amount;
        self.index += 1;
        Some(Money::with_unit(
            amount,
            self.source.currency(),
            self.source.minor_unit(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.share_count() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Split {}

impl Money {
    /// Splits into `shares` parts that sum exactly to this amount.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `shares` is below 2.
    pub fn split(&self, shares: u32) -> MoneyResult<Split> {
        if shares <= 1 {
            return Err(MoneyError::OutOfRange(format!(
                "number of shares must be greater than 1, got {shares}"
            )));
        }
        let count = usize::try_from(shares)
            .map_err(|_| MoneyError::OutOfRange(format!("{shares} shares")))?;
        let share = self
            .amount()
            .checked_div(Decimal::from(shares))
            .map(|quotient| self.minor_unit().round(quotient))
            .ok_or(MoneyError::Overflow {
                operation: "division",
            })?;

        Ok(Split {
            source: *self,
            weights: Weights::Equal { count, share },
            index: 0,
            allocated: Decimal::ZERO,
        })
    }

    /// Splits proportionally to `ratios`; the parts sum exactly to this amount.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty slice, `OutOfRange` for a ratio
    /// below 1, and `Overflow` when a weighted share cannot be computed.
    pub fn split_by_ratios(&self, ratios: &[u32]) -> MoneyResult<Split> {
        let Some(&largest) = ratios.iter().max() else {
            return Err(MoneyError::InvalidArgument(
                "ratios must not be empty".to_string(),
            ));
        };
        if ratios.contains(&0) {
            return Err(MoneyError::OutOfRange(
                "every ratio must be at least 1".to_string(),
            ));
        }
        self.amount()
            .checked_mul(Decimal::from(largest))
            .ok_or(MoneyError::Overflow {
                operation: "multiplication",
            })?;
        let total: u64 = ratios.iter().map(|&ratio| u64::from(ratio)).sum();

        Ok(Split {
            source: *self,
            weights: Weights::Ratios {
                ratios: ratios.to_vec(),
                total: Decimal::from(total),
            },
            index: 0,
            allocated: Decimal::ZERO,
        })
    }
}
