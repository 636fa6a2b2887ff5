//! Unrounded money for multi-step calculations.

use coinage_shared::MinorUnit;
use rust_decimal::Decimal;
use serde::Serialize;

use super::value::Money;
use crate::currency::{Currency, CurrencyInfo};
use crate::error::{MoneyError, MoneyResult};

/// A monetary amount that is never rounded.
///
/// Converting to and from [`Money`] is always explicit: `Money::to_exact`
/// is lossless, [`ExactMoney::to_rounded`] is not.
///
/// ```
/// use coinage_core::money::Money;
/// use rust_decimal_macros::dec;
///
/// let price = Money::euro(dec!(10.00)).to_exact();
/// let total = price.multiply(dec!(1.005)).unwrap().multiply(dec!(3)).unwrap();
/// assert_eq!(total.amount(), dec!(30.15));
/// assert_eq!(total.to_rounded().amount(), dec!(30.15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExactMoney {
    amount: Decimal,
    currency: Currency,
    #[serde(skip)]
    minor_unit: MinorUnit,
}

impl ExactMoney {
    /// Creates an unrounded value.
    #[must_use]
    pub fn new(amount: Decimal, info: &CurrencyInfo) -> Self {
        Self {
            amount,
            currency: info.currency(),
            minor_unit: info.minor_unit,
        }
    }

    /// The exact amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Rounds to the currency's minor unit, producing a [`Money`].
    #[must_use]
    pub fn to_rounded(&self) -> Money {
        Money::with_unit(self.amount, self.currency, self.minor_unit)
    }

    /// Rounds to the currency's minor unit but stays exact.
    #[must_use]
    pub fn with_rounding_applied(&self) -> Self {
        Self {
            amount: self.minor_unit.round(self.amount),
            ..*self
        }
    }

    /// Adds two values, with the same zero rule as [`Money::add`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` or `Overflow`.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        if other.is_zero() {
            return Ok(*self);
        }
        if self.is_zero() {
            return Ok(*other);
        }
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow {
                operation: "addition",
            })?;
        Ok(Self { amount, ..*self })
    }

    /// Subtracts `other`, with the same zero rule as [`Money::subtract`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` or `Overflow`.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        if other.is_zero() {
            return Ok(*self);
        }
        if self.is_zero() {
            return Ok(Self {
                amount: -other.amount,
                ..*other
            });
        }
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow {
                operation: "subtraction",
            })?;
        Ok(Self { amount, ..*self })
    }

    /// Multiplies without rounding.
    ///
    /// # Errors
    ///
    /// Returns `Overflow`.
    pub fn multiply(&self, factor: Decimal) -> MoneyResult<Self> {
        let amount = self.amount.checked_mul(factor).ok_or(MoneyError::Overflow {
            operation: "multiplication",
        })?;
        Ok(Self { amount, ..*self })
    }

    /// Divides without rounding.
    ///
    /// # Errors
    ///
    /// Returns `DivideByZero` or `Overflow`.
    pub fn divide(&self, divisor: Decimal) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivideByZero);
        }
        let amount = self.amount.checked_div(divisor).ok_or(MoneyError::Overflow {
            operation: "division",
        })?;
        Ok(Self { amount, ..*self })
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::mismatch(self.currency, other.currency))
        }
    }
}

impl Money {
    /// Lossless conversion to an unrounded value.
    #[must_use]
    pub fn to_exact(&self) -> ExactMoney {
        ExactMoney {
            amount: self.amount(),
            currency: self.currency(),
            minor_unit: self.minor_unit(),
        }
    }
}

impl std::fmt::Display for ExactMoney {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
