//! Money stored as a 64-bit integer scaled by 10^4.
//!
//! Addition, subtraction, remainder and integer multiplication stay in
//! integer space with checked arithmetic. Fractional factors and every
//! divisor go through `Decimal` and are quantized back afterwards.

use std::cmp::Ordering;

use coinage_shared::MinorUnit;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::value::Money;
use crate::currency::{Currency, CurrencyInfo};
use crate::error::{MoneyError, MoneyResult};

/// Fixed number of fractional digits.
pub const FAST_MONEY_SCALE: u32 = 4;

const UNITS_PER_ONE: i64 = 10_000;

/// Compact money value with four fixed decimal places.
///
/// Representable range is ±922 337 203 685 477.5807. Currencies with more
/// than four decimal digits cannot be represented.
#[derive(Debug, Clone, Copy)]
pub struct FastMoney {
    units: i64,
    currency: Currency,
    minor_unit: MinorUnit,
}

impl FastMoney {
    /// Creates a value, rounding to the minor unit first.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for currencies with more than four decimal
    /// digits and `Overflow` when the amount does not fit.
    pub fn new(amount: Decimal, info: &CurrencyInfo) -> MoneyResult<Self> {
        Self::from_decimal(amount, info.currency(), info.minor_unit)
    }

    /// Creates a value from raw units (1 unit = 0.0001).
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for currencies with more than four decimal digits.
    pub fn from_units(units: i64, info: &CurrencyInfo) -> MoneyResult<Self> {
        Self::from_decimal(
            Decimal::new(units, FAST_MONEY_SCALE),
            info.currency(),
            info.minor_unit,
        )
    }

    /// Converts a [`Money`] value.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` or `Overflow` as for [`new`](Self::new).
    pub fn try_from_money(money: &Money) -> MoneyResult<Self> {
        Self::from_decimal(money.amount(), money.currency(), money.minor_unit())
    }

    fn from_decimal(
        amount: Decimal,
        currency: Currency,
        minor_unit: MinorUnit,
    ) -> MoneyResult<Self> {
        ensure_supported(minor_unit)?;
        let units = to_units(minor_unit.round(amount))?;
        Ok(Self {
            units,
            currency,
            minor_unit,
        })
    }

    /// Raw units.
    #[must_use]
    pub const fn units(&self) -> i64 {
        self.units
    }

    /// The amount as a decimal.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.units, FAST_MONEY_SCALE)
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.units == 0
    }

    /// Converts to a [`Money`] value.
    #[must_use]
    pub fn to_money(&self) -> Money {
        Money::with_unit(self.amount(), self.currency, self.minor_unit)
    }

    fn with_units(&self, units: i64) -> Self {
        Self { units, ..*self }
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::mismatch(self.currency, other.currency))
        }
    }

    /// Adds two values; a zero operand is returned as-is.
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
        self.units
            .checked_add(other.units)
            .map(|units| self.with_units(units))
            .ok_or(MoneyError::Overflow {
                operation: "addition",
            })
    }

    /// Subtracts `other`; subtracting from zero negates `other`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` or `Overflow`.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        if other.is_zero() {
            return Ok(*self);
        }
        if self.is_zero() {
            return other.negate();
        }
        self.ensure_same_currency(other)?;
        self.units
            .checked_sub(other.units)
            .map(|units| self.with_units(units))
            .ok_or(MoneyError::Overflow {
                operation: "subtraction",
            })
    }

    /// Multiplies by a factor and rounds to the minor unit.
    ///
    /// # Errors
    ///
    /// Returns `Overflow`.
    pub fn multiply(&self, factor: Decimal) -> MoneyResult<Self> {
        if factor == Decimal::ONE {
            return Ok(*self);
        }
        if factor.fract().is_zero()
            && let Some(multiplier) = factor.to_i64()
        {
            return self
                .units
                .checked_mul(multiplier)
                .map(|units| self.with_units(units))
                .ok_or(MoneyError::Overflow {
                    operation: "multiplication",
                });
        }
        let product = self
            .amount()
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow {
                operation: "multiplication",
            })?;
        Self::from_decimal(product, self.currency, self.minor_unit)
    }

    /// Divides by a divisor and rounds to the minor unit.
    ///
    /// # Errors
    ///
    /// Returns `DivideByZero` or `Overflow`.
    pub fn divide(&self, divisor: Decimal) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivideByZero);
        }
        if divisor == Decimal::ONE {
            return Ok(*self);
        }
        let quotient = self
            .amount()
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow {
                operation: "division",
            })?;
        Self::from_decimal(quotient, self.currency, self.minor_unit)
    }

    /// Remainder of dividing by another value of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` or `DivideByZero`.
    pub fn remainder(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        if other.is_zero() {
            return Err(MoneyError::DivideByZero);
        }
        self.units
            .checked_rem(other.units)
            .map(|units| self.with_units(units))
            .ok_or(MoneyError::Overflow {
                operation: "remainder",
            })
    }

    /// Flips the sign.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` for the most negative value.
    pub fn negate(&self) -> MoneyResult<Self> {
        self.units
            .checked_neg()
            .map(|units| self.with_units(units))
            .ok_or(MoneyError::Overflow {
                operation: "negation",
            })
    }

    /// Adds one minimal amount of the currency.
    ///
    /// # Errors
    ///
    /// Returns `Overflow`.
    pub fn increment(&self) -> MoneyResult<Self> {
        let step = to_units(self.minor_unit.minimal_amount())?;
        self.units
            .checked_add(step)
            .map(|units| self.with_units(units))
            .ok_or(MoneyError::Overflow {
                operation: "addition",
            })
    }

    /// Subtracts one minimal amount of the currency.
    ///
    /// # Errors
    ///
    /// Returns `Overflow`.
    pub fn decrement(&self) -> MoneyResult<Self> {
        let step = to_units(self.minor_unit.minimal_amount())?;
        self.units
            .checked_sub(step)
            .map(|units| self.with_units(units))
            .ok_or(MoneyError::Overflow {
                operation: "subtraction",
            })
    }

    /// Compares two values; zero compares against any currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` for two non-zero values in different currencies.
    pub fn try_cmp(&self, other: &Self) -> MoneyResult<Ordering> {
        if self.currency != other.currency && !self.is_zero() && !other.is_zero() {
            return Err(MoneyError::mismatch(self.currency, other.currency));
        }
        Ok(self.units.cmp(&other.units))
    }
}

fn ensure_supported(minor_unit: MinorUnit) -> MoneyResult<()> {
    if minor_unit.is_decimal_based() && minor_unit.decimal_digits() > FAST_MONEY_SCALE {
        return Err(MoneyError::OutOfRange(format!(
            "FastMoney supports at most {FAST_MONEY_SCALE} decimal digits, currency has {}",
            minor_unit.decimal_digits()
        )));
    }
    Ok(())
}

fn to_units(amount: Decimal) -> MoneyResult<i64> {
    amount
        .round_dp_with_strategy(FAST_MONEY_SCALE, RoundingStrategy::MidpointNearestEven)
        .checked_mul(Decimal::from(UNITS_PER_ONE))
        .and_then(|scaled| scaled.to_i64())
        .ok_or(MoneyError::Overflow {
            operation: "conversion to FastMoney",
        })
}

impl PartialEq for FastMoney {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.units == other.units
    }
}

impl Eq for FastMoney {}

impl PartialOrd for FastMoney {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency == other.currency {
            Some(self.units.cmp(&other.units))
        } else {
            None
        }
    }
}

impl std::fmt::Display for FastMoney {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.to_money(), f)
    }
}
