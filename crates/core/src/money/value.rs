//! The rounded money value type.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` and are rounded to the currency's
//! minor unit on every construction, so no unrounded `Money` can exist.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use coinage_shared::MinorUnit;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::currency::iso4217::find_current;
use crate::currency::{Currency, CurrencyInfo, CurrencyRegistry};
use crate::error::{MoneyError, MoneyResult};

/// A monetary amount bound to a currency.
///
/// Two values are equal when amount and currency match; `1.0 EUR == 1.00 EUR`.
/// Values in different currencies are unordered.
#[derive(Debug, Clone, Copy)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
    minor_unit: MinorUnit,
}

impl Money {
    /// Creates a money value, rounding `amount` to the currency's minor unit.
    ///
    /// ```
    /// use coinage_core::currency::CurrencyRegistry;
    /// use coinage_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let registry = CurrencyRegistry::new();
    /// let jpy = registry.get("JPY").unwrap();
    /// assert_eq!(Money::new(dec!(765.5), &jpy).amount(), dec!(766));
    /// ```
    #[must_use]
    pub fn new(amount: Decimal, info: &CurrencyInfo) -> Self {
        Self::with_unit(amount, info.currency(), info.minor_unit)
    }

    /// Creates a money value from a currency identifier.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrencyCode` if the currency is no longer registered.
    pub fn from_currency(
        amount: Decimal,
        currency: Currency,
        registry: &CurrencyRegistry,
    ) -> MoneyResult<Self> {
        Ok(Self::new(amount, &*registry.get_currency(&currency)?))
    }

    /// Zero in the given currency.
    #[must_use]
    pub fn zero(info: &CurrencyInfo) -> Self {
        Self::new(Decimal::ZERO, info)
    }

    /// Euros.
    #[must_use]
    pub fn euro(amount: Decimal) -> Self {
        Self::iso(amount, "EUR")
    }

    /// US dollars.
    #[must_use]
    pub fn us_dollar(amount: Decimal) -> Self {
        Self::iso(amount, "USD")
    }

    /// Japanese yen.
    #[must_use]
    pub fn yen(amount: Decimal) -> Self {
        Self::iso(amount, "JPY")
    }

    /// Pounds sterling.
    #[must_use]
    pub fn pound_sterling(amount: Decimal) -> Self {
        Self::iso(amount, "GBP")
    }

    /// Chinese yuan.
    #[must_use]
    pub fn yuan(amount: Decimal) -> Self {
        Self::iso(amount, "CNY")
    }

    fn iso(amount: Decimal, code: &'static str) -> Self {
        let minor_unit = find_current(code).map_or(MinorUnit::TWO, |record| record.minor_unit);
        Self::with_unit(amount, Currency::iso(code), minor_unit)
    }

    pub(crate) fn with_unit(amount: Decimal, currency: Currency, minor_unit: MinorUnit) -> Self {
        Self {
            amount: minor_unit.round(amount),
            currency,
            minor_unit,
        }
    }

    fn with_amount(&self, amount: Decimal) -> Self {
        Self::with_unit(amount, self.currency, self.minor_unit)
    }

    /// The rounded amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// The currency's minor unit.
    #[must_use]
    pub const fn minor_unit(&self) -> MinorUnit {
        self.minor_unit
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns true if the amount is above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub(crate) fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::mismatch(self.currency, other.currency))
        }
    }

    /// Adds two values.
    ///
    /// A zero operand is returned as-is regardless of its currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` for two non-zero values in different
    /// currencies, or `Overflow`.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        if other.is_zero() {
            return Ok(*self);
        }
        if self.is_zero() {
            return Ok(*other);
        }
        self.ensure_same_currency(other)?;
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow {
                operation: "addition",
            })?;
        Ok(self.with_amount(sum))
    }

    /// Subtracts `other`.
    ///
    /// Subtracting zero returns `self`; subtracting from zero returns the
    /// negated `other`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` for two non-zero values in different
    /// currencies, or `Overflow`.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        if other.is_zero() {
            return Ok(*self);
        }
        if self.is_zero() {
            return Ok(other.negate());
        }
        self.ensure_same_currency(other)?;
        let difference = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow {
                operation: "subtraction",
            })?;
        Ok(self.with_amount(difference))
    }

    /// Adds a plain amount in this value's currency.
    ///
    /// # Errors
    ///
    /// Returns `Overflow`.
    pub fn add_amount(&self, amount: Decimal) -> MoneyResult<Self> {
        if amount.is_zero() {
            return Ok(*self);
        }
        let sum = self.amount.checked_add(amount).ok_or(MoneyError::Overflow {
            operation: "addition",
        })?;
        Ok(self.with_amount(sum))
    }

    /// Subtracts a plain amount in this value's currency.
    ///
    /// # Errors
    ///
    /// Returns `Overflow`.
    pub fn subtract_amount(&self, amount: Decimal) -> MoneyResult<Self> {
        if amount.is_zero() {
            return Ok(*self);
        }
        let difference = self.amount.checked_sub(amount).ok_or(MoneyError::Overflow {
            operation: "subtraction",
        })?;
        Ok(self.with_amount(difference))
    }

    /// Multiplies by a factor and rounds back to the minor unit.
    ///
    /// Use [`to_exact`](Self::to_exact) to chain multiplications without
    /// intermediate rounding.
    ///
    /// # Errors
    ///
    /// Returns `Overflow`.
    pub fn multiply(&self, factor: Decimal) -> MoneyResult<Self> {
        if factor == Decimal::ONE {
            return Ok(*self);
        }
        let product = self.amount.checked_mul(factor).ok_or(MoneyError::Overflow {
            operation: "multiplication",
        })?;
        Ok(self.with_amount(product))
    }

    /// Divides by a divisor and rounds back to the minor unit.
    ///
    /// The rounding may lose fractions; use [`split`](Self::split) to divide
    /// without losing any.
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
        let quotient = self.amount.checked_div(divisor).ok_or(MoneyError::Overflow {
            operation: "division",
        })?;
        Ok(self.with_amount(quotient))
    }

    /// Divides two values of the same currency, yielding a plain ratio.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency`, `DivideByZero` or `Overflow`.
    pub fn ratio(&self, other: &Self) -> MoneyResult<Decimal> {
        self.ensure_same_currency(other)?;
        if other.is_zero() {
            return Err(MoneyError::DivideByZero);
        }
        self.amount
            .checked_div(other.amount)
            .ok_or(MoneyError::Overflow {
                operation: "division",
            })
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
        let remainder = self
            .amount
            .checked_rem(other.amount)
            .ok_or(MoneyError::Overflow {
                operation: "remainder",
            })?;
        Ok(self.with_amount(remainder))
    }

    /// Flips the sign.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            amount: -self.amount,
            ..*self
        }
    }

    /// Unary plus; returns the value unchanged.
    #[must_use]
    pub const fn plus(&self) -> Self {
        *self
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            ..*self
        }
    }

    /// Adds one minimal amount (one cent for EUR, one yen for JPY).
    ///
    /// # Errors
    ///
    /// Returns `Overflow`.
    pub fn increment(&self) -> MoneyResult<Self> {
        self.add_amount(self.minor_unit.minimal_amount())
    }

    /// Subtracts one minimal amount.
    ///
    /// # Errors
    ///
    /// Returns `Overflow`.
    pub fn decrement(&self) -> MoneyResult<Self> {
        self.subtract_amount(self.minor_unit.minimal_amount())
    }

    /// Compares two values.
    ///
    /// Zero compares against any currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` for two non-zero values in different currencies.
    pub fn try_cmp(&self, other: &Self) -> MoneyResult<Ordering> {
        if self.currency != other.currency && !self.is_zero() && !other.is_zero() {
            return Err(MoneyError::mismatch(self.currency, other.currency));
        }
        Ok(self.amount.cmp(&other.amount))
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount == other.amount
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.normalize().hash(state);
        self.currency.hash(state);
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency == other.currency {
            Some(self.amount.cmp(&other.amount))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.minor_unit {
            MinorUnit::NotApplicable => write!(f, "{} {}", self.amount, self.currency),
            unit => {
                let digits = unit.decimal_digits() as usize;
                write!(f, "{:.digits$} {}", self.amount, self.currency)
            }
        }
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_record().serialize(serializer)
    }
}

impl Add for Money {
    type Output = MoneyResult<Self>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::add(&self, &rhs)
    }
}

impl Sub for Money {
    type Output = MoneyResult<Self>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl Rem for Money {
    type Output = MoneyResult<Self>;

    fn rem(self, rhs: Self) -> Self::Output {
        self.remainder(&rhs)
    }
}

impl Mul<Decimal> for Money {
    type Output = MoneyResult<Self>;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Div<Decimal> for Money {
    type Output = MoneyResult<Self>;

    fn div(self, rhs: Decimal) -> Self::Output {
        self.divide(rhs)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
