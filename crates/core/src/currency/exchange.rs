//! Exchange rate between two currencies.

use coinage_shared::MinorUnit;
use rust_decimal::Decimal;
use serde::Serialize;

use super::info::{Currency, CurrencyInfo};
use super::registry::CurrencyRegistry;
use crate::error::{MoneyError, MoneyResult};
use crate::format::Culture;
use crate::money::Money;

/// Decimal places kept on a rate.
pub const RATE_SCALE: u32 = 6;

/// Exchange rate between a base and a quote currency.
///
/// `1 base = value quote`. The value is rounded to six decimal places and
/// is always positive, except for the [`unset`](Self::unset) sentinel.
///
/// ```
/// use coinage_core::currency::{CurrencyRegistry, ExchangeRate};
/// use coinage_core::money::Money;
/// use rust_decimal_macros::dec;
///
/// let registry = CurrencyRegistry::new();
/// let fx = ExchangeRate::from_codes("EUR", "USD", dec!(1.2591), &registry).unwrap();
/// let dollars = fx.convert(&Money::euro(dec!(100.99))).unwrap();
/// assert_eq!(dollars, Money::us_dollar(dec!(127.16)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExchangeRate {
    base: Currency,
    quote: Currency,
    value: Decimal,
    #[serde(skip)]
    base_unit: MinorUnit,
    #[serde(skip)]
    quote_unit: MinorUnit,
}

impl ExchangeRate {
    /// Creates a rate for `1 base = rate quote`.
    ///
    /// # Errors
    ///
    /// Returns `SameCurrency` when base and quote are equal, and
    /// `OutOfRange` when the rate is not positive after rounding to six
    /// decimals.
    pub fn new(base: &CurrencyInfo, quote: &CurrencyInfo, rate: Decimal) -> MoneyResult<Self> {
        if base.currency() == quote.currency() {
            return Err(MoneyError::SameCurrency(base.code.to_string()));
        }
        Self::with_value(
            base.currency(),
            base.minor_unit,
            quote.currency(),
            quote.minor_unit,
            rate,
        )
    }

    /// Creates a rate by looking both codes up in `registry`.
    ///
    /// # Errors
    ///
    /// Returns the lookup error for an unknown code, otherwise as
    /// [`new`](Self::new).
    pub fn from_codes(
        base: &str,
        quote: &str,
        rate: Decimal,
        registry: &CurrencyRegistry,
    ) -> MoneyResult<Self> {
        Self::new(&*registry.get(base)?, &*registry.get(quote)?, rate)
    }

    /// The "no rate" sentinel: `XXX/XXX 0`.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            base: Currency::NO_CURRENCY,
            quote: Currency::NO_CURRENCY,
            value: Decimal::ZERO,
            base_unit: MinorUnit::NotApplicable,
            quote_unit: MinorUnit::NotApplicable,
        }
    }

    fn with_value(
        base: Currency,
        base_unit: MinorUnit,
        quote: Currency,
        quote_unit: MinorUnit,
        rate: Decimal,
    ) -> MoneyResult<Self> {
        if rate <= Decimal::ZERO {
            return Err(MoneyError::OutOfRange(format!(
                "exchange rate must be greater than zero, got {rate}"
            )));
        }
        let value = rate.round_dp(RATE_SCALE);
        if value.is_zero() {
            return Err(MoneyError::OutOfRange(format!(
                "exchange rate {rate} rounds to zero at {RATE_SCALE} decimals"
            )));
        }
        Ok(Self {
            base,
            quote,
            value,
            base_unit,
            quote_unit,
        })
    }

    /// Base currency.
    #[must_use]
    pub const fn base(&self) -> Currency {
        self.base
    }

    /// Quote currency.
    #[must_use]
    pub const fn quote(&self) -> Currency {
        self.quote
    }

    /// Units of quote currency per unit of base currency.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// True for the [`unset`](Self::unset) sentinel.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.value.is_zero()
    }

    /// Converts base to quote (multiplying) or quote to base (dividing).
    /// The result is rounded to the target currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `money` is in neither currency or the
    /// rate is unset, and `Overflow` when the product does not fit.
    pub fn convert(&self, money: &Money) -> MoneyResult<Money> {
        if self.is_unset() {
            return Err(MoneyError::InvalidArgument(
                "cannot convert with an unset exchange rate".to_string(),
            ));
        }
        let overflow = MoneyError::Overflow {
            operation: "conversion",
        };
        let currency = money.currency();
        if currency == self.base {
            let amount = money.amount().checked_mul(self.value).ok_or(overflow)?;
            Ok(Money::with_unit(amount, self.quote, self.quote_unit))
        } else if currency == self.quote {
            let amount = money.amount().checked_div(self.value).ok_or(overflow)?;
            Ok(Money::with_unit(amount, self.base, self.base_unit))
        } else {
            Err(MoneyError::InvalidArgument(format!(
                "money must be in {} or {}, got {currency}",
                self.base, self.quote
            )))
        }
    }

    /// The quote/base rate, `1 / value` rounded to six decimals.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when the inverse rounds to zero or the rate is
    /// unset.
    pub fn inverse(&self) -> MoneyResult<Self> {
        let inverted = Decimal::ONE.checked_div(self.value).ok_or_else(|| {
            MoneyError::OutOfRange("an unset exchange rate has no inverse".to_string())
        })?;
        Self::with_value(
            self.quote,
            self.quote_unit,
            self.base,
            self.base_unit,
            inverted,
        )
    }

    /// Parses `"EUR/USD 1.2591"` or `"EURUSD 1,2591"`, reading the rate in
    /// `culture`.
    ///
    /// # Errors
    ///
    /// Returns `Format` for malformed text, unknown codes, identical codes,
    /// or a rate that is not positive.
    pub fn parse(text: &str, culture: &Culture, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        let malformed = || MoneyError::Format(format!("'{text}' is not a valid exchange rate"));
        let (pair, rate_text) = text.trim().split_once(char::is_whitespace).ok_or_else(malformed)?;
        let (base_code, quote_code) = match pair.split_once('/') {
            Some(codes) => codes,
            None if pair.len() == 6 && pair.is_ascii() => pair.split_at(3),
            None => return Err(malformed()),
        };

        let lookup = |code: &str| {
            registry.get(code).map_err(|_| {
                MoneyError::Format(format!("'{code}' in '{text}' is not a known currency"))
            })
        };
        let base = lookup(base_code)?;
        let quote = lookup(quote_code)?;
        let rate = culture.parse_decimal(rate_text).ok_or_else(malformed)?;

        Self::new(&base, &quote, rate).map_err(|err| MoneyError::Format(err.to_string()))
    }

    /// Like [`parse`](Self::parse), but returns `None` on failure.
    #[must_use]
    pub fn try_parse(text: &str, culture: &Culture, registry: &CurrencyRegistry) -> Option<Self> {
        Self::parse(text, culture, registry).ok()
    }

    /// Like [`parse`](Self::parse), but returns [`unset`](Self::unset) on
    /// failure.
    #[must_use]
    pub fn parse_or_unset(text: &str, culture: &Culture, registry: &CurrencyRegistry) -> Self {
        Self::try_parse(text, culture, registry).unwrap_or_else(Self::unset)
    }

    /// Formats as `"EUR/USD 1,2591"` with the culture's decimal separator.
    #[must_use]
    pub fn to_string_in(&self, culture: &Culture) -> String {
        format!(
            "{}/{} {}",
            self.base,
            self.quote,
            culture.format_plain(self.value)
        )
    }
}

impl std::fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} {}", self.base, self.quote, self.value)
    }
}
