//! Builder for custom currencies.

use std::sync::Arc;

use chrono::NaiveDate;
use coinage_shared::types::GENERIC_CURRENCY_SIGN;
use coinage_shared::{CurrencyCode, MinorUnit};

use super::info::{Currency, CurrencyInfo, NamespaceId};
use super::registry::CurrencyRegistry;
use crate::error::{MoneyError, MoneyResult};

/// Largest ISO-4217 numeric code.
const MAX_NUMERIC_CODE: u16 = 999;

/// Builds a [`CurrencyInfo`] and optionally registers it.
///
/// ```
/// use coinage_core::currency::{CurrencyBuilder, CurrencyRegistry};
///
/// let registry = CurrencyRegistry::new();
/// let btc = CurrencyBuilder::new("BTC", "virtual")
///     .english_name("Bitcoin")
///     .symbol("₿")
///     .register(&registry)
///     .unwrap();
/// assert_eq!(btc.code().as_str(), "BTC");
/// ```
#[derive(Debug, Clone)]
pub struct CurrencyBuilder {
    code: String,
    namespace: String,
    english_name: Option<String>,
    symbol: String,
    numeric_code: u16,
    minor_unit: MinorUnit,
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
    is_iso4217: bool,
}

impl CurrencyBuilder {
    /// Starts a custom currency with two decimal digits and the generic sign.
    #[must_use]
    pub fn new(code: &str, namespace: &str) -> Self {
        Self {
            code: code.to_string(),
            namespace: namespace.to_string(),
            english_name: None,
            symbol: GENERIC_CURRENCY_SIGN.to_string(),
            numeric_code: 0,
            minor_unit: MinorUnit::TWO,
            valid_from: None,
            valid_to: None,
            is_iso4217: false,
        }
    }

    /// Starts from the data of an existing currency, under a new code and namespace.
    #[must_use]
    pub fn from_existing(code: &str, namespace: &str, existing: &CurrencyInfo) -> Self {
        Self {
            code: code.to_string(),
            namespace: namespace.to_string(),
            english_name: Some(existing.english_name.clone()),
            symbol: existing.symbol.clone(),
            numeric_code: existing.numeric_code,
            minor_unit: existing.minor_unit,
            valid_from: existing.introduced_on,
            valid_to: existing.expired_on,
            is_iso4217: existing.is_iso4217,
        }
    }

    /// Sets the English name (defaults to the code).
    #[must_use]
    pub fn english_name(mut self, name: &str) -> Self {
        self.english_name = Some(name.to_string());
        self
    }

    /// Sets the symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = symbol.to_string();
        self
    }

    /// Sets the numeric code.
    #[must_use]
    pub const fn numeric_code(mut self, numeric_code: u16) -> Self {
        self.numeric_code = numeric_code;
        self
    }

    /// Sets the minor unit.
    #[must_use]
    pub const fn minor_unit(mut self, minor_unit: MinorUnit) -> Self {
        self.minor_unit = minor_unit;
        self
    }

    /// Sets the first day of validity.
    #[must_use]
    pub const fn valid_from(mut self, date: NaiveDate) -> Self {
        self.valid_from = Some(date);
        self
    }

    /// Sets the last day of validity.
    #[must_use]
    pub const fn valid_to(mut self, date: NaiveDate) -> Self {
        self.valid_to = Some(date);
        self
    }

    /// Marks the currency as part of ISO-4217.
    #[must_use]
    pub const fn is_iso4217(mut self, is_iso4217: bool) -> Self {
        self.is_iso4217 = is_iso4217;
        self
    }

    /// Validates the data and returns the metadata without registering it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a malformed code, an empty namespace,
    /// a minor unit beyond 28 decimal places, or an inverted validity window,
    /// and `OutOfRange` for a numeric code above 999.
    pub fn build(self) -> MoneyResult<CurrencyInfo> {
        let code = CurrencyCode::parse(&self.code)
            .map_err(|e| MoneyError::InvalidArgument(e.to_string()))?;

        if self.namespace.trim().is_empty() {
            return Err(MoneyError::InvalidArgument(
                "namespace must not be empty".to_string(),
            ));
        }
        let minor_unit = self
            .minor_unit
            .validated()
            .map_err(|e| MoneyError::InvalidArgument(format!("currency {code}: {e}")))?;
        if self.numeric_code > MAX_NUMERIC_CODE {
            return Err(MoneyError::OutOfRange(format!(
                "numeric code {} exceeds {MAX_NUMERIC_CODE}",
                self.numeric_code
            )));
        }
        if let (Some(from), Some(to)) = (self.valid_from, self.valid_to)
            && from > to
        {
            return Err(MoneyError::InvalidArgument(format!(
                "currency {code} is valid from {from}, after its end date {to}"
            )));
        }

        Ok(CurrencyInfo {
            code,
            numeric_code: self.numeric_code,
            minor_unit,
            english_name: self.english_name.unwrap_or_else(|| code.to_string()),
            symbol: self.symbol,
            introduced_on: self.valid_from,
            expired_on: self.valid_to,
            is_iso4217: self.is_iso4217,
            namespace: self.namespace,
            namespace_id: NamespaceId::ISO_4217,
        })
    }

    /// Builds and registers the currency.
    ///
    /// # Errors
    ///
    /// Returns the [`build`](Self::build) errors, or `DuplicateRegistration`.
    pub fn register(self, registry: &CurrencyRegistry) -> MoneyResult<Currency> {
        registry.register(self.build()?)
    }

    /// Removes a registered currency.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrencyCode` when `(code, namespace)` is not registered.
    pub fn unregister(
        code: &str,
        namespace: &str,
        registry: &CurrencyRegistry,
    ) -> MoneyResult<Arc<CurrencyInfo>> {
        registry
            .try_remove(code, namespace)
            .ok_or_else(|| MoneyError::unknown(code.to_ascii_uppercase(), Some(namespace)))
    }
}
