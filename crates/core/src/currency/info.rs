//! Currency metadata and the lightweight currency identifier.

use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, Utc};
use coinage_shared::{CurrencyCode, MinorUnit};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::iso4217::CurrencyRecord;
use super::region;
use super::registry::CurrencyRegistry;
use crate::error::{MoneyError, MoneyResult};
use crate::format::Culture;

/// Index of a namespace inside a [`CurrencyRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceId(pub(crate) u8);

impl NamespaceId {
    /// The current ISO-4217 namespace.
    pub const ISO_4217: Self = Self(0);
    /// The historic ISO-4217 namespace.
    pub const ISO_4217_HISTORIC: Self = Self(1);

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Full metadata of a currency, as held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    /// Three-letter code.
    pub code: CurrencyCode,
    /// ISO-4217 numeric code, 0 when the currency has none.
    pub numeric_code: u16,
    /// How the currency subdivides.
    pub minor_unit: MinorUnit,
    /// English name.
    pub english_name: String,
    /// Currency symbol, `¤` when unknown.
    pub symbol: String,
    /// First day the currency was valid.
    pub introduced_on: Option<NaiveDate>,
    /// Last day the currency was valid.
    pub expired_on: Option<NaiveDate>,
    /// False for user-registered currencies.
    pub is_iso4217: bool,
    /// Namespace the currency is registered in.
    pub namespace: String,
    #[serde(skip)]
    pub(crate) namespace_id: NamespaceId,
}

impl CurrencyInfo {
    pub(crate) fn from_record(
        record: &CurrencyRecord,
        namespace: &str,
        namespace_id: NamespaceId,
    ) -> Self {
        Self {
            code: CurrencyCode::from_static(record.code),
            numeric_code: record.numeric_code,
            minor_unit: record.minor_unit,
            english_name: record.english_name.to_string(),
            symbol: record.symbol.to_string(),
            introduced_on: record.introduced_on(),
            expired_on: record.expired_on(),
            is_iso4217: true,
            namespace: namespace.to_string(),
            namespace_id,
        }
    }

    /// Returns the identifier for this currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        Currency {
            code: self.code,
            namespace: self.namespace_id,
            is_iso4217: self.is_iso4217,
        }
    }

    /// Number of fractional digits (sentinel minor units map to 1 and 0).
    #[must_use]
    pub fn decimal_digits(&self) -> u32 {
        self.minor_unit.decimal_digits()
    }

    /// Returns true unless the currency divides into fifths.
    #[must_use]
    pub fn minor_unit_is_decimal_based(&self) -> bool {
        self.minor_unit.is_decimal_based()
    }

    /// Smallest representable amount.
    #[must_use]
    pub fn minimal_amount(&self) -> Decimal {
        self.minor_unit.minimal_amount()
    }

    /// Numeric code zero-padded to three digits ("036").
    #[must_use]
    pub fn numeric_code_string(&self) -> String {
        format!("{:03}", self.numeric_code)
    }

    /// Returns true if the currency is outside its validity window on `date`.
    #[must_use]
    pub fn is_historic_on(&self, date: NaiveDate) -> bool {
        self.expired_on.is_some_and(|expired| expired < date)
            || self.introduced_on.is_some_and(|introduced| introduced > date)
    }

    /// Returns true if the currency is outside its validity window today (UTC).
    #[must_use]
    pub fn is_historic(&self) -> bool {
        self.is_historic_on(Utc::now().date_naive())
    }

    /// Returns true if the currency is legal tender on `date`.
    #[must_use]
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        !self.is_historic_on(date)
    }
}

/// Lightweight, copyable currency identifier.
///
/// Equality and hashing use the code only; metadata is looked up in a
/// [`CurrencyRegistry`] on demand.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Currency {
    code: CurrencyCode,
    namespace: NamespaceId,
    is_iso4217: bool,
}

impl Currency {
    /// The "no currency" code `XXX`.
    pub const NO_CURRENCY: Self = Self::iso("XXX");

    pub(crate) const fn iso(code: &'static str) -> Self {
        Self {
            code: CurrencyCode::from_static(code),
            namespace: NamespaceId::ISO_4217,
            is_iso4217: true,
        }
    }

    /// Resolves a currency by code, searching every namespace.
    pub fn from_code(code: &str, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        Ok(registry.get(code)?.currency())
    }

    /// Resolves a currency by code inside one namespace.
    pub fn from_code_in(
        code: &str,
        namespace: &str,
        registry: &CurrencyRegistry,
    ) -> MoneyResult<Self> {
        Ok(registry.get_in(code, namespace)?.currency())
    }

    /// Resolves the currency of an ISO-3166 alpha-2 region ("NL", "US").
    pub fn from_region(region_code: &str, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        if region_code.trim().is_empty() {
            return Err(MoneyError::InvalidArgument(
                "region must not be empty".to_string(),
            ));
        }
        let code = region::currency_for_region(region_code).ok_or_else(|| {
            MoneyError::InvalidArgument(format!("{region_code} is not a known region"))
        })?;
        Self::from_code(code, registry)
    }

    /// Resolves the home currency of a culture.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for the invariant culture, which has no
    /// region.
    pub fn from_culture(culture: &Culture, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        let region_code = culture.region().ok_or_else(|| {
            MoneyError::InvalidArgument(format!(
                "culture {culture} has no region, a specific culture is required"
            ))
        })?;
        Self::from_region(region_code, registry)
    }

    /// Resolves the currency of a specific culture name ("nl-NL", "en_US").
    ///
    /// Neutral cultures ("en") have no region and are rejected.
    pub fn from_culture_name(name: &str, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        let region_code = region::region_of_culture(name).ok_or_else(|| {
            MoneyError::InvalidArgument(format!(
                "culture '{name}' is neutral or invalid, a specific culture is required"
            ))
        })?;
        Self::from_region(region_code, registry)
    }

    /// Three-letter code.
    #[must_use]
    pub const fn code(&self) -> CurrencyCode {
        self.code
    }

    /// Namespace the currency was resolved from.
    #[must_use]
    pub const fn namespace_id(&self) -> NamespaceId {
        self.namespace
    }

    /// False for user-registered currencies.
    #[must_use]
    pub const fn is_iso4217(&self) -> bool {
        self.is_iso4217
    }

    /// Looks up the full metadata of this currency.
    pub fn info(&self, registry: &CurrencyRegistry) -> MoneyResult<std::sync::Arc<CurrencyInfo>> {
        registry.get_currency(self)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.code.serialize(serializer)
    }
}
