//! In-memory registry of currency definitions.
//!
//! Entries are keyed by `(code, namespace)`. The same code may live in
//! several namespaces (a current and a historic table), but only once per
//! namespace. Reads go straight to the sharded map; writers are serialized
//! by a single mutex so namespace registration and insertion stay atomic.

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use coinage_shared::config::RegistryConfig;
use coinage_shared::{CurrencyCode, MinorUnit};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::{Mutex, RwLock};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::builder::CurrencyBuilder;
use super::historic::HISTORIC;
use super::info::{Currency, CurrencyInfo, NamespaceId};
use super::iso4217::{CURRENT, CurrencyRecord};
use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;

/// Namespace of the current ISO-4217 table.
pub const ISO_NAMESPACE: &str = "ISO-4217";

/// Namespace of the historic ISO-4217 table.
pub const HISTORIC_NAMESPACE: &str = "ISO-4217-HISTORIC";

/// Upper bound on the number of namespaces (ids are a `u8`).
pub const MAX_NAMESPACES: usize = 255;

/// Why an insertion was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Duplicate,
    NamespacesExhausted,
    InvalidMinorUnit,
}

/// Registry of known currencies.
///
/// Create one at startup and share it through an `Arc`. A fresh registry
/// holds the current and historic ISO-4217 tables.
pub struct CurrencyRegistry {
    entries: DashMap<(CurrencyCode, NamespaceId), Arc<CurrencyInfo>>,
    namespaces: RwLock<Vec<String>>,
    write_lock: Mutex<()>,
}

impl CurrencyRegistry {
    /// Creates a registry pre-loaded with the current and historic ISO tables.
    #[must_use]
    pub fn new() -> Self {
        let registry = Self::empty();
        registry.load_table(CURRENT, ISO_NAMESPACE, NamespaceId::ISO_4217);
        registry.load_table(HISTORIC, HISTORIC_NAMESPACE, NamespaceId::ISO_4217_HISTORIC);
        info!(
            currencies = registry.entries.len(),
            "Currency registry initialized"
        );
        registry
    }

    /// Creates a registry holding only the two built-in namespaces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: DashMap::new(),
            namespaces: RwLock::new(vec![
                ISO_NAMESPACE.to_string(),
                HISTORIC_NAMESPACE.to_string(),
            ]),
            write_lock: Mutex::new(()),
        }
    }

    /// Builds a registry from configuration, registering every custom currency.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRegistration` when a configured currency collides
    /// with an existing one, or a validation error for malformed entries.
    pub fn from_config(config: &RegistryConfig) -> MoneyResult<Self> {
        let registry = Self::empty();
        registry.load_table(CURRENT, ISO_NAMESPACE, NamespaceId::ISO_4217);
        if config.include_historic {
            registry.load_table(HISTORIC, HISTORIC_NAMESPACE, NamespaceId::ISO_4217_HISTORIC);
        }

        for custom in &config.custom_currencies {
            let minor_unit = match custom.minor_unit.as_deref() {
                Some(kind) if kind.eq_ignore_ascii_case("fifth") => MinorUnit::NonDecimalFifth,
                Some(kind) if kind.eq_ignore_ascii_case("none") => MinorUnit::NotApplicable,
                Some(other) => {
                    return Err(MoneyError::InvalidArgument(format!(
                        "unknown minor unit '{other}' for currency {}",
                        custom.code
                    )));
                }
                None => MinorUnit::decimal_places(custom.decimal_digits.unwrap_or(2))?,
            };

            CurrencyBuilder::new(&custom.code, &custom.namespace)
                .english_name(&custom.english_name)
                .symbol(&custom.symbol)
                .numeric_code(custom.numeric_code)
                .minor_unit(minor_unit)
                .register(&registry)?;
        }

        info!(
            currencies = registry.entries.len(),
            custom = config.custom_currencies.len(),
            include_historic = config.include_historic,
            "Currency registry built from config"
        );
        Ok(registry)
    }

    fn load_table(&self, table: &[CurrencyRecord], namespace: &str, id: NamespaceId) {
        for record in table {
            let info = CurrencyInfo::from_record(record, namespace, id);
            self.entries.insert((info.code, id), Arc::new(info));
        }
    }

    /// Looks up a currency by code across all namespaces.
    ///
    /// Namespaces are searched in priority order (current ISO, historic ISO,
    /// then custom namespaces in registration order). The first match valid
    /// today wins; when every match is historic, the one that expired most
    /// recently is returned.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a malformed code and
    /// `UnknownCurrencyCode` when no namespace holds it.
    pub fn get(&self, code: &str) -> MoneyResult<Arc<CurrencyInfo>> {
        self.get_on(code, Utc::now().date_naive())
    }

    /// Same as [`get`](Self::get), resolving validity against `date`.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub fn get_on(&self, code: &str, date: NaiveDate) -> MoneyResult<Arc<CurrencyInfo>> {
        let code = parse_code(code)?;
        self.resolve(code, date)
            .ok_or_else(|| MoneyError::unknown(code, None))
    }

    /// Looks up a currency by code, returning `None` instead of an error.
    #[must_use]
    pub fn try_get(&self, code: &str) -> Option<Arc<CurrencyInfo>> {
        let code = CurrencyCode::parse(code).ok()?;
        self.resolve(code, Utc::now().date_naive())
    }

    /// Looks up a currency in one namespace.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrencyCode` when the namespace or pair is unknown.
    pub fn get_in(&self, code: &str, namespace: &str) -> MoneyResult<Arc<CurrencyInfo>> {
        let code = parse_code(code)?;
        self.namespace_id(namespace)
            .and_then(|id| self.lookup(code, id))
            .ok_or_else(|| MoneyError::unknown(code, Some(namespace)))
    }

    /// Looks up the metadata behind a currency identifier.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrencyCode` when the currency was removed.
    pub fn get_currency(&self, currency: &Currency) -> MoneyResult<Arc<CurrencyInfo>> {
        self.lookup(currency.code(), currency.namespace_id())
            .ok_or_else(|| MoneyError::unknown(currency.code(), None))
    }

    /// Creates a rounded money value in the currency with `code`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrencyCode` for an unregistered code.
    pub fn money(&self, amount: Decimal, code: &str) -> MoneyResult<Money> {
        Ok(Money::new(amount, &*self.get(code)?))
    }

    /// Adds a currency under `(code, namespace)`.
    ///
    /// Returns false if the pair already exists, the code is malformed, the
    /// minor unit has more than 28 decimal places, or no namespace id is left. Unknown namespaces are registered on the fly.
    pub fn try_add(&self, code: &str, namespace: &str, info: CurrencyInfo) -> bool {
        let Ok(code) = CurrencyCode::parse(code) else {
            warn!(code = %code, "Rejected currency with malformed code");
            return false;
        };
        self.add(code, namespace, info).is_ok()
    }

    /// Registers a currency, failing on duplicates.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRegistration` when `(code, namespace)` is taken,
    /// `InvalidArgument` for a minor unit beyond 28 decimal places, and
    /// `OutOfRange` when every namespace id is in use.
    pub fn register(&self, info: CurrencyInfo) -> MoneyResult<Currency> {
        let code = info.code;
        let namespace = info.namespace.clone();
        match self.add(code, &namespace, info) {
            Ok(stored) => Ok(stored.currency()),
            Err(Rejection::Duplicate) => Err(MoneyError::DuplicateRegistration {
                code: code.to_string(),
                namespace,
            }),
            Err(Rejection::NamespacesExhausted) => Err(MoneyError::OutOfRange(format!(
                "cannot register namespace {namespace}, at most {MAX_NAMESPACES} are supported"
            ))),
            Err(Rejection::InvalidMinorUnit) => Err(MoneyError::InvalidArgument(format!(
                "currency {code} has a minor unit beyond 28 decimal places"
            ))),
        }
    }

    fn add(
        &self,
        code: CurrencyCode,
        namespace: &str,
        mut info: CurrencyInfo,
    ) -> Result<Arc<CurrencyInfo>, Rejection> {
        if info.minor_unit.validated().is_err() {
            warn!(
                code = %code,
                namespace,
                minor_unit = %info.minor_unit,
                "Rejected currency with invalid minor unit"
            );
            return Err(Rejection::InvalidMinorUnit);
        }

        let _guard = self.write_lock.lock();

        let Some(id) = self.namespace_id_or_register(namespace) else {
            warn!(code = %code, namespace, "Namespace limit reached");
            return Err(Rejection::NamespacesExhausted);
        };

        info.code = code;
        info.namespace = namespace.to_string();
        info.namespace_id = id;

        match self.entries.entry((code, id)) {
            Entry::Occupied(_) => {
                warn!(code = %code, namespace, "Currency already registered");
                Err(Rejection::Duplicate)
            }
            Entry::Vacant(slot) => {
                let stored = Arc::new(info);
                slot.insert(Arc::clone(&stored));
                debug!(code = %code, namespace, "Currency registered");
                Ok(stored)
            }
        }
    }

    /// Removes `(code, namespace)`, returning the removed metadata.
    pub fn try_remove(&self, code: &str, namespace: &str) -> Option<Arc<CurrencyInfo>> {
        let code = CurrencyCode::parse(code).ok()?;
        let _guard = self.write_lock.lock();

        let removed = self
            .namespace_id(namespace)
            .and_then(|id| self.entries.remove(&(code, id)))
            .map(|(_, info)| info);

        if removed.is_some() {
            debug!(code = %code, namespace, "Currency removed");
        } else {
            warn!(code = %code, namespace, "Currency to remove is not registered");
        }
        removed
    }

    /// Snapshot of every registered currency, ordered by namespace then code.
    #[must_use]
    pub fn all_currencies(&self) -> Vec<Arc<CurrencyInfo>> {
        let mut all: Vec<_> = self
            .entries
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        all.sort_by_key(|info| (info.namespace_id, info.code));
        all
    }

    /// Snapshot of every currency using `symbol`, in namespace priority order.
    #[must_use]
    pub fn currencies_with_symbol(&self, symbol: &str) -> Vec<Arc<CurrencyInfo>> {
        let mut matches: Vec<_> = self
            .entries
            .iter()
            .filter(|entry| entry.value().symbol == symbol)
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        matches.sort_by_key(|info| (info.namespace_id, info.code));
        matches
    }

    /// Registered namespace names in id order.
    #[must_use]
    pub fn namespaces(&self) -> Vec<String> {
        self.namespaces.read().clone()
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no currency is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, code: CurrencyCode, id: NamespaceId) -> Option<Arc<CurrencyInfo>> {
        self.entries
            .get(&(code, id))
            .map(|entry| Arc::clone(entry.value()))
    }

    fn resolve(&self, code: CurrencyCode, date: NaiveDate) -> Option<Arc<CurrencyInfo>> {
        let namespace_count = self.namespaces.read().len();
        let mut latest_expired: Option<Arc<CurrencyInfo>> = None;

        for index in 0..namespace_count {
            let Ok(raw) = u8::try_from(index) else { break };
            let Some(info) = self.lookup(code, NamespaceId(raw)) else {
                continue;
            };
            if info.is_valid_on(date) {
                return Some(info);
            }
            latest_expired = match latest_expired {
                Some(current) if !expired_later(&info, &current) => Some(current),
                _ => Some(info),
            };
        }

        latest_expired
    }

    fn namespace_id(&self, namespace: &str) -> Option<NamespaceId> {
        self.namespaces
            .read()
            .iter()
            .position(|name| name == namespace)
            .and_then(|index| u8::try_from(index).ok())
            .map(NamespaceId)
    }

    fn namespace_id_or_register(&self, namespace: &str) -> Option<NamespaceId> {
        if let Some(id) = self.namespace_id(namespace) {
            return Some(id);
        }
        let mut namespaces = self.namespaces.write();
        if namespaces.len() >= MAX_NAMESPACES {
            return None;
        }
        let id = u8::try_from(namespaces.len()).ok()?;
        namespaces.push(namespace.to_string());
        debug!(namespace, id, "Namespace registered");
        Some(NamespaceId(id))
    }
}

/// A window that is still open (introduced in the future) sorts after any
/// closed one.
fn expired_later(candidate: &CurrencyInfo, current: &CurrencyInfo) -> bool {
    match (candidate.expired_on, current.expired_on) {
        (Some(a), Some(b)) => a > b,
        (None, Some(_)) => true,
        _ => false,
    }
}

fn parse_code(code: &str) -> MoneyResult<CurrencyCode> {
    CurrencyCode::parse(code).map_err(|e| MoneyError::InvalidArgument(e.to_string()))
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CurrencyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyRegistry")
            .field("currencies", &self.entries.len())
            .field("namespaces", &*self.namespaces.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinage_shared::config::CustomCurrencyConfig;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn btc() -> CurrencyInfo {
        CurrencyBuilder::new("BTC", "virtual")
            .english_name("Bitcoin")
            .symbol("₿")
            .minor_unit(MinorUnit::decimal_places(8).unwrap())
            .build()
            .unwrap()
    }

    #[rstest]
    #[case("JPY", 0, "¥", 392)]
    #[case("BHD", 3, "BD", 48)]
    #[case("EUR", 2, "€", 978)]
    #[case("USD", 2, "$", 840)]
    #[case("CLF", 4, "UF", 990)]
    fn test_get_matches_table(
        #[case] code: &str,
        #[case] digits: u32,
        #[case] symbol: &str,
        #[case] numeric: u16,
    ) {
        let registry = CurrencyRegistry::new();
        let info = registry.get(code).unwrap();
        assert_eq!(info.code.as_str(), code);
        assert_eq!(info.decimal_digits(), digits);
        assert_eq!(info.symbol, symbol);
        assert_eq!(info.numeric_code, numeric);
    }

    #[test]
    fn test_every_current_entry_round_trips() {
        let registry = CurrencyRegistry::new();
        for record in CURRENT {
            let info = registry.get_in(record.code, ISO_NAMESPACE).unwrap();
            assert_eq!(info.code.as_str(), record.code);
            assert_eq!(info.numeric_code, record.numeric_code);
            assert_eq!(info.minor_unit, record.minor_unit);
            assert_eq!(info.symbol, record.symbol);
        }
    }

    #[test]
    fn test_get_unknown_code() {
        let registry = CurrencyRegistry::new();
        assert!(matches!(
            registry.get("ABC"),
            Err(MoneyError::UnknownCurrencyCode { .. })
        ));
        assert!(matches!(
            registry.get(""),
            Err(MoneyError::InvalidArgument(_))
        ));
        assert!(registry.try_get("ABC").is_none());
        assert!(registry.try_get("toolong").is_none());
    }

    #[test]
    fn test_get_in_unknown_namespace() {
        let registry = CurrencyRegistry::new();
        let err = registry.get_in("EUR", "nowhere").unwrap_err();
        assert_eq!(
            err,
            MoneyError::UnknownCurrencyCode {
                code: "EUR".into(),
                namespace: Some("nowhere".into())
            }
        );
    }

    #[test]
    fn test_historic_only_code_resolves_to_historic() {
        let registry = CurrencyRegistry::new();
        let dem = registry.get("DEM").unwrap();
        assert_eq!(dem.namespace, HISTORIC_NAMESPACE);
        assert!(dem.is_historic());
    }

    #[test]
    fn test_valid_entry_wins_over_earlier_historic_one() {
        let registry = CurrencyRegistry::empty();
        let old = CurrencyBuilder::new("QQA", "old")
            .english_name("Old")
            .valid_to(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
            .build()
            .unwrap();
        let new = CurrencyBuilder::new("QQA", "new")
            .english_name("New")
            .build()
            .unwrap();
        assert!(registry.try_add("QQA", "old", old));
        assert!(registry.try_add("QQA", "new", new));

        assert_eq!(registry.get("QQA").unwrap().english_name, "New");
    }

    #[test]
    fn test_most_recently_expired_wins_when_all_historic() {
        let registry = CurrencyRegistry::empty();
        let first = CurrencyBuilder::new("QQB", "first")
            .english_name("First")
            .valid_to(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
            .build()
            .unwrap();
        let second = CurrencyBuilder::new("QQB", "second")
            .english_name("Second")
            .valid_to(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap())
            .build()
            .unwrap();
        let third = CurrencyBuilder::new("QQB", "third")
            .english_name("Third")
            .valid_to(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
            .build()
            .unwrap();
        assert!(registry.try_add("QQB", "first", first));
        assert!(registry.try_add("QQB", "second", second));
        assert!(registry.try_add("QQB", "third", third));

        assert_eq!(registry.get("QQB").unwrap().english_name, "Second");
    }

    #[test]
    fn test_get_on_uses_the_given_date() {
        let registry = CurrencyRegistry::new();
        let before_launch = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let info = registry.get_on("XCG", before_launch).unwrap();
        assert!(info.is_historic_on(before_launch));
    }

    #[test]
    fn test_try_add_then_lookup() {
        let registry = CurrencyRegistry::new();
        let info = btc();
        assert!(registry.try_get("BTC").is_none());

        assert!(registry.try_add("BTC", "virtual", info.clone()));
        let stored = registry.get_in("BTC", "virtual").unwrap();
        assert_eq!(stored.english_name, "Bitcoin");
        assert!(!stored.is_iso4217);
        assert_eq!(registry.get("BTC").unwrap().code.as_str(), "BTC");
        assert!(registry.namespaces().contains(&"virtual".to_string()));

        assert!(!registry.try_add("BTC", "virtual", info));
    }

    #[test]
    fn test_add_rejects_minor_unit_beyond_28_places() {
        let registry = CurrencyRegistry::new();
        let mut info = btc();
        info.minor_unit = MinorUnit::DecimalPlaces(30);

        assert!(!registry.try_add("BTC", "virtual", info.clone()));
        assert!(matches!(
            registry.register(info),
            Err(MoneyError::InvalidArgument(_))
        ));
        assert!(registry.try_get("BTC").is_none());
    }

    #[test]
    fn test_register_duplicate_is_an_error() {
        let registry = CurrencyRegistry::new();
        let info = btc();
        registry.register(info.clone()).unwrap();
        assert_eq!(
            registry.register(info),
            Err(MoneyError::DuplicateRegistration {
                code: "BTC".into(),
                namespace: "virtual".into()
            })
        );
    }

    #[test]
    fn test_same_code_in_two_namespaces() {
        let registry = CurrencyRegistry::new();
        let custom_eur = CurrencyBuilder::new("EUR", "game")
            .english_name("Game euro")
            .build()
            .unwrap();
        assert!(registry.try_add("EUR", "game", custom_eur));

        assert_eq!(registry.get("EUR").unwrap().namespace, ISO_NAMESPACE);
        assert_eq!(
            registry.get_in("EUR", "game").unwrap().english_name,
            "Game euro"
        );
    }

    #[test]
    fn test_try_remove() {
        let registry = CurrencyRegistry::new();
        let before = registry.len();
        let removed = registry.try_remove("NLG", HISTORIC_NAMESPACE).unwrap();
        assert_eq!(removed.english_name, "Dutch guilder");
        assert_eq!(registry.len(), before - 1);
        assert!(registry.try_get("NLG").is_none());
        assert!(registry.try_remove("NLG", HISTORIC_NAMESPACE).is_none());
        assert!(registry.try_remove("EUR", "nowhere").is_none());
    }

    #[test]
    fn test_removal_is_isolated_per_instance() {
        let first = CurrencyRegistry::new();
        let second = CurrencyRegistry::new();
        first.try_remove("USD", ISO_NAMESPACE).unwrap();
        assert!(second.get("USD").is_ok());
    }

    #[test]
    fn test_all_currencies_ordered_by_namespace_then_code() {
        let registry = CurrencyRegistry::new();
        let all = registry.all_currencies();
        assert_eq!(all.len(), CURRENT.len() + HISTORIC.len());
        assert_eq!(all[0].namespace, ISO_NAMESPACE);
        assert_eq!(all.last().unwrap().namespace, HISTORIC_NAMESPACE);
        assert!(
            all.windows(2)
                .all(|pair| (pair[0].namespace_id, pair[0].code) < (pair[1].namespace_id, pair[1].code))
        );
    }

    #[test]
    fn test_currencies_with_symbol() {
        let registry = CurrencyRegistry::new();
        let euros: Vec<_> = registry
            .currencies_with_symbol("€")
            .iter()
            .map(|info| info.code.to_string())
            .collect();
        assert_eq!(euros, vec!["EUR"]);
        assert!(registry.currencies_with_symbol("$").len() > 5);
    }

    #[test]
    fn test_namespace_limit() {
        let registry = CurrencyRegistry::empty();
        for index in 2..MAX_NAMESPACES {
            let info = CurrencyBuilder::new("QQC", &format!("ns-{index}"))
                .build()
                .unwrap();
            assert!(registry.try_add("QQC", &format!("ns-{index}"), info));
        }
        assert_eq!(registry.namespaces().len(), MAX_NAMESPACES);

        let overflow = CurrencyBuilder::new("QQC", "one-too-many").build().unwrap();
        assert!(!registry.try_add("QQC", "one-too-many", overflow.clone()));
        assert!(matches!(
            registry.register(overflow),
            Err(MoneyError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_money_factory_rounds() {
        let registry = CurrencyRegistry::new();
        let money = registry.money(dec!(10.005), "EUR").unwrap();
        assert_eq!(money.amount(), dec!(10.00));
    }

    #[test]
    fn test_from_config_registers_custom_currencies() {
        let config = RegistryConfig {
            include_historic: false,
            custom_currencies: vec![
                CustomCurrencyConfig {
                    code: "BTC".into(),
                    namespace: "virtual".into(),
                    english_name: "Bitcoin".into(),
                    symbol: "₿".into(),
                    numeric_code: 0,
                    decimal_digits: Some(8),
                    minor_unit: None,
                },
                CustomCurrencyConfig {
                    code: "QQF".into(),
                    namespace: "virtual".into(),
                    english_name: "Fifths".into(),
                    symbol: "q".into(),
                    numeric_code: 0,
                    decimal_digits: None,
                    minor_unit: Some("fifth".into()),
                },
            ],
        };
        let registry = CurrencyRegistry::from_config(&config).unwrap();
        assert!(registry.try_get("NLG").is_none());
        assert_eq!(registry.get("BTC").unwrap().decimal_digits(), 8);
        assert_eq!(
            registry.get("QQF").unwrap().minor_unit,
            MinorUnit::NonDecimalFifth
        );
    }

    #[test]
    fn test_from_config_rejects_duplicates() {
        let custom = CustomCurrencyConfig {
            code: "EUR".into(),
            namespace: ISO_NAMESPACE.into(),
            english_name: "Euro again".into(),
            symbol: "€".into(),
            numeric_code: 978,
            decimal_digits: Some(2),
            minor_unit: None,
        };
        let config = RegistryConfig {
            include_historic: true,
            custom_currencies: vec![custom],
        };
        assert!(matches!(
            CurrencyRegistry::from_config(&config),
            Err(MoneyError::DuplicateRegistration { .. })
        ));
    }

    #[test]
    fn test_concurrent_readers_and_writers() {
        let registry = Arc::new(CurrencyRegistry::new());
        let handles: Vec<_> = (0..8u8)
            .map(|worker| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    let namespace = format!("worker-{worker}");
                    for letter in b'A'..=b'Z' {
                        let code = format!("Q{}{}", char::from(b'A' + worker), char::from(letter));
                        let info = CurrencyBuilder::new(&code, &namespace).build().unwrap();
                        assert!(registry.try_add(&code, &namespace, info));
                        assert_eq!(registry.get("EUR").unwrap().symbol, "€");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.namespaces().len(), 2 + 8);
        assert_eq!(registry.len(), CURRENT.len() + HISTORIC.len() + 8 * 26);
    }
}
