//! Property-based tests for the currency registry and exchange rates.
//!
//! - Property 1: Registry round-trip against the static tables
//! - Property 2: Custom registration is isolated per namespace
//! - Property 3: Exchange-rate round trip within two roundings

use coinage_shared::MinorUnit;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::historic::HISTORIC;
use super::iso4217::CURRENT;
use super::{CurrencyBuilder, CurrencyRegistry, ExchangeRate, ISO_NAMESPACE};
use crate::format::Culture;
use crate::money::Money;

/// Strategy to pick a row of the current ISO table.
fn current_index() -> impl Strategy<Value = usize> {
    0..CURRENT.len()
}

/// Strategy to generate three-letter codes that are not in either ISO table.
fn unassigned_code() -> impl Strategy<Value = String> {
    "[A-Z]{3}".prop_filter("code must not be an ISO code", |code| {
        CURRENT
            .iter()
            .chain(HISTORIC.iter())
            .all(|record| record.code != code.as_str())
    })
}

/// Strategy to generate positive amounts in cents (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate rates between 0.0001 and 1000.
fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Registry round-trip
    // =========================================================================

    /// Property 1.1: Every current code resolves to its own table row.
    #[test]
    fn prop_current_code_round_trip(index in current_index(), lowercase in any::<bool>()) {
        let record = &CURRENT[index];
        let registry = CurrencyRegistry::new();
        let code = if lowercase { record.code.to_ascii_lowercase() } else { record.code.to_string() };

        let info = registry.get(&code).unwrap();
        prop_assert_eq!(info.code.as_str(), record.code);
        prop_assert_eq!(info.numeric_code, record.numeric_code);
        prop_assert_eq!(info.minor_unit, record.minor_unit);
        prop_assert_eq!(&info.symbol, record.symbol);
        prop_assert_eq!(&info.namespace, ISO_NAMESPACE);
    }

    /// Property 1.2: Unassigned codes are unknown until registered.
    #[test]
    fn prop_unassigned_code_is_unknown(code in unassigned_code()) {
        let registry = CurrencyRegistry::new();
        prop_assert!(registry.try_get(&code).is_none());
        prop_assert!(registry.get(&code).is_err());
    }

    // =========================================================================
    // Property 2: Custom registration
    // =========================================================================

    /// Property 2.1: A registered code can be found, cannot be registered
    /// twice in the same namespace, and disappears after removal.
    #[test]
    fn prop_register_then_remove(code in unassigned_code(), digits in 0u8..=8) {
        let registry = CurrencyRegistry::new();
        let before = registry.len();
        let builder = CurrencyBuilder::new(&code, "props")
            .english_name("Test currency")
            .minor_unit(MinorUnit::decimal_places(digits).unwrap());

        builder.clone().register(&registry).unwrap();
        prop_assert_eq!(registry.get(&code).unwrap().decimal_digits(), u32::from(digits));
        prop_assert!(builder.register(&registry).is_err(), "second registration must fail");

        prop_assert!(registry.try_remove(&code, "props").is_some());
        prop_assert!(registry.try_get(&code).is_none());
        prop_assert_eq!(registry.len(), before);
    }

    /// Property 2.2: Registrations never leak between registry instances.
    #[test]
    fn prop_registries_are_isolated(code in unassigned_code()) {
        let first = CurrencyRegistry::new();
        let second = CurrencyRegistry::new();
        CurrencyBuilder::new(&code, "props").register(&first).unwrap();
        prop_assert!(first.try_get(&code).is_some());
        prop_assert!(second.try_get(&code).is_none());
    }

    // =========================================================================
    // Property 3: Exchange-rate round trip
    // =========================================================================

    /// Property 3.1: Converting there and back stays within two roundings of
    /// the original (one minor unit of each currency, scaled by the rate).
    #[test]
    fn prop_exchange_round_trip(amount in positive_amount(), value in rate()) {
        let registry = CurrencyRegistry::new();
        let fx = ExchangeRate::from_codes("EUR", "USD", value, &registry).unwrap();
        let euros = Money::euro(amount);

        let back = fx.convert(&fx.convert(&euros).unwrap()).unwrap();
        let half_cent = Decimal::new(5, 3);
        let tolerance = half_cent + half_cent / fx.value();
        prop_assert!(
            (back.amount() - euros.amount()).abs() <= tolerance,
            "{} came back as {} at rate {}", euros, back, fx
        );
    }

    /// Property 3.2: Display output parses back to the same rate.
    #[test]
    fn prop_exchange_display_round_trip(value in rate()) {
        let registry = CurrencyRegistry::new();
        let fx = ExchangeRate::from_codes("GBP", "JPY", value, &registry).unwrap();
        let parsed = ExchangeRate::parse(&fx.to_string(), &Culture::INVARIANT, &registry).unwrap();
        prop_assert_eq!(parsed, fx);
    }
}
