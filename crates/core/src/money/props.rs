//! Property-based tests for money arithmetic.
//!
//! - Property 1: Rounding idempotence
//! - Property 2: Currency mismatch and zero absorption
//! - Property 3: Split conservation
//! - Property 4: Allocation sum invariant
//! - Property 5: Increment/decrement by minor unit

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{FastMoney, Money};
use crate::currency::CurrencyRegistry;
use crate::error::MoneyError;

/// Codes covering every minor-unit shape: 0, 2, 3, 4 digits, fifths, none.
const CODES: &[&str] = &["JPY", "EUR", "BHD", "CLF", "MGA", "XAU"];

/// Strategy to generate amounts with up to 6 decimals (±10,000,000).
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000_000i64..10_000_000_000_000i64).prop_map(|v| Decimal::new(v, 6))
}

/// Strategy to generate positive amounts in cents (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn any_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CODES)
}

/// Strategy to generate whole-number percentages that sum to 100.
fn percentages_summing_to_100() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(1u32..30, 1..6).prop_map(|values| {
        let mut remaining = 100u32;
        let mut percentages: Vec<Decimal> = values
            .iter()
            .map(|v| {
                let taken = (*v).min(remaining.saturating_sub(1));
                remaining -= taken;
                Decimal::from(taken)
            })
            .collect();
        percentages.push(Decimal::from(remaining));
        percentages
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Rounding idempotence
    // =========================================================================

    /// Property 1.1: Constructing twice yields the same amount.
    #[test]
    fn prop_rounding_is_idempotent(amount in any_amount(), code in any_code()) {
        let registry = CurrencyRegistry::new();
        let info = registry.get(code).unwrap();
        let once = Money::new(amount, &info);
        let twice = Money::new(once.amount(), &info);
        prop_assert_eq!(once, twice);
    }

    /// Property 1.2: Rounded amounts sit on the minor-unit grid.
    #[test]
    fn prop_rounded_amount_is_multiple_of_minimal_amount(
        amount in any_amount(),
        code in prop::sample::select(&["JPY", "EUR", "BHD", "MGA"][..]),
    ) {
        let registry = CurrencyRegistry::new();
        let info = registry.get(code).unwrap();
        let money = Money::new(amount, &info);
        let steps = money.amount() / info.minimal_amount();
        prop_assert_eq!(steps, steps.trunc(), "{} is off the grid of {}", money, code);
    }

    // =========================================================================
    // Property 2: Currency mismatch and zero absorption
    // =========================================================================

    /// Property 2.1: Non-zero values in different currencies never combine.
    #[test]
    fn prop_mismatch_is_rejected(a in positive_amount(), b in positive_amount()) {
        let euros = Money::euro(a);
        let dollars = Money::us_dollar(b);
        prop_assert!(
            matches!(euros + dollars, Err(MoneyError::InvalidCurrency { .. })),
            "adding {} to {} must fail", dollars, euros
        );
        prop_assert!(
            matches!(euros - dollars, Err(MoneyError::InvalidCurrency { .. })),
            "subtracting {} from {} must fail", dollars, euros
        );
        prop_assert!(
            matches!(euros.try_cmp(&dollars), Err(MoneyError::InvalidCurrency { .. })),
            "comparing {} with {} must fail", euros, dollars
        );
    }

    /// Property 2.2: Adding zero of any currency returns the value unchanged.
    #[test]
    fn prop_zero_is_absorbed(amount in any_amount()) {
        let euros = Money::euro(amount);
        prop_assert_eq!((euros + Money::yen(Decimal::ZERO)).unwrap(), euros);
        prop_assert_eq!((Money::yen(Decimal::ZERO) + euros).unwrap(), euros);
    }

    /// Property 2.3: Subtraction undoes addition.
    #[test]
    fn prop_add_then_subtract(a in any_amount(), b in any_amount()) {
        let x = Money::euro(a);
        let y = Money::euro(b);
        prop_assert_eq!(((x + y).unwrap() - y).unwrap(), x);
    }

    // =========================================================================
    // Property 3: Split conservation
    // =========================================================================

    /// Property 3.1: Shares sum to the original and there are exactly `shares`.
    #[test]
    fn prop_split_conserves_amount(
        amount in any_amount(),
        code in any_code(),
        shares in 2u32..50,
    ) {
        let registry = CurrencyRegistry::new();
        let money = registry.money(amount, code).unwrap();
        let parts: Vec<Money> = money.split(shares).unwrap().collect();

        prop_assert_eq!(parts.len(), shares as usize);
        let sum: Decimal = parts.iter().map(Money::amount).sum();
        prop_assert_eq!(sum, money.amount());
    }

    /// Property 3.2: Ratio splits conserve the amount too.
    #[test]
    fn prop_split_by_ratios_conserves_amount(
        amount in any_amount(),
        ratios in prop::collection::vec(1u32..20, 1..8),
    ) {
        let money = Money::euro(amount);
        let parts: Vec<Money> = money.split_by_ratios(&ratios).unwrap().collect();

        prop_assert_eq!(parts.len(), ratios.len());
        let sum: Decimal = parts.iter().map(Money::amount).sum();
        prop_assert_eq!(sum, money.amount());
    }

    // =========================================================================
    // Property 4: Allocation sum invariant
    // =========================================================================

    /// Property 4.1: Equal allocation sums to the original amount.
    #[test]
    fn prop_allocate_sum_invariant(amount in any_amount(), count in 1usize..100) {
        let money = Money::euro(amount);
        let parts = money.allocate(count).unwrap();
        prop_assert_eq!(parts.len(), count);
        let sum: Decimal = parts.iter().map(Money::amount).sum();
        prop_assert_eq!(sum, money.amount());
    }

    /// Property 4.2: Equal allocations differ by at most one minor unit.
    #[test]
    fn prop_allocate_is_fair(amount in positive_amount(), count in 1usize..100) {
        let parts = Money::euro(amount).allocate(count).unwrap();
        let max = parts.iter().map(Money::amount).max().unwrap();
        let min = parts.iter().map(Money::amount).min().unwrap();
        prop_assert!(max - min <= Decimal::new(1, 2));
    }

    /// Property 4.3: Percentage allocation sums to the original amount.
    #[test]
    fn prop_allocate_by_percentages_sum_invariant(
        amount in positive_amount(),
        percentages in percentages_summing_to_100(),
    ) {
        let money = Money::euro(amount);
        let parts = money.allocate_by_percentages(&percentages).unwrap();
        let sum: Decimal = parts.iter().map(Money::amount).sum();
        prop_assert_eq!(sum, money.amount());
    }

    // =========================================================================
    // Property 5: Increment/decrement by minor unit
    // =========================================================================

    /// Property 5.1: Increment then decrement is the identity.
    #[test]
    fn prop_increment_decrement_round_trip(amount in any_amount(), code in any_code()) {
        let registry = CurrencyRegistry::new();
        let money = registry.money(amount, code).unwrap();
        let stepped = money.increment().unwrap();
        prop_assert_eq!(stepped.decrement().unwrap(), money);
        prop_assert_eq!(
            stepped.amount() - money.amount(),
            registry.get(code).unwrap().minimal_amount()
        );
    }

    /// Property 5.2: FastMoney agrees with Money on add and increment.
    #[test]
    fn prop_fast_money_matches_money(a in positive_amount(), b in positive_amount()) {
        let x = Money::euro(a);
        let y = Money::euro(b);
        let fast_x = FastMoney::try_from_money(&x).unwrap();
        let fast_y = FastMoney::try_from_money(&y).unwrap();

        prop_assert_eq!(fast_x.add(&fast_y).unwrap().to_money(), (x + y).unwrap());
        prop_assert_eq!(fast_x.increment().unwrap().to_money(), x.increment().unwrap());
    }
}
