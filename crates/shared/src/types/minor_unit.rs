//! Minor-unit policies.
//!
//! A minor unit describes how a currency subdivides: a power of ten for most
//! currencies, one fifth for a handful (MGA, MRU), and nothing at all for
//! bullion and testing codes.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Largest decimal exponent a minor unit can describe.
pub const MAX_DECIMAL_PLACES: u8 = 28;

/// How a currency divides into its smallest unit.
///
/// Deserialization rejects more than 28 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    rename_all = "snake_case",
    tag = "kind",
    content = "places",
    try_from = "MinorUnitRepr"
)]
pub enum MinorUnit {
    /// Power-of-ten subdivision with the given number of fractional digits.
    DecimalPlaces(u8),
    /// Subdivision into five subunits (0.2 steps).
    NonDecimalFifth,
    /// No subdivision is defined.
    NotApplicable,
}

/// Unchecked wire form of [`MinorUnit`].
#[derive(Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "places")]
enum MinorUnitRepr {
    DecimalPlaces(u8),
    NonDecimalFifth,
    NotApplicable,
}

impl TryFrom<MinorUnitRepr> for MinorUnit {
    type Error = AppError;

    fn try_from(repr: MinorUnitRepr) -> AppResult<Self> {
        match repr {
            MinorUnitRepr::DecimalPlaces(places) => Self::decimal_places(places),
            MinorUnitRepr::NonDecimalFifth => Ok(Self::NonDecimalFifth),
            MinorUnitRepr::NotApplicable => Ok(Self::NotApplicable),
        }
    }
}

impl MinorUnit {
    /// No fractional digits.
    pub const ZERO: Self = Self::DecimalPlaces(0);
    /// One fractional digit.
    pub const ONE: Self = Self::DecimalPlaces(1);
    /// Two fractional digits.
    pub const TWO: Self = Self::DecimalPlaces(2);
    /// Three fractional digits.
    pub const THREE: Self = Self::DecimalPlaces(3);
    /// Four fractional digits.
    pub const FOUR: Self = Self::DecimalPlaces(4);

    /// Creates a decimal-based minor unit.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if `places` exceeds 28.
    pub fn decimal_places(places: u8) -> AppResult<Self> {
        if places > MAX_DECIMAL_PLACES {
            return Err(AppError::Validation(format!(
                "minor unit must be between 0 and {MAX_DECIMAL_PLACES} decimal places, got {places}"
            )));
        }
        Ok(Self::DecimalPlaces(places))
    }

    /// Checks a unit built directly from the `DecimalPlaces` variant.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if it has more than 28 decimal places.
    pub fn validated(self) -> AppResult<Self> {
        match self {
            Self::DecimalPlaces(places) => Self::decimal_places(places),
            other => Ok(other),
        }
    }

    /// Number of fractional digits shown for this minor unit.
    ///
    /// One-fifth currencies show a single digit; not-applicable shows none.
    #[must_use]
    pub const fn decimal_digits(&self) -> u32 {
        match self {
            Self::DecimalPlaces(places) => *places as u32,
            Self::NonDecimalFifth => 1,
            Self::NotApplicable => 0,
        }
    }

    /// Returns true unless the subdivision is one fifth.
    #[must_use]
    pub const fn is_decimal_based(&self) -> bool {
        !matches!(self, Self::NonDecimalFifth)
    }

    /// Returns the exact number of decimal digits the subdivision represents.
    ///
    /// For one-fifth subdivisions this is log10(5), truncated to five places.
    #[must_use]
    pub fn precise_digits(&self) -> Decimal {
        match self {
            Self::DecimalPlaces(places) => Decimal::from(*places),
            Self::NonDecimalFifth => Decimal::new(69_897, 5),
            Self::NotApplicable => Decimal::ZERO,
        }
    }

    /// Smallest representable amount of a currency with this minor unit.
    ///
    /// Places beyond 28 saturate at `Decimal`'s finest step.
    #[must_use]
    pub fn minimal_amount(&self) -> Decimal {
        match self {
            Self::DecimalPlaces(places) => {
                Decimal::new(1, u32::from((*places).min(MAX_DECIMAL_PLACES)))
            }
            Self::NonDecimalFifth => Decimal::new(2, 1),
            Self::NotApplicable => Decimal::ONE,
        }
    }

    /// Rounds an amount to this minor unit using banker's rounding.
    ///
    /// - Decimal-based: round to `decimal_digits` places.
    /// - One fifth: round `amount / 0.2` to an integer, then multiply back.
    /// - Not applicable: unchanged.
    #[must_use]
    pub fn round(&self, amount: Decimal) -> Decimal {
        match self {
            Self::DecimalPlaces(places) => amount
                .round_dp_with_strategy(u32::from(*places), RoundingStrategy::MidpointNearestEven),
            Self::NonDecimalFifth => {
                let step = self.minimal_amount();
                // amount / 0.2 only overflows above MAX / 5; fall back to whole units there.
                match amount.checked_div(step) {
                    Some(steps) => {
                        steps.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
                            * step
                    }
                    None => amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven),
                }
            }
            Self::NotApplicable => amount,
        }
    }
}

impl std::fmt::Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecimalPlaces(places) => write!(f, "{places}"),
            Self::NonDecimalFifth => f.write_str("1/5"),
            Self::NotApplicable => f.write_str("N.A."),
        }
    }
}
