//! Plain `(amount, currency code)` record for serialization adapters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::value::Money;
use crate::currency::CurrencyRegistry;
use crate::error::MoneyResult;

/// Wire form of a [`Money`] value.
///
/// Deserialize into this record, then build a fresh `Money` with
/// [`into_money`](Self::into_money).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// Amount, serialized as a string.
    pub amount: Decimal,
    /// Three-letter currency code.
    pub currency: String,
}

impl MoneyRecord {
    /// Resolves the currency and builds a rounded money value.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrencyCode` or `InvalidArgument` for the code.
    pub fn into_money(self, registry: &CurrencyRegistry) -> MoneyResult<Money> {
        registry.money(self.amount, &self.currency)
    }
}

impl Money {
    /// Converts to the wire record.
    #[must_use]
    pub fn to_record(&self) -> MoneyRecord {
        MoneyRecord {
            amount: self.amount(),
            currency: self.currency().to_string(),
        }
    }
}
