//! Currency registry and money value types for Coinage.
//!
//! This crate contains pure logic with ZERO I/O dependencies.
//! Amounts are `rust_decimal::Decimal` throughout; floats never touch money.
//!
//! # Modules
//!
//! - `currency` - ISO-4217 tables, the currency registry, exchange rates
//! - `money` - Rounded, exact and fixed-scale money values, splitting
//! - `format` - Culture-aware formatting and parsing
//! - `error` - Error types shared by all of the above
//!
//! ```
//! use coinage_core::currency::CurrencyRegistry;
//! use rust_decimal_macros::dec;
//!
//! let registry = CurrencyRegistry::new();
//! let price = registry.money(dec!(19.999), "EUR").unwrap();
//! assert_eq!(price.to_string(), "20.00 EUR");
//! ```

pub mod currency;
pub mod error;
pub mod format;
pub mod money;

pub use currency::{Currency, CurrencyInfo, CurrencyRegistry, ExchangeRate};
pub use error::{MoneyError, MoneyResult};
pub use format::{Culture, MoneyFormatter};
pub use money::{ExactMoney, FastMoney, Money};
