//! Culture-aware formatting and parsing of money.

pub mod culture;
pub mod formatter;

pub use culture::{Culture, SymbolPlacement};
pub use formatter::MoneyFormatter;
