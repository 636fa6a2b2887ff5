//! Leaf types used across the workspace.

pub mod code;
pub mod minor_unit;

pub use code::CurrencyCode;
pub use minor_unit::MinorUnit;

/// The generic currency sign, used when a currency has no symbol of its own.
pub const GENERIC_CURRENCY_SIGN: &str = "¤";
