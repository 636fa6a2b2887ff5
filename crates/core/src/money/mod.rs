//! Money value types and arithmetic.
//!
//! This module provides:
//! - `Money`, rounded to its currency's minor unit on every construction
//! - `ExactMoney`, which never rounds, for multi-step calculations
//! - `FastMoney`, a 64-bit fixed-scale variant
//! - Money-conserving splits and largest-remainder allocation
//! - A plain record type for serialization adapters

mod allocation;
pub mod exact;
pub mod fast;
pub mod record;
pub mod split;
pub mod value;

#[cfg(test)]
mod props;

pub use exact::ExactMoney;
pub use fast::{FAST_MONEY_SCALE, FastMoney};
pub use record::MoneyRecord;
pub use split::Split;
pub use value::Money;
