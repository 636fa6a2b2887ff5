//! Currency identifiers, metadata, the registry, and exchange rates.

pub mod builder;
pub mod exchange;
pub(crate) mod historic;
pub mod info;
pub(crate) mod iso4217;
pub(crate) mod region;
pub mod registry;

#[cfg(test)]
mod props;

pub use builder::CurrencyBuilder;
pub use exchange::{ExchangeRate, RATE_SCALE};
pub use info::{Currency, CurrencyInfo, NamespaceId};
pub use registry::{CurrencyRegistry, HISTORIC_NAMESPACE, ISO_NAMESPACE, MAX_NAMESPACES};
