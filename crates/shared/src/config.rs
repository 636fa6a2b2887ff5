//! Application configuration management.

use serde::Deserialize;
use tracing::info;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Currency registry configuration.
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Formatting configuration.
    #[serde(default)]
    pub formatting: FormattingConfig,
}

/// Currency registry configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Load the historic ISO-4217 table next to the current one.
    #[serde(default = "default_include_historic")]
    pub include_historic: bool,
    /// Custom currencies registered at startup.
    #[serde(default)]
    pub custom_currencies: Vec<CustomCurrencyConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_historic: default_include_historic(),
            custom_currencies: Vec::new(),
        }
    }
}

fn default_include_historic() -> bool {
    true
}

/// A user-defined currency registered at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomCurrencyConfig {
    /// Three-letter currency code.
    pub code: String,
    /// Namespace the currency lives in.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// English name of the currency.
    pub english_name: String,
    /// Currency symbol.
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Numeric code, 0 when the currency has none.
    #[serde(default)]
    pub numeric_code: u16,
    /// Number of decimal digits for decimal-based currencies.
    #[serde(default)]
    pub decimal_digits: Option<u8>,
    /// Special minor unit: `"fifth"` or `"none"`. Overrides `decimal_digits`.
    #[serde(default)]
    pub minor_unit: Option<String>,
}

fn default_namespace() -> String {
    "CUSTOM".to_string()
}

fn default_symbol() -> String {
    crate::types::GENERIC_CURRENCY_SIGN.to_string()
}

/// Formatting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    /// Culture used when none is given explicitly (e.g. "en-US").
    #[serde(default = "default_culture")]
    pub default_culture: String,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            default_culture: default_culture(),
        }
    }
}

fn default_culture() -> String {
    "en-US".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a source cannot be read or a value has
    /// the wrong type.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COINAGE").separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        info!(
            run_mode = %run_mode,
            custom_currencies = loaded.registry.custom_currencies.len(),
            default_culture = %loaded.formatting.default_culture,
            "Configuration loaded"
        );
        Ok(loaded)
    }
}
