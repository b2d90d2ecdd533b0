//! Money settings management.
//!
//! Settings are plain data: base currency, one rate per currency, and the
//! output template. Callers validate them by building a money context from
//! them; nothing here is global.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Environment variable prefix for settings overrides (`BIGMONEY__BASE`, ...).
pub const ENV_PREFIX: &str = "BIGMONEY";

/// Money settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Pivot currency every rate is expressed against.
    #[serde(default = "default_base")]
    pub base: String,
    /// Units of each currency per one unit of base.
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
    /// Output template with `%decimal` and `%currency` placeholders.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_base() -> String {
    "USD".to_string()
}

fn default_format() -> String {
    "%decimal %currency".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            rates: HashMap::new(),
            format: default_format(),
        }
    }
}

impl AppConfig {
    /// Loads settings from config files and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `BIGMONEY__*` variables (`BIGMONEY__RATES__EUR=0.74`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Adds or replaces a rate, builder style.
    #[must_use]
    pub fn with_rate(mut self, currency: impl Into<String>, rate: Decimal) -> Self {
        self.rates.insert(currency.into(), rate);
        self
    }
}
