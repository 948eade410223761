//! Application configuration management.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Conversion rates to register at startup.
    #[serde(default)]
    pub rates: Vec<RateEntry>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "coinage=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// A single configured conversion rate.
///
/// The rate is kept as a raw value; it is validated when registered.
#[derive(Debug, Clone, Deserialize)]
pub struct RateEntry {
    /// Base currency code.
    pub base: String,
    /// Target currency code.
    pub quote: String,
    /// Amount of `quote` per one unit of `base`.
    pub rate: Value,
}

impl AppConfig {
    /// Loads configuration from config files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("COINAGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Builds configuration from an in-memory TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or does not match
    /// the configuration shape.
    pub fn from_toml_str(document: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Groups configured rates into one table per base currency.
    ///
    /// Tables come back in order of first appearance. A later entry for the
    /// same pair overrides an earlier one.
    #[must_use]
    pub fn rate_tables(&self) -> Vec<(String, Value)> {
        let mut tables: Vec<(String, Map<String, Value>)> = Vec::new();

        for entry in &self.rates {
            let index = if let Some(index) = tables.iter().position(|(base, _)| *base == entry.base)
            {
                index
            } else {
                tables.push((entry.base.clone(), Map::new()));
                tables.len() - 1
            };
            tables[index]
                .1
                .insert(entry.quote.clone(), entry.rate.clone());
        }

        tables
            .into_iter()
            .map(|(base, table)| (base, Value::Object(table)))
            .collect()
    }
}
