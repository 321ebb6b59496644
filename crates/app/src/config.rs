//! Configuration read from the process environment.

use ecommerce_core::Currency;
use ecommerce_observability::LogFormat;

use crate::error::{AppError, AppResult};

pub const CURRENCY_VAR: &str = "SALES_CURRENCY";
pub const SUGGEST_EQUIVALENTS_VAR: &str = "SALES_SUGGEST_EQUIVALENTS";
pub const LOG_FORMAT_VAR: &str = "SALES_LOG_FORMAT";

/// Application settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesConfig {
    /// Currency used for catalog prices created by the application.
    pub currency: Currency,
    /// Replace unavailable products with a suggested equivalent when adding
    /// them to a reservation.
    pub suggest_equivalents: bool,
    pub log_format: LogFormat,
}

impl Default for SalesConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            suggest_equivalents: true,
            log_format: LogFormat::default(),
        }
    }
}

impl SalesConfig {
    /// Read settings from the environment; unset variables keep their default.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup` (used by tests instead of the real env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(CURRENCY_VAR) {
            config.currency = value
                .parse()
                .map_err(|e| AppError::Config(format!("{CURRENCY_VAR}: {e}")))?;
        }

        if let Some(value) = lookup(SUGGEST_EQUIVALENTS_VAR) {
            config.suggest_equivalents = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(AppError::Config(format!(
                        "{SUGGEST_EQUIVALENTS_VAR}: expected a boolean, got {other:?}"
                    )));
                }
            };
        }

        if let Some(value) = lookup(LOG_FORMAT_VAR) {
            config.log_format = value
                .parse()
                .map_err(|e| AppError::Config(format!("{LOG_FORMAT_VAR}: {e}")))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = SalesConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SalesConfig::default());
        assert_eq!(config.currency, Currency::EUR);
        assert!(config.suggest_equivalents);
    }

    #[test]
    fn reads_all_variables() {
        let config = SalesConfig::from_lookup(lookup(&[
            (CURRENCY_VAR, "pln"),
            (SUGGEST_EQUIVALENTS_VAR, "no"),
            (LOG_FORMAT_VAR, "pretty"),
        ]))
        .unwrap();

        assert_eq!(config.currency, Currency::PLN);
        assert!(!config.suggest_equivalents);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            SalesConfig::from_lookup(lookup(&[(CURRENCY_VAR, "euro")])),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            SalesConfig::from_lookup(lookup(&[(SUGGEST_EQUIVALENTS_VAR, "maybe")])),
            Err(AppError::Config(_))
        ));
    }
}
