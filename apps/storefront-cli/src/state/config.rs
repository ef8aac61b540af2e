//! # Configuration State
//!
//! Store presentation settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Pricing policy (shipping threshold, fee, coupon table) is deliberately
//! not here: those are compile-time constants of `storefront-core`.
//!
//! ## Thread Safety
//! Read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::env::VarError;
use storefront_core::Money;

use crate::error::ConfigError;

const MAX_CURRENCY_DECIMALS: u32 = 4;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name (shown in the session banner)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places shown for amounts
    pub currency_decimals: u32,
}

impl Default for StoreConfig {
    /// ## Default Values
    /// - Store: "Storefront"
    /// - Currency: INR (₹), 2 decimals
    fn default() -> Self {
        StoreConfig {
            store_name: "Storefront".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`
    /// - `STOREFRONT_CURRENCY_CODE`
    /// - `STOREFRONT_CURRENCY_SYMBOL`
    /// - `STOREFRONT_CURRENCY_DECIMALS` (0 to 4)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Builds the config from an arbitrary variable lookup.
    ///
    /// Tests pass a map-backed closure instead of touching the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(code) = lookup("STOREFRONT_CURRENCY_CODE") {
            let code = code.trim().to_uppercase();
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ConfigError::InvalidEnvVar {
                    var: "STOREFRONT_CURRENCY_CODE".to_string(),
                    reason: "expected a three-letter ISO 4217 code".to_string(),
                });
            }
            config.currency_code = code;
        }

        if let Ok(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(raw) = lookup("STOREFRONT_CURRENCY_DECIMALS") {
            let decimals = raw
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: "STOREFRONT_CURRENCY_DECIMALS".to_string(),
                    reason: e.to_string(),
                })?;
            if decimals > MAX_CURRENCY_DECIMALS {
                return Err(ConfigError::InvalidEnvVar {
                    var: "STOREFRONT_CURRENCY_DECIMALS".to_string(),
                    reason: format!("must be at most {}", MAX_CURRENCY_DECIMALS),
                });
            }
            config.currency_decimals = decimals;
        }

        Ok(config)
    }

    /// Formats an amount as a currency string, rounding only here.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_cli::state::StoreConfig;
    /// use storefront_core::Money;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(Money::from_minor(194_000)), "₹1940.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let rounded = amount.rounded(self.currency_decimals);
        format!(
            "{}{}{}",
            if rounded.is_negative() { "-" } else { "" },
            self.currency_symbol,
            rounded.abs().format_fixed(self.currency_decimals)
        )
    }
}
