//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SCHOOLCART_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dashboard color scheme.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the dashboard header
    pub store_name: String,

    pub theme: Theme,

    /// When false, the startup stock and birthday alerts are not shown
    pub notifications_enabled: bool,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Delay before the stock alert opens
    pub stock_alert_delay_ms: u64,

    /// Delay before the birthday alert opens
    pub birthday_alert_delay_ms: u64,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "SchoolCart"
    /// - Theme: light, notifications on
    /// - Currency: INR (₹)
    /// - Alerts: stock after 800 ms, birthdays after 1500 ms
    fn default() -> Self {
        ConfigState {
            store_name: "SchoolCart".to_string(),
            theme: Theme::Light,
            notifications_enabled: true,
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
            stock_alert_delay_ms: 800,
            birthday_alert_delay_ms: 1500,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SCHOOLCART_STORE_NAME`: Override store name
    /// - `SCHOOLCART_THEME`: `light` or `dark`
    /// - `SCHOOLCART_NOTIFICATIONS`: `true` or `false`
    /// - `SCHOOLCART_STOCK_ALERT_DELAY_MS`: Stock alert delay
    /// - `SCHOOLCART_BIRTHDAY_ALERT_DELAY_MS`: Birthday alert delay
    ///
    /// Values that fail to parse keep their default.
    pub fn from_env() -> Self {
        ConfigState::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = var("SCHOOLCART_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(theme) = var("SCHOOLCART_THEME").and_then(|v| v.parse::<Theme>().ok()) {
            config.theme = theme;
        }

        if let Some(enabled) =
            var("SCHOOLCART_NOTIFICATIONS").and_then(|v| v.trim().parse::<bool>().ok())
        {
            config.notifications_enabled = enabled;
        }

        if let Some(ms) =
            var("SCHOOLCART_STOCK_ALERT_DELAY_MS").and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.stock_alert_delay_ms = ms;
        }

        if let Some(ms) =
            var("SCHOOLCART_BIRTHDAY_ALERT_DELAY_MS").and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.birthday_alert_delay_ms = ms;
        }

        config
    }

    /// Formats a paise amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use schoolcart_admin::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(8500), "₹85.00");
    /// ```
    pub fn format_currency(&self, paise: i64) -> String {
        let divisor = 10_i64.pow(u32::from(self.currency_decimals));
        let whole = paise / divisor;
        let frac = (paise % divisor).abs();

        format!(
            "{}{}{}",
            if paise < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = usize::from(self.currency_decimals)
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ConfigState {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(8500), "₹85.00");
        assert_eq!(config.format_currency(1), "₹0.01");
        assert_eq!(config.format_currency(0), "₹0.00");
        assert_eq!(config.format_currency(-1234), "-₹12.34");
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            ("SCHOOLCART_STORE_NAME", "Sunrise Public School"),
            ("SCHOOLCART_THEME", "Dark"),
            ("SCHOOLCART_NOTIFICATIONS", "false"),
            ("SCHOOLCART_STOCK_ALERT_DELAY_MS", "0"),
        ]);

        assert_eq!(config.store_name, "Sunrise Public School");
        assert_eq!(config.theme, Theme::Dark);
        assert!(!config.notifications_enabled);
        assert_eq!(config.stock_alert_delay_ms, 0);
        assert_eq!(config.birthday_alert_delay_ms, 1500);
    }

    #[test]
    fn test_unparseable_values_keep_defaults() {
        let config = config_from(&[
            ("SCHOOLCART_THEME", "solarized"),
            ("SCHOOLCART_NOTIFICATIONS", "sometimes"),
            ("SCHOOLCART_BIRTHDAY_ALERT_DELAY_MS", "-5"),
        ]);

        assert_eq!(config, ConfigState::default());
    }
}
