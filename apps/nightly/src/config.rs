//! # Nightly Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --days 30                                                          │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     GILDED_DAYS=30                                                     │
//! │     GILDED_CURRENCY=USD                                                │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <PATH>, or the platform config dir:                       │
//! │     ~/.config/gilded-rose/gilded-rose.toml (Linux)                     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     30 days, EUR, classic inventory, no orders                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [run]
//! days = 30
//! currency_code = "EUR"
//!
//! [[inventory]]
//! name = "Aged Brie"
//! kind = "aged_brie"
//! sell_in = 2
//! quality = 0
//! base_price_cents = 800
//!
//! [[orders]]
//! item = "Aged Brie"
//! amount = 12
//! ```

use std::path::{Path, PathBuf};

use gilded_core::validation::{
    validate_amount, validate_base_price, validate_currency_code, validate_item_name,
};
use gilded_core::{CurrencyCode, MAX_ITEM_QUANTITY};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{NightlyError, NightlyResult};
use crate::inventory::{classic_inventory, ItemSpec};

/// Upper bound on simulated nights per run.
pub const MAX_DAYS: u32 = 3650;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "gilded-rose.toml";

// =============================================================================
// Run Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    /// Number of nights to simulate.
    #[serde(default = "default_days")]
    pub days: u32,

    /// Currency the demo cart is priced in.
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
}

fn default_days() -> u32 {
    30
}

fn default_currency_code() -> String {
    gilded_core::DEFAULT_CURRENCY_CODE.to_string()
}

impl Default for RunSettings {
    fn default() -> Self {
        RunSettings {
            days: default_days(),
            currency_code: default_currency_code(),
        }
    }
}

// =============================================================================
// Orders
// =============================================================================

/// A demo purchase: put `amount` of the item named `item` in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub item: String,
    pub amount: i64,
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightlyConfig {
    #[serde(default)]
    pub run: RunSettings,

    #[serde(default = "classic_inventory")]
    pub inventory: Vec<ItemSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orders: Vec<OrderSpec>,
}

impl Default for NightlyConfig {
    fn default() -> Self {
        NightlyConfig {
            run: RunSettings::default(),
            inventory: classic_inventory(),
            orders: Vec::new(),
        }
    }
}

impl NightlyConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// An explicit `config_path` must exist; the platform default may not.
    pub fn load(config_path: Option<PathBuf>) -> NightlyResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(NightlyError::ConfigLoadFailed(format!(
                        "{} does not exist",
                        path.display()
                    )));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load nightly config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Reads and parses a TOML file. Does not validate.
    pub fn from_file(path: &Path) -> NightlyResult<Self> {
        info!(?path, "Loading nightly config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses TOML text. Does not validate.
    pub fn from_toml_str(contents: &str) -> NightlyResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml_string(&self) -> NightlyResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> NightlyResult<()> {
        if self.run.days > MAX_DAYS {
            return Err(NightlyError::InvalidConfig(format!(
                "days must be at most {}, got {}",
                MAX_DAYS, self.run.days
            )));
        }

        validate_currency_code(&self.run.currency_code)
            .map_err(|e| NightlyError::InvalidConfig(e.to_string()))?;

        for spec in &self.inventory {
            validate_item_name(&spec.name)
                .map_err(|e| NightlyError::InvalidConfig(format!("inventory item: {}", e)))?;
            validate_base_price(spec.base_price_cents).map_err(|e| {
                NightlyError::InvalidConfig(format!("inventory item '{}': {}", spec.name, e))
            })?;
        }

        for order in &self.orders {
            if !self.inventory.iter().any(|spec| spec.name == order.item) {
                return Err(NightlyError::InvalidConfig(format!(
                    "order for '{}' does not match any inventory item",
                    order.item
                )));
            }
            validate_amount(order.amount).map_err(|e| {
                NightlyError::InvalidConfig(format!("order for '{}': {}", order.item, e))
            })?;
            if order.amount > MAX_ITEM_QUANTITY {
                return Err(NightlyError::InvalidConfig(format!(
                    "order for '{}': amount must be at most {}",
                    order.item, MAX_ITEM_QUANTITY
                )));
            }
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(days) = lookup("GILDED_DAYS") {
            match days.parse::<u32>() {
                Ok(d) => {
                    debug!(days = d, "Overriding days from environment");
                    self.run.days = d;
                }
                Err(_) => warn!(value = %days, "Ignoring unparsable GILDED_DAYS"),
            }
        }

        if let Some(code) = lookup("GILDED_CURRENCY") {
            debug!(currency = %code, "Overriding currency from environment");
            self.run.currency_code = code;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "gilded-rose", "gilded-rose")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Currency the demo cart is priced in.
    pub fn currency(&self) -> CurrencyCode {
        CurrencyCode::new(self.run.currency_code.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gilded_core::ItemKind;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = NightlyConfig::default();
        assert_eq!(config.run.days, 30);
        assert_eq!(config.run.currency_code, "EUR");
        assert_eq!(config.inventory, classic_inventory());
        assert!(config.orders.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = NightlyConfig::from_toml_str("").unwrap();
        assert_eq!(config, NightlyConfig::default());
    }

    #[test]
    fn test_parse_full_file() {
        let config = NightlyConfig::from_toml_str(
            r#"
            [run]
            days = 5
            currency_code = "USD"

            [[inventory]]
            name = "Aged Brie"
            kind = "aged_brie"
            sell_in = 2
            quality = 0
            base_price_cents = 800

            [[inventory]]
            name = "Plain Rope"
            sell_in = 3
            quality = 3

            [[orders]]
            item = "Aged Brie"
            amount = 12
            "#,
        )
        .unwrap();

        assert_eq!(config.run.days, 5);
        assert_eq!(config.currency().as_str(), "USD");
        assert_eq!(config.inventory.len(), 2);
        assert_eq!(config.inventory[0].kind, ItemKind::AgedBrie);
        // kind and price default
        assert_eq!(config.inventory[1].kind, ItemKind::Standard);
        assert_eq!(config.inventory[1].base_price_cents, 0);
        assert_eq!(config.orders[0].amount, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_kind_is_a_parse_error() {
        let err = NightlyConfig::from_toml_str(
            r#"
            [[inventory]]
            name = "Mystery"
            kind = "cursed"
            sell_in = 1
            quality = 1
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, NightlyError::TomlParse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_orders() {
        let mut config = NightlyConfig::default();
        config.orders.push(OrderSpec {
            item: "Cheese Grater".into(),
            amount: 1,
        });
        assert!(matches!(config.validate(), Err(NightlyError::InvalidConfig(_))));

        config.orders = vec![OrderSpec {
            item: "Aged Brie".into(),
            amount: 0,
        }];
        assert!(matches!(config.validate(), Err(NightlyError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range_prices() {
        let mut config = NightlyConfig::default();
        config.inventory[0].base_price_cents = -1000;
        assert!(matches!(config.validate(), Err(NightlyError::InvalidConfig(_))));

        config.inventory[0].base_price_cents = i64::MAX / 100;
        assert!(matches!(config.validate(), Err(NightlyError::InvalidConfig(_))));

        config.inventory[0].base_price_cents = gilded_core::MAX_BASE_PRICE_CENTS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_order_over_line_cap() {
        let mut config = NightlyConfig::default();
        config.orders.push(OrderSpec {
            item: "Aged Brie".into(),
            amount: MAX_ITEM_QUANTITY + 1,
        });
        assert!(matches!(config.validate(), Err(NightlyError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_blank_fields_and_long_runs() {
        let mut config = NightlyConfig::default();
        config.run.currency_code = " ".into();
        assert!(config.validate().is_err());

        let mut config = NightlyConfig::default();
        config.inventory[0].name = String::new();
        assert!(config.validate().is_err());

        let mut config = NightlyConfig::default();
        config.run.days = MAX_DAYS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [("GILDED_DAYS", "7"), ("GILDED_CURRENCY", "GBP")].into();
        let mut config = NightlyConfig::default();

        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.run.days, 7);
        assert_eq!(config.run.currency_code, "GBP");
    }

    #[test]
    fn test_unparsable_days_override_is_ignored() {
        let mut config = NightlyConfig::default();
        config.apply_overrides(|key| (key == "GILDED_DAYS").then(|| "many".to_string()));
        assert_eq!(config.run.days, 30);
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let config = NightlyConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(NightlyConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let path = std::env::temp_dir().join(format!("gilded-missing-{}.toml", uuid::Uuid::new_v4()));
        let err = NightlyConfig::load(Some(path)).unwrap_err();
        assert!(matches!(err, NightlyError::ConfigLoadFailed(_)));
    }
}
