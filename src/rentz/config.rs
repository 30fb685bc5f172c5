use crate::error::{RentalError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "ETB";

/// Desk settings, stored in `<config dir>/config.json`.
///
/// Only presentation and start-up behaviour live here. Rental state itself is
/// never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RentalConfig {
    /// Label printed in front of amounts (e.g. "ETB", "USD"). Amounts are never converted.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Load the default fleet and customer list at start-up.
    #[serde(default = "default_seed_catalog")]
    pub seed_catalog: bool,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_seed_catalog() -> bool {
    true
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            seed_catalog: default_seed_catalog(),
        }
    }
}

impl RentalConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RentalConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Sets the currency label, normalized to upper case.
    pub fn set_currency(&mut self, currency: &str) -> Result<()> {
        let currency = currency.trim();
        if currency.is_empty() {
            return Err(RentalError::InvalidInput(
                "Currency label cannot be empty".into(),
            ));
        }
        self.currency = currency.to_uppercase();
        Ok(())
    }

    pub fn set_seed_catalog(&mut self, value: &str) -> Result<()> {
        self.seed_catalog = match value.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => true,
            "false" | "no" | "off" | "0" => false,
            other => {
                return Err(RentalError::InvalidInput(format!(
                    "Expected true or false, got '{other}'"
                )))
            }
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = RentalConfig::default();
        assert_eq!(config.currency, "ETB");
        assert!(config.seed_catalog);
    }

    #[test]
    fn test_set_currency_normalizes_case() {
        let mut config = RentalConfig::default();
        config.set_currency(" usd ").unwrap();
        assert_eq!(config.currency, "USD");
        assert!(config.set_currency("  ").is_err());
    }

    #[test]
    fn test_set_seed_catalog() {
        let mut config = RentalConfig::default();
        config.set_seed_catalog("off").unwrap();
        assert!(!config.seed_catalog);
        config.set_seed_catalog("Yes").unwrap();
        assert!(config.seed_catalog);
        assert!(config.set_seed_catalog("maybe").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = RentalConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, RentalConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("rentz");

        let mut config = RentalConfig::default();
        config.set_currency("KES").unwrap();
        config.seed_catalog = false;
        config.save(&nested).unwrap();

        let loaded = RentalConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: RentalConfig = serde_json::from_str(r#"{"currency":"USD"}"#).unwrap();
        assert_eq!(parsed.currency, "USD");
        assert!(parsed.seed_catalog);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        assert!(matches!(
            RentalConfig::load(dir.path()),
            Err(RentalError::Serialization(_))
        ));
    }
}
