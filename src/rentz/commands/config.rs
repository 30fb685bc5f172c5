use crate::commands::{CmdMessage, CmdResult};
use crate::config::RentalConfig;
use crate::error::{RentalError, Result};
use std::path::Path;

pub const KEYS: &[&str] = &["currency", "seed-catalog"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RentalConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = value_for(&config, &key)?;
            Ok(CmdResult::default()
                .with_message(CmdMessage::info(format!("{key} = {value}"))))
        }
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                "currency" => config.set_currency(&value)?,
                "seed-catalog" => config.set_seed_catalog(&value)?,
                other => return Err(unknown_key(other)),
            }
            config.save(config_dir)?;
            tracing::info!(key = %key, dir = %config_dir.display(), "config updated");

            let shown = value_for(&config, &key)?;
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!("{key} set to {shown}")))
                .with_config(config))
        }
    }
}

fn value_for(config: &RentalConfig, key: &str) -> Result<String> {
    match key {
        "currency" => Ok(config.currency.clone()),
        "seed-catalog" => Ok(config.seed_catalog.to_string()),
        other => Err(unknown_key(other)),
    }
}

fn unknown_key(key: &str) -> RentalError {
    RentalError::InvalidInput(format!(
        "Unknown config key: {key} (expected one of: {})",
        KEYS.join(", ")
    ))
}
