use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    currency::{Currency, UsedCurrencies, DEFAULT_USED_CURRENCIES},
    errors::{Result, SwitcherError},
    format::{LocaleConfig, LocaleFormatter},
    period::Period,
    session::SessionState,
    storage::{JsonFileStore, KeyValueStore},
    utils::persistence::save_json_atomic,
};

const APP_DIR: &str = "switcher";
const STORE_FILE: &str = "preferences.json";

/// User-adjustable defaults for the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: LocaleConfig,
    pub default_period: Period,
    pub default_currency: Currency,
    pub default_used_currencies: Vec<Currency>,
    pub period_precision: u8,
    pub currency_precision: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: LocaleConfig::default(),
            default_period: Period::Daily,
            default_currency: Currency::Eur,
            default_used_currencies: DEFAULT_USED_CURRENCIES.to_vec(),
            period_precision: 0,
            currency_precision: 2,
            storage_path: None,
        }
    }
}

impl Config {
    /// Preference file location; falls back to the platform data directory.
    pub fn resolve_storage_path(&self) -> PathBuf {
        if let Some(path) = &self.storage_path {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(APP_DIR).join(STORE_FILE)
    }

    pub fn open_store(&self) -> Result<JsonFileStore> {
        JsonFileStore::open(self.resolve_storage_path())
    }

    pub fn formatter(&self) -> LocaleFormatter {
        LocaleFormatter::new(self.locale.clone())
    }

    /// Initial session: default selections plus the persisted used currencies.
    pub fn session(&self, store: &dyn KeyValueStore) -> Result<SessionState> {
        let used = UsedCurrencies::load(store, &self.default_used_currencies)?;
        Ok(SessionState::new(
            self.default_period,
            self.default_currency,
            used,
        ))
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        let config_root = base.join("config");
        fs::create_dir_all(&config_root)?;
        Ok(Self::new(config_root.join("config.json")))
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "loaded configuration");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if config.currency_precision > 10 || config.period_precision > 10 {
            return Err(SwitcherError::InvalidConfig(
                "display precision must be between 0 and 10".into(),
            ));
        }
        save_json_atomic(config, &self.path)?;
        tracing::info!(path = %self.path.display(), "saved configuration");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
