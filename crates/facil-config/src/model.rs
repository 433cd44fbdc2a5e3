use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

/// Overrides the data directory regardless of the stored configuration.
pub const HOME_ENV_VAR: &str = "FINANCA_FACIL_HOME";

const APP_DIR_NAME: &str = "financa-facil";

/// Stores user preferences and where the ledger lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_storage_key")]
    pub storage_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the ledger blob. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,

    /// Set once the user has dismissed the landing page.
    #[serde(default)]
    pub intro_seen: bool,
    #[serde(default = "Config::default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "Config::default_insight_window")]
    pub insight_window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            storage_key: Self::default_storage_key(),
            data_dir: None,
            intro_seen: false,
            recent_limit: Self::default_recent_limit(),
            insight_window: Self::default_insight_window(),
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "pt-BR".into()
    }

    pub fn default_currency() -> String {
        "BRL".into()
    }

    pub fn default_storage_key() -> String {
        "financa_facil_transactions_v1".into()
    }

    pub fn default_recent_limit() -> usize {
        5
    }

    pub fn default_insight_window() -> usize {
        50
    }

    /// Directory holding the ledger blob.
    ///
    /// Order: `FINANCA_FACIL_HOME`, the configured `data_dir`, the platform data
    /// directory, the home directory, then the working directory.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV_VAR) {
            return PathBuf::from(custom);
        }
        if let Some(path) = &self.data_dir {
            return path.clone();
        }
        if let Some(base) = dirs::data_dir() {
            return base.join(APP_DIR_NAME);
        }
        dirs::home_dir()
            .map(|home| home.join(format!(".{APP_DIR_NAME}")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Default location of the configuration file itself.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join("config.json")
    }
}
