//! Configuration types for the address book
//!
//! The interactive binary runs with [`AppConfig::default`]. Embedders and
//! tests can build their own, or parse one from JSON.

use serde::{Deserialize, Serialize};

use crate::record::DEFAULT_BIRTHDAY_HORIZON_DAYS;
use crate::state::DEFAULT_BOOK_FILE;

/// Longest accepted birthday look-ahead, in days
pub const MAX_BIRTHDAY_HORIZON_DAYS: u32 = 366;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the address book is persisted
    #[serde(default)]
    pub store: StoreConfig,

    /// Look-ahead window for the `birthdays` command
    #[serde(default = "default_birthday_horizon_days")]
    pub birthday_horizon_days: u32,

    /// Maximum log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Parse a configuration from JSON, filling defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.store.validate()?;

        if self.birthday_horizon_days > MAX_BIRTHDAY_HORIZON_DAYS {
            return Err(crate::Error::config(format!(
                "birthday_horizon_days must be between 0 and {}. Got: {}",
                MAX_BIRTHDAY_HORIZON_DAYS, self.birthday_horizon_days
            )));
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(crate::Error::config(format!(
                "log_level '{}' is not valid. Valid levels: trace, debug, info, warn, error",
                self.log_level
            ))),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            birthday_horizon_days: default_birthday_horizon_days(),
            log_level: default_log_level(),
        }
    }
}

/// Book store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Versioned JSON file
    File {
        /// Path to the book file
        path: String,
    },

    /// In-memory only, nothing survives the process
    Memory,
}

impl StoreConfig {
    /// Validate the store configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            StoreConfig::File { path } if path.trim().is_empty() => Err(crate::Error::config(
                "Book file path cannot be empty",
            )),
            _ => Ok(()),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::File {
            path: DEFAULT_BOOK_FILE.to_string(),
        }
    }
}

fn default_birthday_horizon_days() -> u32 {
    DEFAULT_BIRTHDAY_HORIZON_DAYS
}

fn default_log_level() -> String {
    "warn".to_string()
}
