//! CAP primitives configuration

use serde::{Deserialize, Serialize};

use crate::address::MAX_FIELD_LEN;
use crate::errors::{CapError, Result};

/// Complete CAP configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapConfig {
    /// Address field defaults
    #[serde(default)]
    pub address: AddressConfig,
    /// Logging
    #[serde(default)]
    pub log: LogConfig,
}

/// Defaults applied when building address fields from bare digit strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressConfig {
    /// Nature of address indicator (0-7)
    pub nature_of_address: u8,
    /// Numbering plan indicator (0-15)
    pub numbering_plan: u8,
    /// Extension bit of the header octet
    pub extension: bool,
    /// Upper bound for strict wire parsing, in octets
    pub max_field_octets: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set
    pub level: String,
    /// Emit JSON lines instead of plain text
    pub json: bool,
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            nature_of_address: 1, // International
            numbering_plan: 1,    // E.164
            extension: false,
            max_field_octets: MAX_FIELD_LEN,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl CapConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| CapError::Config(e.to_string()))
    }

    /// Defaults overlaid with `CAP_LOG_LEVEL` and `CAP_JSON_LOGS`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay environment variables onto this configuration
    pub fn apply_env(&mut self) {
        if let Ok(level) = std::env::var("CAP_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Ok(json) = std::env::var("CAP_JSON_LOGS") {
            self.log.json = json == "true" || json == "1";
        }
    }
}
