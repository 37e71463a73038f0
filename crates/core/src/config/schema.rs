//! Settings schema definitions

use serde::{Deserialize, Serialize};

/// Root settings schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SettingsSchema {
    /// `[api]` table
    #[serde(default)]
    pub api: ApiSettings,

    /// `[logging]` table
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Backend connection settings
///
/// Every field is optional: environment variables and built-in defaults
/// fill whatever the file leaves out.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base address of the backend, e.g. `http://localhost:8000`
    #[serde(default)]
    pub base_url: Option<String>,

    /// User whose data is read and written
    #[serde(default)]
    pub user_id: Option<i64>,

    /// Request timeout; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human readable output
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}
