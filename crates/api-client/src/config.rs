//! Configuration for the Skinny Legend API client
//!
//! The base address is resolved once, from the environment, then the
//! settings file, then the local development default.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use skinny_legend_core::config::ApiSettings;
use std::env;
use std::time::Duration;

/// Local development backend
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// User the single-user backend assumes when none is given
pub const DEFAULT_USER_ID: i64 = 1;

/// Environment variables consulted for the base URL, in order
const API_URL_VARS: [&str; 2] = ["SKINNY_LEGEND_API_URL", "API_URL"];
const USER_ID_VAR: &str = "SKINNY_LEGEND_USER_ID";
const TIMEOUT_VAR: &str = "SKINNY_LEGEND_TIMEOUT_SECS";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base address, without the `/api` prefix
    pub base_url: String,
    /// User id sent with user-scoped requests
    pub user_id: i64,
    /// Request timeout; requests wait indefinitely when `None`
    #[serde(with = "optional_secs", default)]
    pub timeout: Option<Duration>,
}

mod optional_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        duration: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_id: DEFAULT_USER_ID,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables alone
    pub fn from_env() -> ApiResult<Self> {
        Self::from_settings(&ApiSettings::default())
    }

    /// Create configuration from environment variables layered over a
    /// settings file
    ///
    /// Reads the following environment variables:
    /// - `SKINNY_LEGEND_API_URL` or `API_URL`: backend base address
    /// - `SKINNY_LEGEND_USER_ID`: user id for user-scoped requests
    /// - `SKINNY_LEGEND_TIMEOUT_SECS`: request timeout in seconds
    pub fn from_settings(settings: &ApiSettings) -> ApiResult<Self> {
        Self::from_lookup(|key| env::var(key).ok(), settings)
    }

    /// Resolve configuration with a custom variable lookup
    pub fn from_lookup<F>(lookup: F, settings: &ApiSettings) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = API_URL_VARS
            .iter()
            .find_map(|var| lookup(var).filter(|v| !v.trim().is_empty()))
            .or_else(|| settings.base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let user_id = match lookup(USER_ID_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ApiError::config(format!("{USER_ID_VAR} is not an integer: {raw}")))?,
            None => settings.user_id.unwrap_or(DEFAULT_USER_ID),
        };

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => Some(raw.trim().parse().map_err(|_| {
                ApiError::config(format!("{TIMEOUT_VAR} is not a number of seconds: {raw}"))
            })?),
            None => settings.timeout_secs,
        }
        .map(Duration::from_secs);

        let config = Self {
            base_url,
            user_id,
            timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the user id
    #[must_use]
    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.user_id <= 0 {
            return Err(ApiError::config("user_id must be positive"));
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.user_id, 1);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_nothing_set_uses_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[]), &ApiSettings::default()).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_env_wins_over_settings() {
        let settings = ApiSettings {
            base_url: Some("http://from-file:8000".to_string()),
            user_id: Some(2),
            timeout_secs: Some(5),
        };
        let config = ClientConfig::from_lookup(
            lookup(&[
                ("API_URL", "http://fallback:9000"),
                ("SKINNY_LEGEND_API_URL", "https://api.example.com"),
                ("SKINNY_LEGEND_USER_ID", "7"),
            ]),
            &settings,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.user_id, 7);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_settings_used_when_env_missing() {
        let settings = ApiSettings {
            base_url: Some("http://from-file:8000".to_string()),
            user_id: Some(2),
            timeout_secs: None,
        };
        let config = ClientConfig::from_lookup(lookup(&[("API_URL", "  ")]), &settings).unwrap();
        assert_eq!(config.base_url, "http://from-file:8000");
        assert_eq!(config.user_id, 2);
    }

    #[test]
    fn test_bad_user_id_env() {
        let result = ClientConfig::from_lookup(
            lookup(&[("SKINNY_LEGEND_USER_ID", "me")]),
            &ApiSettings::default(),
        );
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::default()
            .with_base_url("https://legend.example.com")
            .with_user_id(4)
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.base_url, "https://legend.example.com");
        assert_eq!(config.user_id, 4);
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::default().with_base_url("").validate().is_err());
        assert!(ClientConfig::default().with_base_url("localhost:8000").validate().is_err());
        assert!(ClientConfig::default().with_user_id(0).validate().is_err());
        assert!(ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn test_serialize_timeout_as_secs() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(30));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["timeout"], 30);

        let back: ClientConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
