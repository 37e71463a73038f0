//! Error handling with recovery suggestions
//!
//! Errors raised while loading settings or parsing user-supplied values.
//! Every variant can describe how to recover via [`Error::suggestion`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Settings file could not be read
    #[error("Failed to read settings file {}: {source}", path.display())]
    SettingsRead {
        /// File that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML or has the wrong shape
    #[error("Failed to parse settings file {}: {source}", path.display())]
    SettingsParse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// A setting holds a value outside its allowed range
    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue {
        /// Setting key, e.g. `api.user_id`
        key: String,
        /// Why it was rejected
        reason: String,
    },

    /// A date string is not `YYYY-MM-DD`
    #[error("Invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl Error {
    /// Create an invalid value error
    pub fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Recovery suggestion shown under the error message
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SettingsRead { .. } => {
                Some("Check that the file exists and you have read permissions")
            }
            Self::SettingsParse { .. } => {
                Some("Fix the TOML syntax or remove the file to fall back to defaults")
            }
            Self::InvalidValue { .. } => None,
            Self::InvalidDate(_) => Some("Use an ISO date such as 2024-03-09"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = Error::InvalidDate("03/09/2024".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid date `03/09/2024`, expected YYYY-MM-DD"
        );
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_invalid_value_has_no_suggestion() {
        let err = Error::invalid_value("api.user_id", "must be positive");
        assert_eq!(err.to_string(), "Invalid value for `api.user_id`: must be positive");
        assert!(err.suggestion().is_none());
    }
}
