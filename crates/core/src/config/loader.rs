//! Settings file loading

use super::schema::{ApiSettings, LoggingSettings, SettingsSchema};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names searched in the working directory, in order
const LOCAL_CANDIDATES: [&str; 2] = [".skinny-legend.toml", "skinny-legend.toml"];

/// Loaded settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Backend connection settings
    pub api: ApiSettings,
    /// Log output settings
    pub logging: LoggingSettings,
    /// File the settings came from, if any
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from an explicit path, or from the first file found in
    /// the standard locations, or fall back to defaults.
    ///
    /// An explicit path that does not exist is an error; a missing file in
    /// the standard locations is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings_path = path.map(Path::to_path_buf).or_else(find_settings_file);

        let Some(settings_path) = settings_path else {
            debug!("No settings file found, using defaults");
            return Ok(Self::default());
        };

        Self::from_file(&settings_path)
    }

    /// Load settings from a specific TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;

        let schema = parse(&content, path)?;
        validate(&schema)?;

        debug!(path = %path.display(), "Loaded settings file");

        Ok(Self {
            api: schema.api,
            logging: schema.logging,
            path: Some(path.to_path_buf()),
        })
    }
}

/// Find a settings file in standard locations
fn find_settings_file() -> Option<PathBuf> {
    LOCAL_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .chain(dirs::config_dir().map(|dir| dir.join("skinny-legend").join("config.toml")))
        .find(|candidate| candidate.is_file())
}

fn parse(content: &str, path: &Path) -> Result<SettingsSchema> {
    toml::from_str(content).map_err(|source| Error::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate(schema: &SettingsSchema) -> Result<()> {
    if let Some(user_id) = schema.api.user_id {
        if user_id <= 0 {
            return Err(Error::invalid_value("api.user_id", "must be a positive integer"));
        }
    }

    if schema.api.timeout_secs == Some(0) {
        return Err(Error::invalid_value("api.timeout_secs", "cannot be zero"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use std::io::Write;

    fn write_settings(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.path.is_none());
        assert!(settings.api.base_url.is_none());
        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_load_full_file() {
        let file = write_settings(
            r#"
[api]
base_url = "http://nas.local:8000"
user_id = 3
timeout_secs = 15

[logging]
level = "debug"
format = "json"
"#,
        );

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.api.base_url.as_deref(), Some("http://nas.local:8000"));
        assert_eq!(settings.api.user_id, Some(3));
        assert_eq!(settings.api.timeout_secs, Some(15));
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let file = write_settings("[api]\nuser_id = 2\n");

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.api.user_id, Some(2));
        assert!(settings.api.base_url.is_none());
        assert_eq!(settings.logging, LoggingSettings::default());
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Settings::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, Error::SettingsRead { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = write_settings("[api\nbase_url = ");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, Error::SettingsParse { .. }));
    }

    #[test]
    fn test_rejects_non_positive_user() {
        let file = write_settings("[api]\nuser_id = 0\n");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref key, .. } if key == "api.user_id"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let file = write_settings("[api]\ntimeout_secs = 0\n");
        assert!(Settings::load(Some(file.path())).is_err());
    }
}
