//! Shared state handed to every command

use anyhow::Result;
use chrono::NaiveDate;
use clap::ValueEnum;
use indicatif::ProgressBar;
use serde::Serialize;
use skinny_legend_api_client::{ClientConfig, NutritionClient};
use skinny_legend_cli::progress;
use skinny_legend_core::config::Settings;
use skinny_legend_core::selection::{parse_iso_date, SelectedDate};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Short human readable lines
    #[default]
    Text,
    /// Pretty printed JSON as returned by the backend
    Json,
}

/// Client, selected day and output mode for one invocation
pub struct Context {
    pub client: NutritionClient,
    pub selected: SelectedDate,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve the client from environment and settings, applying the
    /// command line overrides
    pub fn new(
        settings: &Settings,
        user: Option<i64>,
        date: Option<NaiveDate>,
        format: OutputFormat,
    ) -> Result<Self> {
        let mut config = ClientConfig::from_settings(&settings.api)?;
        if let Some(user_id) = user {
            config = config.with_user_id(user_id);
        }

        let client = NutritionClient::with_config(config)?;
        let selected = date.map_or_else(SelectedDate::today, SelectedDate::new);

        Ok(Self {
            client,
            selected,
            format,
        })
    }

    /// `explicit` if given, else the selected day
    pub fn day(&self, explicit: Option<NaiveDate>) -> NaiveDate {
        explicit.unwrap_or_else(|| self.selected.get())
    }

    /// `explicit` if given, else the id of the selected day's log. The
    /// backend creates that log when it does not exist yet.
    pub async fn log_id(&self, explicit: Option<i64>) -> Result<i64> {
        if let Some(id) = explicit {
            return Ok(id);
        }
        let log = self.client.daily_logs().get_selected(&self.selected).await?;
        Ok(log.id)
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Print `value` as JSON, or hand it to `text` for human output
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T)) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => text(value),
        }
        Ok(())
    }

    /// Spinner for slow calls; hidden in JSON mode
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.is_json() {
            progress::hidden()
        } else {
            progress::spinner(message)
        }
    }
}

/// clap parser for `YYYY-MM-DD` arguments
pub fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    parse_iso_date(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-09"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
        );
        assert!(parse_date("09/03/2024").is_err());
    }

    #[test]
    fn test_day_falls_back_to_selected() {
        let settings = Settings::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let ctx = Context::new(&settings, Some(2), Some(date), OutputFormat::Json).unwrap();

        assert_eq!(ctx.day(None), date);
        let other = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(ctx.day(Some(other)), other);
        assert_eq!(ctx.client.user_id(), 2);
        assert!(ctx.is_json());
    }
}
