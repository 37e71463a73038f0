//! Show the resolved configuration

use crate::context::Context;
use anyhow::Result;
use serde_json::json;
use skinny_legend_cli::output::Status;
use skinny_legend_core::config::Settings;

pub fn run(ctx: &Context, settings: &Settings) -> Result<()> {
    let config = ctx.client.config();
    let output = json!({
        "client": config,
        "selected_date": ctx.selected.iso(),
        "settings_file": settings.path.as_ref().map(|p| p.display().to_string()),
        "logging": {
            "level": settings.logging.level,
            "format": settings.logging.format,
        },
    });

    ctx.emit(&output, |_| {
        Status::header("Configuration");
        Status::field("Base URL", &config.base_url);
        Status::field("User", config.user_id);
        Status::field(
            "Timeout",
            config
                .timeout
                .map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs())),
        );
        Status::field("Selected date", ctx.selected.iso());
        Status::field(
            "Settings file",
            settings
                .path
                .as_ref()
                .map_or_else(|| "(none)".to_string(), |p| p.display().to_string()),
        );
        Status::field("Log level", &settings.logging.level);
    })
}
