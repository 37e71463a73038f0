//! Health check command

use crate::context::Context;
use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use serde_json::json;
use skinny_legend_cli::output::format_duration;

/// Run the health check
pub async fn run(ctx: &Context, timing: bool) -> Result<()> {
    let (health, elapsed) = ctx.client.health().check_timed().await?;

    let output = json!({
        "base_url": ctx.client.base_url(),
        "status": health.status,
        "message": health.message,
        "healthy": health.is_healthy(),
        "response_time_ms": u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
    });

    ctx.emit(&output, |_| {
        let time_str = if timing {
            format!(" ({})", format_duration(elapsed))
        } else {
            String::new()
        };
        let status = if health.is_healthy() {
            "✓ OK".green().to_string()
        } else {
            format!("✗ {}", health.status).red().to_string()
        };
        println!(
            "  {:<10} {}{}",
            ctx.client.base_url(),
            status,
            time_str.dimmed()
        );
        if !health.message.is_empty() {
            println!("    └─ {}", health.message.dimmed());
        }
    })?;

    if !health.is_healthy() {
        bail!("Backend reported status '{}'", health.status);
    }
    Ok(())
}
