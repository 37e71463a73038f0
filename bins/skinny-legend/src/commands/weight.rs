//! Weigh-in commands

use crate::context::{parse_date, Context};
use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Subcommand;
use skinny_legend_api_client::endpoints::weight_logs::{NewWeightLog, WeightLog};
use skinny_legend_cli::output::{format_count, format_kg, Status};

#[derive(Subcommand)]
pub enum WeightCommand {
    /// List weigh-ins, optionally within a date range
    List {
        #[arg(long, value_parser = parse_date, requires = "end")]
        start: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date, requires = "start")]
        end: Option<NaiveDate>,
    },

    /// Record a weigh-in on the selected day
    Add {
        /// Weight in kg
        kg: f64,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a weigh-in
    Delete {
        /// Weigh-in id
        id: i64,
    },

    /// Show the most recent weigh-in
    Latest,
}

pub async fn run(ctx: &Context, cmd: WeightCommand) -> Result<()> {
    let api = ctx.client.weight_logs();

    match cmd {
        WeightCommand::List { start, end } => {
            let logs = api.list(start.zip(end)).await?;
            ctx.emit(&logs, |logs| print_logs(logs))
        }

        WeightCommand::Add { kg, notes } => {
            if kg <= 0.0 {
                bail!("Weight must be positive, got {kg}");
            }
            let mut body = NewWeightLog::new(kg).on(ctx.selected.get());
            body.user_id = Some(ctx.client.user_id());
            body.notes = notes;

            let log = api.create(&body).await?;
            ctx.emit(&log, |log| {
                Status::success(&format!(
                    "Recorded {} on {} (#{})",
                    format_kg(log.weight_kg),
                    log.date,
                    log.id
                ));
            })
        }

        WeightCommand::Delete { id } => {
            let response = api.delete(id).await?;
            ctx.emit(&response, |r| Status::success(&r.message))
        }

        WeightCommand::Latest => {
            let log = api.latest().await?;
            ctx.emit(&log, |log| {
                Status::field("Latest", format!("{} on {}", format_kg(log.weight_kg), log.date));
            })
        }
    }
}

fn print_logs(logs: &[WeightLog]) {
    Status::header(&format_count(logs.len(), "weigh-in", "weigh-ins"));
    let mut previous: Option<f64> = None;
    // Oldest first so each line shows the change since the one before
    let mut ordered: Vec<&WeightLog> = logs.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date));
    for log in ordered {
        let delta = previous
            .map(|p| format!("{:+.1}", log.weight_kg - p))
            .unwrap_or_default();
        println!(
            "  {}  #{:<5} {:>9} {:>6}  {}",
            log.date,
            log.id,
            format_kg(log.weight_kg),
            delta,
            log.notes.as_deref().unwrap_or_default()
        );
        previous = Some(log.weight_kg);
    }
}
