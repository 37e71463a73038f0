//! Daily log commands

use crate::commands::or_dash;
use crate::context::Context;
use anyhow::Result;
use clap::Subcommand;
use skinny_legend_api_client::endpoints::daily_logs::{DailyLog, DailyLogUpdate, NewDailyLog};
use skinny_legend_cli::output::{format_calories, format_count, format_progress, Status};

#[derive(Subcommand)]
pub enum LogsCommand {
    /// List every log, newest first
    List,

    /// Show the log of the selected day, creating it if needed
    Show,

    /// Create a log for the selected day
    Create {
        /// Water drunk in ml
        #[arg(long)]
        water: Option<f64>,
        /// Minutes of exercise
        #[arg(long)]
        exercise: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Overwrite water, exercise minutes and notes of a log
    Update {
        /// Log id
        id: i64,
        #[arg(long)]
        water: Option<f64>,
        #[arg(long)]
        exercise: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Add water to the selected day
    Water {
        /// Amount in ml
        ml: f64,
    },

    /// Delete a log
    Delete {
        /// Log id
        id: i64,
    },
}

pub async fn run(ctx: &Context, cmd: LogsCommand) -> Result<()> {
    let api = ctx.client.daily_logs();

    match cmd {
        LogsCommand::List => {
            let logs = api.list().await?;
            ctx.emit(&logs, |logs| {
                Status::header(&format_count(logs.len(), "daily log", "daily logs"));
                for log in logs {
                    println!(
                        "  {}  #{:<5} {}",
                        log.date,
                        log.id,
                        format_progress(
                            log.total_calories.unwrap_or_default(),
                            log.calorie_goal,
                            "kcal"
                        )
                    );
                }
            })
        }

        LogsCommand::Show => {
            let log = api.get_selected(&ctx.selected).await?;
            ctx.emit(&log, print_log)
        }

        LogsCommand::Create {
            water,
            exercise,
            notes,
        } => {
            let body = NewDailyLog {
                user_id: Some(ctx.client.user_id()),
                date: Some(ctx.selected.iso()),
                total_water_ml: water,
                exercise_minutes: exercise,
                notes,
            };
            let log = api.create(&body).await?;
            ctx.emit(&log, |log| {
                Status::success(&format!("Created log #{} for {}", log.id, log.date));
            })
        }

        LogsCommand::Update {
            id,
            water,
            exercise,
            notes,
        } => {
            let update = DailyLogUpdate {
                total_water_ml: water,
                exercise_minutes: exercise,
                notes,
            };
            let log = api.update(id, &update).await?;
            ctx.emit(&log, |log| Status::success(&format!("Updated log #{}", log.id)))
        }

        LogsCommand::Water { ml } => {
            let log = api.get_selected(&ctx.selected).await?;
            let update = DailyLogUpdate {
                total_water_ml: Some(log.total_water_ml.unwrap_or_default() + ml),
                exercise_minutes: log.exercise_minutes,
                notes: log.notes.clone(),
            };
            let log = api.update(log.id, &update).await?;
            ctx.emit(&log, |log| {
                Status::success(&format!(
                    "Water on {}: {} ml",
                    log.date,
                    log.total_water_ml.unwrap_or_default()
                ));
            })
        }

        LogsCommand::Delete { id } => {
            let response = api.delete(id).await?;
            ctx.emit(&response, |r| Status::success(&r.message))
        }
    }
}

fn print_log(log: &DailyLog) {
    Status::header(&format!("Daily log {}", log.date));
    Status::field(
        "Calories",
        format_progress(log.total_calories.unwrap_or_default(), log.calorie_goal, "kcal"),
    );
    if let Some(remaining) = log.calories_remaining() {
        Status::field("Remaining", format_calories(remaining));
    }
    Status::field("Protein target", format!("{} g", or_dash(log.protein_target_g)));
    Status::field("Carbs target", format!("{} g", or_dash(log.carbs_target_g)));
    Status::field("Fat target", format!("{} g", or_dash(log.fat_target_g)));
    Status::field("Water", format!("{} ml", log.total_water_ml.unwrap_or_default()));
    Status::field("Exercise", format!("{} min", log.exercise_minutes.unwrap_or_default()));
    if let Some(notes) = log.notes.as_deref().filter(|n| !n.is_empty()) {
        Status::field("Notes", notes);
    }
    Status::field("Log id", log.id);
}
