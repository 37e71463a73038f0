//! Cardio and general exercise commands

use crate::commands::or_dash;
use crate::context::Context;
use anyhow::Result;
use clap::{Args, Subcommand};
use skinny_legend_api_client::endpoints::exercises::ExerciseInput;
use skinny_legend_cli::output::{format_calories, format_count, Status};

#[derive(Subcommand)]
pub enum ExercisesCommand {
    /// List the exercises of a log (the selected day by default)
    List {
        #[arg(long)]
        log: Option<i64>,
    },

    /// Record an exercise
    Add(ExerciseArgs),

    /// Replace an exercise's values
    Update {
        /// Exercise id
        id: i64,
        #[command(flatten)]
        exercise: ExerciseArgs,
    },

    /// Delete an exercise
    Delete {
        /// Exercise id
        id: i64,
    },
}

#[derive(Args)]
pub struct ExerciseArgs {
    /// e.g. running, cycling
    pub exercise_type: String,
    /// Duration in minutes
    pub minutes: f64,
    /// Estimated kcal burned
    #[arg(short, long)]
    pub calories: Option<f64>,
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Daily log id
    #[arg(long)]
    pub log: Option<i64>,
}

impl ExerciseArgs {
    fn into_input(self, daily_log_id: i64) -> ExerciseInput {
        let mut input = ExerciseInput::new(daily_log_id, self.exercise_type, self.minutes);
        input.calories_burned = self.calories.unwrap_or_default();
        input.notes = self.notes.unwrap_or_default();
        input
    }
}

pub async fn run(ctx: &Context, cmd: ExercisesCommand) -> Result<()> {
    let api = ctx.client.exercises();

    match cmd {
        ExercisesCommand::List { log } => {
            let log_id = ctx.log_id(log).await?;
            let exercises = api.list_by_log(log_id).await?;
            ctx.emit(&exercises, |exercises| {
                Status::header(&format_count(exercises.len(), "exercise", "exercises"));
                for e in exercises {
                    println!(
                        "  #{:<5} {:<20} {:>6} min  {:>10}  {}",
                        e.id,
                        e.exercise_type,
                        e.duration_minutes,
                        or_dash(e.calories_burned.map(format_calories)),
                        e.notes.as_deref().unwrap_or_default()
                    );
                }
                let minutes: f64 = exercises.iter().map(|e| e.duration_minutes).sum();
                Status::field("Total", format!("{minutes} min"));
            })
        }

        ExercisesCommand::Add(args) => {
            let log_id = ctx.log_id(args.log).await?;
            let exercise = api.create(&args.into_input(log_id)).await?;
            ctx.emit(&exercise, |e| {
                Status::success(&format!(
                    "Recorded {} for {} min (#{})",
                    e.exercise_type, e.duration_minutes, e.id
                ));
            })
        }

        ExercisesCommand::Update { id, exercise } => {
            let log_id = ctx.log_id(exercise.log).await?;
            let exercise = api.update(id, &exercise.into_input(log_id)).await?;
            ctx.emit(&exercise, |e| Status::success(&format!("Updated exercise #{}", e.id)))
        }

        ExercisesCommand::Delete { id } => {
            let response = api.delete(id).await?;
            ctx.emit(&response, |r| Status::success(&r.message))
        }
    }
}
