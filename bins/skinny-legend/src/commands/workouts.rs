//! Strength training commands: sessions, exercises, sets and progress

use crate::commands::or_dash;
use crate::context::{parse_date, Context};
use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use clap::Subcommand;
use serde_json::Value;
use skinny_legend_api_client::endpoints::workouts::{
    NewWorkoutExercise, NewWorkoutSession, NewWorkoutSet, SessionDetails, WorkoutSessionUpdate,
    WorkoutSetUpdate,
};
use skinny_legend_cli::output::{format_count, format_kg, Status};

#[derive(Subcommand)]
pub enum WorkoutsCommand {
    /// Start a session on a log (the selected day by default)
    Start {
        /// e.g. "Push day"
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
        #[arg(long)]
        log: Option<i64>,
    },

    /// List the sessions of a log
    Sessions {
        #[arg(long)]
        log: Option<i64>,
    },

    /// Mark a session completed now
    Finish {
        /// Session id
        id: i64,
    },

    /// Delete a session with its exercises and sets
    DeleteSession {
        /// Session id
        id: i64,
    },

    /// Show a session with every exercise and set
    Details {
        /// Session id
        id: i64,
    },

    /// Add an exercise to a session
    AddExercise {
        /// Session id
        session: i64,
        /// e.g. "Bench Press"
        name: String,
        /// e.g. chest, legs
        #[arg(short, long, default_value = "")]
        category: String,
        /// Position in the session
        #[arg(short, long, default_value_t = 0)]
        order: i64,
    },

    /// List the exercises of a session
    Exercises {
        /// Session id
        session: i64,
    },

    /// Delete an exercise with its sets
    DeleteExercise {
        /// Exercise id
        id: i64,
    },

    /// Record a set
    AddSet {
        /// Exercise id
        exercise: i64,
        /// Set number within the exercise
        number: u32,
        reps: u32,
        /// Load in kg, omitted for bodyweight
        #[arg(short, long)]
        weight: Option<f64>,
        /// Rate of perceived exertion
        #[arg(long)]
        rpe: Option<f64>,
    },

    /// List the sets of an exercise
    Sets {
        /// Exercise id
        exercise: i64,
    },

    /// Change a set
    UpdateSet {
        /// Set id
        id: i64,
        reps: u32,
        #[arg(short, long)]
        weight: Option<f64>,
        #[arg(long)]
        rpe: Option<f64>,
        /// Mark the set as not completed
        #[arg(long)]
        skipped: bool,
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Delete a set
    DeleteSet {
        /// Set id
        id: i64,
    },

    /// Past performances of an exercise
    History {
        /// Exercise name
        name: String,
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Personal records of an exercise
    Stats {
        /// Exercise name
        name: String,
    },

    /// Exercises used recently
    Recent {
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Volume per day over a range (the last 7 days by default)
    Summary {
        #[arg(long, value_parser = parse_date)]
        start: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
    },

    /// Every session of the selected day
    ByDate,
}

pub async fn run(ctx: &Context, cmd: WorkoutsCommand) -> Result<()> {
    let api = ctx.client.workouts();

    match cmd {
        WorkoutsCommand::Start { name, notes, log } => {
            let daily_log_id = ctx.log_id(log).await?;
            let session = api
                .create_session(&NewWorkoutSession {
                    daily_log_id,
                    name,
                    notes,
                })
                .await?;
            ctx.emit(&session, |s| {
                Status::success(&format!(
                    "Started {} (#{})",
                    s.name.as_deref().unwrap_or("workout"),
                    s.id
                ));
            })
        }

        WorkoutsCommand::Sessions { log } => {
            let log_id = ctx.log_id(log).await?;
            let sessions = api.sessions(log_id).await?;
            ctx.emit(&sessions, |sessions| {
                Status::header(&format_count(sessions.len(), "session", "sessions"));
                for s in sessions {
                    let state = if s.completed_at.is_some() {
                        "done"
                    } else {
                        "open"
                    };
                    println!(
                        "  #{:<5} {:<20} {:<5} {}",
                        s.id,
                        s.name.as_deref().unwrap_or("workout"),
                        state,
                        or_dash(s.started_at.as_deref())
                    );
                }
            })
        }

        WorkoutsCommand::Finish { id } => {
            let update = WorkoutSessionUpdate {
                completed_at: Some(Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()),
                ..WorkoutSessionUpdate::default()
            };
            let session = api.update_session(id, &update).await?;
            ctx.emit(&session, |s| Status::success(&format!("Finished session #{}", s.id)))
        }

        WorkoutsCommand::DeleteSession { id } => {
            let response = api.delete_session(id).await?;
            ctx.emit(&response, |r| Status::success(&r.message))
        }

        WorkoutsCommand::Details { id } => {
            let details = api.session_details(id).await?;
            ctx.emit(&details, print_details)
        }

        WorkoutsCommand::AddExercise {
            session,
            name,
            category,
            order,
        } => {
            let mut body = NewWorkoutExercise::new(session, name, order);
            body.exercise_category = category;
            let exercise = api.create_exercise(&body).await?;
            ctx.emit(&exercise, |e| {
                Status::success(&format!("Added {} (#{})", e.exercise_name, e.id));
            })
        }

        WorkoutsCommand::Exercises { session } => {
            let exercises = api.exercises(session).await?;
            ctx.emit(&exercises, |exercises| {
                Status::header(&format_count(exercises.len(), "exercise", "exercises"));
                for e in exercises {
                    println!(
                        "  {:>2}. #{:<5} {:<24} {}",
                        e.order_index,
                        e.id,
                        e.exercise_name,
                        e.exercise_category.as_deref().unwrap_or_default()
                    );
                }
            })
        }

        WorkoutsCommand::DeleteExercise { id } => {
            let response = api.delete_exercise(id).await?;
            ctx.emit(&response, |r| Status::success(&r.message))
        }

        WorkoutsCommand::AddSet {
            exercise,
            number,
            reps,
            weight,
            rpe,
        } => {
            let mut body = NewWorkoutSet::new(exercise, number, reps, weight);
            body.rpe = rpe;
            let set = api.create_set(&body).await?;
            ctx.emit(&set, |s| {
                Status::success(&format!(
                    "Set {}: {} x {} (#{})",
                    s.set_number,
                    s.reps,
                    or_dash(s.weight_kg.map(format_kg)),
                    s.id
                ));
            })
        }

        WorkoutsCommand::Sets { exercise } => {
            let sets = api.sets(exercise).await?;
            ctx.emit(&sets, |sets| {
                Status::header(&format_count(sets.len(), "set", "sets"));
                for s in sets {
                    println!(
                        "  {:>2}. {:>3} x {:<10} rpe {:<4} {}",
                        s.set_number,
                        s.reps,
                        or_dash(s.weight_kg.map(format_kg)),
                        or_dash(s.rpe),
                        if s.completed { "" } else { "(skipped)" }
                    );
                }
            })
        }

        WorkoutsCommand::UpdateSet {
            id,
            reps,
            weight,
            rpe,
            skipped,
            notes,
        } => {
            let update = WorkoutSetUpdate {
                reps,
                weight_kg: weight,
                rpe,
                completed: !skipped,
                notes,
            };
            let set = api.update_set(id, &update).await?;
            ctx.emit(&set, |s| Status::success(&format!("Updated set #{}", s.id)))
        }

        WorkoutsCommand::DeleteSet { id } => {
            let response = api.delete_set(id).await?;
            ctx.emit(&response, |r| Status::success(&r.message))
        }

        WorkoutsCommand::History { name, limit } => {
            let history = api.history(&name, limit).await?;
            ctx.emit(&history, |h| {
                Status::header(&format!("History of {name}"));
                print_rows(h);
            })
        }

        WorkoutsCommand::Stats { name } => {
            let stats = api.stats(&name).await?;
            ctx.emit(&stats, |s| {
                Status::header(&format!("Records for {name}"));
                Status::field("Max weight", or_dash(s.max_weight.map(format_kg)));
                Status::field("Max reps", or_dash(s.max_reps));
                Status::field("Max volume", or_dash(s.max_volume.map(format_kg)));
                Status::field("Sessions", or_dash(s.total_sessions));
                Status::field("Total volume", or_dash(s.total_volume.map(format_kg)));
            })
        }

        WorkoutsCommand::Recent { limit } => {
            let recent = api.recent_exercises(limit).await?;
            ctx.emit(&recent, |recent| {
                Status::header(&format_count(recent.len(), "recent exercise", "recent exercises"));
                for e in recent {
                    println!(
                        "  {:<24} {:<12} {}",
                        e.exercise_name,
                        e.exercise_category.as_deref().unwrap_or_default(),
                        e.last_used.as_deref().unwrap_or_default()
                    );
                }
            })
        }

        WorkoutsCommand::Summary { start, end } => {
            let end = ctx.day(end);
            let start = start.unwrap_or(end - Duration::days(6));
            let summary = api.daily_summary(start, end).await?;
            ctx.emit(&summary, |s| {
                Status::header(&format!("Training {start} to {end}"));
                print_rows(s);
            })
        }

        WorkoutsCommand::ByDate => {
            let sessions = api.by_date(ctx.selected.get()).await?;
            ctx.emit(&sessions, |sessions| {
                if sessions.is_empty() {
                    Status::info(&format!("No workouts on {}", ctx.selected.iso()));
                }
                for details in sessions {
                    print_details(details);
                }
            })
        }
    }
}

fn print_details(details: &SessionDetails) {
    let session = &details.session;
    Status::header(&format!(
        "{} (#{})",
        session.name.as_deref().unwrap_or("Workout"),
        session.id
    ));
    for ex in &details.exercises {
        Status::subheader(&ex.exercise.exercise_name);
        for set in &ex.sets {
            println!(
                "    {:>2}. {:>3} x {}",
                set.set_number,
                set.reps,
                or_dash(set.weight_kg.map(format_kg))
            );
        }
    }
    Status::field("Volume", format_kg(details.total_volume()));
}

/// One line per row of an analytics array, `date` first
fn print_rows(rows: &Value) {
    let rows = rows.as_array().map(Vec::as_slice).unwrap_or_default();
    if rows.is_empty() {
        Status::info("No data");
        return;
    }
    for row in rows {
        let Some(fields) = row.as_object() else {
            continue;
        };
        let date = fields.get("date").and_then(Value::as_str).unwrap_or("");
        let rest: Vec<String> = fields
            .iter()
            .filter(|(key, v)| *key != "date" && !v.is_null() && !v.is_array() && !v.is_object())
            .map(|(key, v)| match v {
                Value::String(s) => format!("{key}={s}"),
                other => format!("{key}={other}"),
            })
            .collect();
        println!("  {date}  {}", rest.join("  "));
    }
}
