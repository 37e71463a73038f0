//! Skinny Legend CLI
//!
//! Command line client for the Skinny Legend nutrition and fitness
//! tracker: daily logs, food entries, photos, AI analysis, weight, workouts
//! and more.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use skinny_legend_core::config::Settings;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod context;
mod logging;

use commands::{
    ai, barcode, entries, exercises, health, images, logs, nutrition, profile, recent_foods,
    supplements, weight, workouts,
};
use context::{parse_date, Context, OutputFormat};

/// Track meals, weight and workouts against the Skinny Legend backend
#[derive(Parser)]
#[command(name = "skinny-legend")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Settings file (defaults to .skinny-legend.toml or the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Day to work on (YYYY-MM-DD); today when omitted
    #[arg(short, long, global = true, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// User id for user-scoped requests
    #[arg(short, long, global = true)]
    user: Option<i64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the backend is reachable
    Health {
        /// Include the response time
        #[arg(short, long)]
        timing: bool,
    },

    /// Show the resolved client configuration
    Config,

    /// Daily logs: targets, totals, water and notes
    #[command(subcommand)]
    Logs(logs::LogsCommand),

    /// Food entries of a day
    #[command(subcommand)]
    Entries(entries::EntriesCommand),

    /// Look up a packaged food by barcode
    Barcode(barcode::BarcodeArgs),

    /// Meal photos
    #[command(subcommand)]
    Images(images::ImagesCommand),

    /// Photo analysis, food chat and goal calculation
    #[command(subcommand)]
    Ai(ai::AiCommand),

    /// Nutrient breakdown, history and micronutrient targets
    #[command(subcommand)]
    Nutrition(nutrition::NutritionCommand),

    /// Body metrics and derived targets
    #[command(subcommand)]
    Profile(profile::ProfileCommand),

    /// Weigh-ins
    #[command(subcommand)]
    Weight(weight::WeightCommand),

    /// Foods eaten recently
    RecentFoods {
        /// Maximum number of foods
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Cardio and other activities
    #[command(subcommand)]
    Exercises(exercises::ExercisesCommand),

    /// Supplements taken
    #[command(subcommand)]
    Supplements(supplements::SupplementsCommand),

    /// Strength sessions, exercises, sets and records
    #[command(subcommand)]
    Workouts(workouts::WorkoutsCommand),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    logging::init(&settings.logging, cli.verbose)?;

    let ctx = Context::new(&settings, cli.user, cli.date, cli.format)?;
    tracing::debug!(
        base_url = %ctx.client.base_url(),
        user_id = ctx.client.user_id(),
        date = %ctx.selected.iso(),
        "Client ready"
    );

    match cli.command {
        Commands::Health { timing } => health::run(&ctx, timing).await,
        Commands::Config => commands::config::run(&ctx, &settings),
        Commands::Logs(cmd) => logs::run(&ctx, cmd).await,
        Commands::Entries(cmd) => entries::run(&ctx, cmd).await,
        Commands::Barcode(args) => barcode::run(&ctx, args).await,
        Commands::Images(cmd) => images::run(&ctx, cmd).await,
        Commands::Ai(cmd) => ai::run(&ctx, cmd).await,
        Commands::Nutrition(cmd) => nutrition::run(&ctx, cmd).await,
        Commands::Profile(cmd) => profile::run(&ctx, cmd).await,
        Commands::Weight(cmd) => weight::run(&ctx, cmd).await,
        Commands::RecentFoods { limit } => recent_foods::run(&ctx, limit).await,
        Commands::Exercises(cmd) => exercises::run(&ctx, cmd).await,
        Commands::Supplements(cmd) => supplements::run(&ctx, cmd).await,
        Commands::Workouts(cmd) => workouts::run(&ctx, cmd).await,
    }
}
