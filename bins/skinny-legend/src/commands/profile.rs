//! User profile commands

use crate::commands::{or_dash, read_json_file};
use crate::context::Context;
use anyhow::Result;
use clap::Subcommand;
use skinny_legend_api_client::endpoints::profile::{ProfileInput, UserProfile};
use skinny_legend_cli::output::{format_calories, format_kg, Status};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the profile
    Show,

    /// Create the profile from a JSON file
    Create {
        /// JSON with age, weight_kg, height_cm, gender, activity_level, goal
        #[arg(long)]
        file: PathBuf,
    },

    /// Replace the profile from a JSON file
    Update {
        #[arg(long)]
        file: PathBuf,
    },

    /// Show BMR, TDEE and the calorie goal derived from the profile
    Calculations,

    /// Copy the profile's targets onto the selected day's log
    ApplyTargets,
}

fn load_input(ctx: &Context, file: &Path) -> Result<ProfileInput> {
    let mut input: ProfileInput = read_json_file(file)?;
    input.user_id = input.user_id.or(Some(ctx.client.user_id()));
    Ok(input)
}

pub async fn run(ctx: &Context, cmd: ProfileCommand) -> Result<()> {
    let api = ctx.client.profile();

    match cmd {
        ProfileCommand::Show => {
            let profile = api.get().await?;
            ctx.emit(&profile, print_profile)
        }

        ProfileCommand::Create { file } => {
            let profile = api.create(&load_input(ctx, &file)?).await?;
            ctx.emit(&profile, |p| {
                Status::success(&format!("Created profile for user {}", p.user_id));
            })
        }

        ProfileCommand::Update { file } => {
            let profile = api.update(&load_input(ctx, &file)?).await?;
            ctx.emit(&profile, |p| {
                Status::success(&format!("Updated profile for user {}", p.user_id));
            })
        }

        ProfileCommand::Calculations => {
            let calc = api.calculations().await?;
            ctx.emit(&calc, |c| {
                Status::header("Energy");
                Status::field("BMR", format_calories(c.bmr));
                Status::field("TDEE", format_calories(c.tdee));
                Status::field("Calorie goal", format_calories(c.calorie_goal));
                Status::field("Goal", &c.goal);
                Status::field("Activity", &c.activity_level);
            })
        }

        ProfileCommand::ApplyTargets => {
            let response = api.update_day_targets(ctx.selected.get()).await?;
            ctx.emit(&response, |r| Status::success(&r.message))
        }
    }
}

fn print_profile(p: &UserProfile) {
    Status::header(&format!("Profile of user {}", p.user_id));
    Status::field("Age", p.age);
    Status::field("Weight", format_kg(p.weight_kg));
    Status::field("Height", format!("{} cm", p.height_cm));
    Status::field("Gender", &p.gender);
    Status::field("Activity", &p.activity_level);
    Status::field("Goal", &p.goal);
    Status::field("BMR", or_dash(p.bmr));
    Status::field("TDEE", or_dash(p.tdee));

    Status::subheader(if p.use_custom_targets {
        "Custom targets"
    } else {
        "Targets"
    });
    let (protein, carbs, fat, water) = if p.use_custom_targets {
        (
            p.custom_protein_target_g,
            p.custom_carbs_target_g,
            p.custom_fat_target_g,
            p.custom_water_target_ml,
        )
    } else {
        (
            p.protein_target_g,
            p.carbs_target_g,
            p.fat_target_g,
            p.water_target_ml,
        )
    };
    if p.use_custom_targets {
        Status::field("Calories", or_dash(p.custom_calorie_goal));
    }
    Status::field("Protein", format!("{} g", or_dash(protein)));
    Status::field("Carbs", format!("{} g", or_dash(carbs)));
    Status::field("Fat", format!("{} g", or_dash(fat)));
    Status::field("Water", format!("{} ml", or_dash(water)));
}
