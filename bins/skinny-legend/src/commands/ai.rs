//! AI assistant commands

use crate::commands::read_json_file;
use crate::context::Context;
use anyhow::{Context as _, Result};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use skinny_legend_api_client::endpoints::ai::{ChatMessage, GoalInputs};
use skinny_legend_api_client::endpoints::daily_logs::DailyLogUpdate;
use skinny_legend_api_client::endpoints::exercises::ExerciseInput;
use skinny_legend_api_client::endpoints::food_entries::{FoodEntryInput, MealType};
use skinny_legend_cli::output::{format_calories, format_count, format_grams, Status};
use skinny_legend_cli::progress;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum AiCommand {
    /// Estimate the foods in an uploaded photo
    Analyze {
        /// Image id
        image_id: i64,
        /// Hints for the model, e.g. "half portion"
        #[arg(long)]
        notes: Option<String>,
        /// Ignore any earlier analysis
        #[arg(long)]
        force: bool,
    },

    /// Describe what you ate in plain words
    Chat {
        message: String,
        /// JSON file holding earlier turns: [{"role": "user", "content": "..."}]
        #[arg(long)]
        history: Option<PathBuf>,
        /// Log the suggested foods, water and exercise on the selected day
        #[arg(long)]
        apply: bool,
    },

    /// Compute calorie and macro goals from body metrics
    Goals {
        /// JSON file with weight_kg, height_cm, age, gender, activity_level, goal
        #[arg(long, conflicts_with_all = ["weight_kg", "height_cm", "age", "gender"])]
        file: Option<PathBuf>,
        #[arg(long, required_unless_present = "file")]
        weight_kg: Option<f64>,
        #[arg(long, required_unless_present = "file")]
        height_cm: Option<f64>,
        #[arg(long, required_unless_present = "file")]
        age: Option<u32>,
        /// male or female
        #[arg(long, required_unless_present = "file")]
        gender: Option<String>,
        /// sedentary, light, moderate, active or very_active
        #[arg(long, default_value = "moderate")]
        activity: String,
        /// lose, maintain or gain
        #[arg(long, default_value = "maintain")]
        goal: String,
    },
}

/// A food the model suggests logging
#[derive(Debug, Clone, Deserialize)]
struct SuggestedFood {
    name: String,
    #[serde(default)]
    calories: f64,
    protein_g: Option<f64>,
    carbs_g: Option<f64>,
    fat_g: Option<f64>,
    fiber_g: Option<f64>,
    sugar_g: Option<f64>,
    serving_size: Option<String>,
    meal_type: Option<String>,
}

/// Meal slot from the model's free-form label
fn parse_meal(label: &str) -> Option<MealType> {
    match label.trim().to_ascii_lowercase().as_str() {
        "breakfast" => Some(MealType::Breakfast),
        "lunch" => Some(MealType::Lunch),
        "dinner" => Some(MealType::Dinner),
        "snack" | "snacks" => Some(MealType::Snack),
        _ => None,
    }
}

impl SuggestedFood {
    fn to_entry(&self, daily_log_id: i64) -> FoodEntryInput {
        FoodEntryInput {
            daily_log_id,
            name: self.name.clone(),
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            fiber_g: self.fiber_g,
            sugar_g: self.sugar_g,
            meal_type: self.meal_type.as_deref().and_then(parse_meal),
            serving_size: self.serving_size.clone(),
            ..FoodEntryInput::default()
        }
    }
}

/// Foods listed under `items`; malformed items are skipped
fn suggested_foods(response: &Value) -> Vec<SuggestedFood> {
    response
        .get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Activity under `actions.exercise`, if it names a type and a duration
fn suggested_exercise(response: &Value, daily_log_id: i64) -> Option<ExerciseInput> {
    let exercise = response.pointer("/actions/exercise")?;
    let kind = exercise.get("type").and_then(Value::as_str)?;
    let minutes = exercise
        .get("duration_minutes")
        .and_then(Value::as_f64)
        .filter(|m| *m > 0.0)?;

    let mut input = ExerciseInput::new(daily_log_id, kind, minutes);
    if let Some(kcal) = exercise.get("calories_burned").and_then(Value::as_f64) {
        input.calories_burned = kcal;
    }
    if let Some(notes) = exercise.get("notes").and_then(Value::as_str) {
        input.notes = notes.to_string();
    }
    Some(input)
}

fn suggested_water(response: &Value) -> Option<f64> {
    response
        .pointer("/actions/water_ml")
        .and_then(Value::as_f64)
        .filter(|ml| *ml > 0.0)
}

pub async fn run(ctx: &Context, cmd: AiCommand) -> Result<()> {
    let api = ctx.client.ai();

    match cmd {
        AiCommand::Analyze {
            image_id,
            notes,
            force,
        } => {
            let pb = ctx.spinner("Analyzing photo");
            let response = api.analyze_image(image_id, notes.as_deref(), force).await;
            progress::clear(&pb);
            let response = response?;

            ctx.emit(&response, |r| {
                Status::header(&format!("Analysis of image #{image_id}"));
                print_foods(&suggested_foods(r));
                if let Some(confidence) = r.get("confidence").and_then(Value::as_str) {
                    Status::field("Confidence", confidence);
                }
                if let Some(notes) = r.get("notes").and_then(Value::as_str) {
                    Status::field("Notes", notes);
                }
            })
        }

        AiCommand::Chat {
            message,
            history,
            apply,
        } => {
            let history: Vec<ChatMessage> = match history {
                Some(path) => read_json_file(&path)?,
                None => Vec::new(),
            };

            let pb = ctx.spinner("Thinking");
            let response = api.chat(&message, &history).await;
            progress::clear(&pb);
            let response = response?;

            if !apply {
                return ctx.emit(&response, print_chat);
            }

            let applied = apply_suggestions(ctx, &response).await?;
            ctx.emit(&json!({ "response": response, "applied": applied }), |_| {
                print_chat(&response);
                println!();
                Status::success(&format!(
                    "Logged {}",
                    format_count(applied.entries, "food", "foods")
                ));
                if let Some(ml) = applied.water_ml {
                    Status::success(&format!("Added {ml} ml of water"));
                }
                if let Some(kind) = &applied.exercise {
                    Status::success(&format!("Recorded {kind}"));
                }
            })
        }

        AiCommand::Goals {
            file,
            weight_kg,
            height_cm,
            age,
            gender,
            activity,
            goal,
        } => {
            let inputs = match file {
                Some(path) => read_json_file(&path)?,
                None => GoalInputs {
                    weight_kg: weight_kg.context("--weight-kg is required")?,
                    height_cm: height_cm.context("--height-cm is required")?,
                    age: age.context("--age is required")?,
                    gender: gender.context("--gender is required")?,
                    activity_level: activity,
                    goal,
                },
            };
            let response = api.calculate_goals(&inputs).await?;
            ctx.emit(&response, |r| {
                Status::header("Calculated goals");
                for key in ["bmr", "tdee", "calorie_goal"] {
                    if let Some(kcal) = r.get(key).and_then(Value::as_f64) {
                        Status::field(key, format_calories(kcal));
                    }
                }
                if let Some(goal) = r.get("goal").and_then(Value::as_str) {
                    Status::field("goal", goal);
                }
            })
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct Applied {
    entries: usize,
    water_ml: Option<f64>,
    exercise: Option<String>,
}

async fn apply_suggestions(ctx: &Context, response: &Value) -> Result<Applied> {
    let foods = suggested_foods(response);
    let water = suggested_water(response);
    let mut applied = Applied::default();
    if foods.is_empty() && water.is_none() && suggested_exercise(response, 0).is_none() {
        return Ok(applied);
    }

    let log = ctx
        .client
        .daily_logs()
        .get_selected(&ctx.selected)
        .await?;

    let entries = ctx.client.food_entries();
    for food in &foods {
        entries.create(&food.to_entry(log.id)).await?;
        applied.entries += 1;
    }

    if let Some(ml) = water {
        let update = DailyLogUpdate {
            total_water_ml: Some(log.total_water_ml.unwrap_or_default() + ml),
            exercise_minutes: log.exercise_minutes,
            notes: log.notes.clone(),
        };
        ctx.client.daily_logs().update(log.id, &update).await?;
        applied.water_ml = Some(ml);
    }

    if let Some(exercise) = suggested_exercise(response, log.id) {
        ctx.client.exercises().create(&exercise).await?;
        applied.exercise = Some(exercise.exercise_type);
    }

    tracing::debug!(log_id = log.id, entries = applied.entries, "Applied chat suggestions");
    Ok(applied)
}

fn print_chat(response: &Value) {
    if let Some(message) = response.get("message").and_then(Value::as_str) {
        println!("{message}");
    }
    let foods = suggested_foods(response);
    if !foods.is_empty() {
        println!();
        print_foods(&foods);
    }
    if let Some(ml) = suggested_water(response) {
        Status::field("Water", format!("{ml} ml"));
    }
    if let Some(exercise) = response.pointer("/actions/exercise").filter(|e| !e.is_null()) {
        let kind = exercise.get("type").and_then(Value::as_str).unwrap_or("exercise");
        let minutes = exercise
            .get("duration_minutes")
            .and_then(Value::as_f64)
            .unwrap_or_default();
        Status::field("Exercise", format!("{kind}, {minutes} min"));
    }
    if response
        .get("needs_clarification")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        Status::warning("The assistant needs more detail before logging");
    }
}

fn print_foods(foods: &[SuggestedFood]) {
    for food in foods {
        println!(
            "  {:<28} {:>10}  P {:<8} C {:<8} F {:<8} {}",
            food.name,
            format_calories(food.calories),
            format_grams(food.protein_g.unwrap_or_default()),
            format_grams(food.carbs_g.unwrap_or_default()),
            format_grams(food.fat_g.unwrap_or_default()),
            food.serving_size.as_deref().unwrap_or_default()
        );
    }
    let total: f64 = foods.iter().map(|f| f.calories).sum();
    Status::field("Total", format_calories(total));
}
