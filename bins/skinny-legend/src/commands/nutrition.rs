//! Nutrition breakdown and target commands

use crate::context::{parse_date, Context};
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use clap::Subcommand;
use serde_json::Value;
use skinny_legend_api_client::endpoints::nutrition::NewNutritionTarget;
use skinny_legend_cli::output::{format_calories, format_count, format_grams, Status};

const MACROS: [(&str, &str); 5] = [
    ("protein_g", "Protein"),
    ("carbs_g", "Carbs"),
    ("fat_g", "Fat"),
    ("fiber_g", "Fiber"),
    ("sugar_g", "Sugar"),
];

#[derive(Subcommand)]
pub enum NutritionCommand {
    /// Macro and micronutrient totals of the selected day
    Breakdown,

    /// Daily totals over a date range (the last 7 days by default)
    History {
        #[arg(long, value_parser = parse_date)]
        start: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
    },

    /// List personal nutrient targets
    Targets,

    /// Set a personal nutrient target
    SetTarget {
        /// Nutrient name, e.g. vitamin_c_mg
        nutrient: String,
        amount: f64,
        /// Unit, e.g. mg
        unit: String,
    },

    /// Remove a nutrient target
    DeleteTarget {
        /// Target id
        id: i64,
    },
}

/// `[start, end]`, defaulting to the week ending on the selected day
fn history_range(
    ctx: &Context,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> (NaiveDate, NaiveDate) {
    let end = ctx.day(end);
    let start = start.unwrap_or(end - Duration::days(6));
    (start, end)
}

pub async fn run(ctx: &Context, cmd: NutritionCommand) -> Result<()> {
    let api = ctx.client.nutrition();

    match cmd {
        NutritionCommand::Breakdown => {
            let date = ctx.selected.get();
            let breakdown = api.breakdown(date).await?;
            ctx.emit(&breakdown, |b| print_breakdown(date, b))
        }

        NutritionCommand::History { start, end } => {
            let (start, end) = history_range(ctx, start, end);
            let history = api.history(start, end).await?;
            ctx.emit(&history, |h| {
                Status::header(&format!("Nutrition {start} to {end}"));
                let days = h.as_array().map(Vec::as_slice).unwrap_or_default();
                for day in days {
                    let date = day.get("date").and_then(Value::as_str).unwrap_or("?");
                    let kcal = number(day, "calories")
                        .or_else(|| number(day, "total_calories"))
                        .unwrap_or_default();
                    println!("  {date}  {:>10}", format_calories(kcal));
                }
                if days.is_empty() {
                    Status::info("No data in range");
                }
            })
        }

        NutritionCommand::Targets => {
            let targets = api.targets().await?;
            ctx.emit(&targets, |targets| {
                Status::header(&format_count(targets.len(), "target", "targets"));
                for t in targets {
                    println!(
                        "  #{:<5} {:<24} {} {}",
                        t.id, t.nutrient_name, t.target_amount, t.unit
                    );
                }
            })
        }

        NutritionCommand::SetTarget {
            nutrient,
            amount,
            unit,
        } => {
            let body = NewNutritionTarget {
                user_id: Some(ctx.client.user_id()),
                nutrient_name: nutrient,
                target_amount: amount,
                unit,
            };
            let target = api.set_target(&body).await?;
            ctx.emit(&target, |t| {
                Status::success(&format!(
                    "Target for {} set to {} {}",
                    t.nutrient_name, t.target_amount, t.unit
                ));
            })
        }

        NutritionCommand::DeleteTarget { id } => {
            let response = api.delete_target(id).await?;
            ctx.emit(&response, |r| Status::success(&r.message))
        }
    }
}

fn number(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(Value::as_f64)
}

fn print_breakdown(date: NaiveDate, breakdown: &Value) {
    Status::header(&format!("Nutrition for {date}"));

    let macros = breakdown.get("macros").unwrap_or(&Value::Null);
    Status::field(
        "Calories",
        format_calories(number(macros, "calories").unwrap_or_default()),
    );
    for (key, label) in MACROS {
        Status::field(label, format_grams(number(macros, key).unwrap_or_default()));
    }

    if let Some(micros) = breakdown.get("micronutrients").and_then(Value::as_object) {
        let present: Vec<_> = micros
            .iter()
            .filter_map(|(name, v)| v.as_f64().filter(|n| *n > 0.0).map(|n| (name, n)))
            .collect();
        if !present.is_empty() {
            Status::subheader("Micronutrients");
            for (name, amount) in present {
                Status::field(name, format!("{amount:.1}"));
            }
        }
    }

    let entries = breakdown
        .get("food_entries")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    Status::field("Entries", entries);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::OutputFormat;
    use skinny_legend_core::config::Settings;

    #[test]
    fn test_history_range_defaults_to_a_week() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let ctx = Context::new(&Settings::default(), None, Some(date), OutputFormat::Text).unwrap();

        let (start, end) = history_range(&ctx, None, None);
        assert_eq!(end, date);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());

        let explicit = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(history_range(&ctx, Some(explicit), None).0, explicit);
    }
}
