//! Food entry commands

use crate::commands::or_dash;
use crate::context::Context;
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use skinny_legend_api_client::endpoints::food_entries::{FoodEntry, FoodEntryInput, MealType};
use skinny_legend_cli::output::{format_calories, format_count, format_grams, Status};

#[derive(Subcommand)]
pub enum EntriesCommand {
    /// List the entries of a log (the selected day by default)
    List {
        /// Daily log id
        #[arg(long)]
        log: Option<i64>,
    },

    /// Add a food to a log (the selected day by default)
    Add(EntryArgs),

    /// Replace an entry's values
    Update {
        /// Entry id
        id: i64,
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: i64,
    },
}

#[derive(Args)]
pub struct EntryArgs {
    /// Food name
    pub name: String,
    /// Energy in kcal
    #[arg(short, long)]
    pub calories: f64,
    #[arg(short, long)]
    pub protein: Option<f64>,
    #[arg(long)]
    pub carbs: Option<f64>,
    #[arg(long)]
    pub fat: Option<f64>,
    #[arg(long)]
    pub fiber: Option<f64>,
    #[arg(long)]
    pub sugar: Option<f64>,
    /// Meal slot
    #[arg(short, long, value_enum)]
    pub meal: Option<Meal>,
    /// Serving description, e.g. "1 cup"
    #[arg(short, long)]
    pub serving: Option<String>,
    /// Daily log id
    #[arg(long)]
    pub log: Option<i64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl From<Meal> for MealType {
    fn from(meal: Meal) -> Self {
        match meal {
            Meal::Breakfast => MealType::Breakfast,
            Meal::Lunch => MealType::Lunch,
            Meal::Dinner => MealType::Dinner,
            Meal::Snack => MealType::Snack,
        }
    }
}

impl EntryArgs {
    fn into_input(self, daily_log_id: i64) -> FoodEntryInput {
        FoodEntryInput {
            daily_log_id,
            name: self.name,
            calories: self.calories,
            protein_g: self.protein,
            carbs_g: self.carbs,
            fat_g: self.fat,
            fiber_g: self.fiber,
            sugar_g: self.sugar,
            meal_type: self.meal.map(MealType::from),
            serving_size: self.serving,
            ..FoodEntryInput::default()
        }
    }
}

pub async fn run(ctx: &Context, cmd: EntriesCommand) -> Result<()> {
    let api = ctx.client.food_entries();

    match cmd {
        EntriesCommand::List { log } => {
            let log_id = ctx.log_id(log).await?;
            let entries = api.list_by_log(log_id).await?;
            ctx.emit(&entries, |entries| print_entries(entries))
        }

        EntriesCommand::Add(args) => {
            let log_id = ctx.log_id(args.log).await?;
            let entry = api.create(&args.into_input(log_id)).await?;
            ctx.emit(&entry, |e| {
                Status::success(&format!(
                    "Added {} ({}) as #{}",
                    e.name,
                    format_calories(e.calories),
                    e.id
                ));
            })
        }

        EntriesCommand::Update { id, entry } => {
            let log_id = ctx.log_id(entry.log).await?;
            let entry = api.update(id, &entry.into_input(log_id)).await?;
            ctx.emit(&entry, |e| Status::success(&format!("Updated {} (#{})", e.name, e.id)))
        }

        EntriesCommand::Delete { id } => {
            let response = api.delete(id).await?;
            ctx.emit(&response, |r| Status::success(&r.message))
        }
    }
}

pub(crate) fn print_entries(entries: &[FoodEntry]) {
    Status::header(&format_count(entries.len(), "food entry", "food entries"));
    for entry in entries {
        println!(
            "  #{:<5} {:<28} {:>10}  P {:<8} C {:<8} F {:<8} {}",
            entry.id,
            entry.name,
            format_calories(entry.calories),
            format_grams(entry.protein_g.unwrap_or_default()),
            format_grams(entry.carbs_g.unwrap_or_default()),
            format_grams(entry.fat_g.unwrap_or_default()),
            or_dash(entry.meal_type.as_deref()),
        );
    }
    let total: f64 = entries.iter().map(|e| e.calories).sum();
    Status::field("Total", format_calories(total));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_args_into_input() {
        let args = EntryArgs {
            name: "Rice".to_string(),
            calories: 200.0,
            protein: Some(4.0),
            carbs: Some(45.0),
            fat: None,
            fiber: None,
            sugar: None,
            meal: Some(Meal::Dinner),
            serving: Some("1 cup".to_string()),
            log: None,
        };
        let input = args.into_input(9);
        assert_eq!(input.daily_log_id, 9);
        assert_eq!(input.meal_type, Some(MealType::Dinner));
        assert!(input.fat_g.is_none());
        assert!(input.micronutrients.is_none());
    }
}
