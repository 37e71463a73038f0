//! Recently logged foods

use crate::context::Context;
use anyhow::Result;
use skinny_legend_cli::output::{format_calories, format_count, Status};

pub async fn run(ctx: &Context, limit: Option<u32>) -> Result<()> {
    let foods = ctx.client.recent_foods().list(limit).await?;

    ctx.emit(&foods, |foods| {
        Status::header(&format_count(foods.len(), "recent food", "recent foods"));
        for food in foods {
            println!(
                "  {:<28} {:>10}  {:<12} {}",
                food.name,
                format_calories(food.calories),
                food.serving_size.as_deref().unwrap_or_default(),
                food.last_used.as_deref().unwrap_or_default()
            );
        }
    })
}
