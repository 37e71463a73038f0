//! Barcode lookup command

use crate::context::Context;
use anyhow::Result;
use clap::Args;
use skinny_legend_api_client::endpoints::barcode::BarcodeProduct;
use skinny_legend_cli::output::{format_calories, format_grams, Status};

#[derive(Args)]
pub struct BarcodeArgs {
    /// EAN/UPC code
    pub code: String,

    /// Also log the product on the selected day
    #[arg(long)]
    pub add: bool,

    /// Daily log id to add to
    #[arg(long, requires = "add")]
    pub log: Option<i64>,
}

pub async fn run(ctx: &Context, args: BarcodeArgs) -> Result<()> {
    let product = ctx.client.barcode().lookup(&args.code).await?;

    if !args.add {
        return ctx.emit(&product, print_product);
    }

    let log_id = ctx.log_id(args.log).await?;
    let entry = ctx
        .client
        .food_entries()
        .create(&product.to_entry(log_id))
        .await?;

    ctx.emit(&entry, |e| {
        print_product(&product);
        println!();
        Status::success(&format!("Logged {} as entry #{}", e.name, e.id));
    })
}

fn print_product(product: &BarcodeProduct) {
    let title = if product.brand.is_empty() {
        product.name.clone()
    } else {
        format!("{} ({})", product.name, product.brand)
    };
    Status::header(&title);
    Status::field("Barcode", &product.barcode);
    if let Some(serving) = &product.serving_size {
        Status::field("Serving", serving);
    }
    Status::field("Energy /100g", format_calories(product.calories));
    Status::field("Protein", format_grams(product.protein_g));
    Status::field("Carbs", format_grams(product.carbs_g));
    Status::field("Fat", format_grams(product.fat_g));
    Status::field("Fiber", format_grams(product.fiber_g));
    Status::field("Sugar", format_grams(product.sugar_g));
    Status::field("Sodium", format!("{} mg", product.sodium_mg));
}
