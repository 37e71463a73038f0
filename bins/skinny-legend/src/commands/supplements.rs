//! Supplement commands

use crate::commands::or_dash;
use crate::context::Context;
use anyhow::Result;
use clap::{Args, Subcommand};
use skinny_legend_api_client::endpoints::supplements::{Supplement, SupplementInput};
use skinny_legend_cli::output::{format_count, Status};

#[derive(Subcommand)]
pub enum SupplementsCommand {
    /// List the supplements of a log (the selected day by default)
    List {
        #[arg(long)]
        log: Option<i64>,
    },

    /// Supplements taken recently, for quick re-entry
    Recent,

    /// Record a supplement
    Add(SupplementArgs),

    /// Replace a supplement's values
    Update {
        /// Supplement id
        id: i64,
        #[command(flatten)]
        supplement: SupplementArgs,
    },

    /// Delete a supplement
    Delete {
        /// Supplement id
        id: i64,
    },
}

#[derive(Args)]
pub struct SupplementArgs {
    pub name: String,
    /// e.g. "1000 IU"
    #[arg(long, default_value = "")]
    pub dosage: String,
    /// supplement, vitamin, mineral, ...
    #[arg(short, long, default_value = "supplement")]
    pub kind: String,
    /// Time of day taken, e.g. 08:00
    #[arg(short, long)]
    pub time: Option<String>,
    #[arg(short, long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub log: Option<i64>,
}

impl SupplementArgs {
    fn into_input(self, daily_log_id: i64) -> SupplementInput {
        let mut input = SupplementInput::new(daily_log_id, self.name, self.dosage);
        input.kind = self.kind;
        input.time_taken = self.time.unwrap_or_default();
        input.notes = self.notes.unwrap_or_default();
        input
    }
}

pub async fn run(ctx: &Context, cmd: SupplementsCommand) -> Result<()> {
    let api = ctx.client.supplements();

    match cmd {
        SupplementsCommand::List { log } => {
            let log_id = ctx.log_id(log).await?;
            let supplements = api.list_by_log(log_id).await?;
            ctx.emit(&supplements, |s| print_supplements(s))
        }

        SupplementsCommand::Recent => {
            let supplements = api.recent().await?;
            ctx.emit(&supplements, |s| print_supplements(s))
        }

        SupplementsCommand::Add(args) => {
            let log_id = ctx.log_id(args.log).await?;
            let supplement = api.create(&args.into_input(log_id)).await?;
            ctx.emit(&supplement, |s| {
                Status::success(&format!("Recorded {} (#{})", s.name, s.id));
            })
        }

        SupplementsCommand::Update { id, supplement } => {
            let log_id = ctx.log_id(supplement.log).await?;
            let supplement = api.update(id, &supplement.into_input(log_id)).await?;
            ctx.emit(&supplement, |s| {
                Status::success(&format!("Updated supplement #{}", s.id));
            })
        }

        SupplementsCommand::Delete { id } => {
            let response = api.delete(id).await?;
            ctx.emit(&response, |r| Status::success(&r.message))
        }
    }
}

fn print_supplements(supplements: &[Supplement]) {
    Status::header(&format_count(supplements.len(), "supplement", "supplements"));
    for s in supplements {
        println!(
            "  #{:<5} {:<24} {:<12} {:<11} {}",
            s.id,
            s.name,
            or_dash(s.dosage.as_deref().filter(|d| !d.is_empty())),
            or_dash(s.kind.as_deref()),
            s.time_taken.as_deref().unwrap_or_default()
        );
    }
}
