//! Meal photo commands

use crate::context::Context;
use anyhow::{bail, Result};
use clap::Subcommand;
use serde_json::json;
use skinny_legend_api_client::endpoints::images::ImageGroup;
use skinny_legend_api_client::UploadFile;
use skinny_legend_cli::output::{format_count, format_size, Status};
use skinny_legend_cli::progress;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ImagesCommand {
    /// Upload one or more photos of a meal
    Upload {
        /// Image files; the first one becomes the primary image
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long)]
        description: Option<String>,
    },

    /// List uploaded images, grouped by meal
    List,

    /// Delete an image (a primary image takes its group with it)
    Delete {
        /// Image id
        id: i64,
    },

    /// Flag an image as analyzed
    MarkAnalyzed {
        /// Image id
        id: i64,
    },

    /// Print the direct URL of an image
    Url {
        /// Image id
        id: i64,
    },
}

pub async fn run(ctx: &Context, cmd: ImagesCommand) -> Result<()> {
    let api = ctx.client.images();

    match cmd {
        ImagesCommand::Upload { files, description } => {
            if files.is_empty() {
                bail!("No image files given");
            }

            let mut uploads = Vec::with_capacity(files.len());
            for path in &files {
                uploads.push(UploadFile::from_path(path).await?);
            }
            let total: usize = uploads.iter().map(UploadFile::len).sum();

            let pb = ctx.spinner(&format!(
                "Uploading {} ({})",
                format_count(uploads.len(), "image", "images"),
                format_size(total as u64)
            ));
            let result = if uploads.len() == 1 {
                let file = uploads.remove(0);
                api.upload(file, description.as_deref()).await
            } else {
                api.upload_multiple(uploads, description.as_deref()).await
            };

            let response = match result {
                Ok(response) => {
                    progress::finish_success(&pb, "Uploaded");
                    response
                }
                Err(e) => {
                    progress::finish_error(&pb, "Upload failed");
                    return Err(e.into());
                }
            };

            ctx.emit(&response, |r| {
                Status::success(&format!(
                    "Uploaded {} as group {}",
                    format_count(r.total_images, "image", "images"),
                    r.group_id
                ));
                Status::field("Primary image", r.primary_image.id);
                Status::field("Path", &r.primary_image.image_path);
            })
        }

        ImagesCommand::List => {
            let groups = api.list().await?;
            ctx.emit(&groups, |groups| print_groups(groups))
        }

        ImagesCommand::Delete { id } => {
            let response = api.delete(id).await?;
            ctx.emit(&response, |r| Status::success(&r.message))
        }

        ImagesCommand::MarkAnalyzed { id } => {
            let image = api.mark_analyzed(id).await?;
            ctx.emit(&image, |image| {
                Status::success(&format!("Image #{} marked as analyzed", image.id));
            })
        }

        ImagesCommand::Url { id } => {
            let url = api.image_url(id);
            ctx.emit(&json!({ "id": id, "url": url }), |_| println!("{url}"))
        }
    }
}

fn print_groups(groups: &[ImageGroup]) {
    Status::header(&format_count(groups.len(), "meal photo", "meal photos"));
    for group in groups {
        let image = &group.primary;
        let analyzed = if image.analyzed { "analyzed" } else { "new" };
        println!(
            "  #{:<5} {:<9} {} photo(s)  {}",
            image.id,
            analyzed,
            group.image_count.max(1),
            image.description.as_deref().unwrap_or_default()
        );
        for extra in group.group_images.iter().filter(|i| i.id != image.id) {
            println!("         └─ #{} {}", extra.id, extra.image_path);
        }
    }
}
