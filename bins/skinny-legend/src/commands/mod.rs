//! CLI command implementations

pub mod ai;
pub mod barcode;
pub mod config;
pub mod entries;
pub mod exercises;
pub mod health;
pub mod images;
pub mod logs;
pub mod nutrition;
pub mod profile;
pub mod recent_foods;
pub mod supplements;
pub mod weight;
pub mod workouts;

use anyhow::{Context as _, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a JSON request body from disk
pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// `value` or a dash for missing values
pub(crate) fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
