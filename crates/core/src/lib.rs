//! Core utilities for Skinny Legend tools
//!
//! This crate provides functionality shared by the API client and the CLI:
//!
//! - **Error handling**: errors with recovery suggestions
//! - **Configuration**: optional TOML settings file with defaults
//! - **Selected date**: the shared, observable "day being viewed" cell
//!
//! # Example
//!
//! ```rust,no_run
//! use skinny_legend_core::{config::Settings, selection::SelectedDate};
//!
//! let settings = Settings::load(None).expect("invalid settings file");
//! let selected = SelectedDate::today();
//!
//! println!("API: {:?}, day: {}", settings.api.base_url, selected.iso());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod selection;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{ApiSettings, LogFormat, LoggingSettings, Settings};
    pub use crate::error::{Error, Result};
    pub use crate::selection::SelectedDate;
}
