//! Terminal helpers for the Skinny Legend command line
//!
//! Provides shared CLI functionality:
//! - Status messages and aligned fields
//! - Nutrition-aware number formatting
//! - Spinners for slow requests

#![warn(missing_docs)]

pub mod output;
pub mod progress;
