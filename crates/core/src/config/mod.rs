//! Settings file loading and schema definitions
//!
//! Settings shared by the API client and the CLI.

mod loader;
mod schema;

pub use loader::Settings;
pub use schema::*;
