//! HTTP client for the Skinny Legend nutrition tracking backend
//!
//! Every call goes through one gateway on [`NutritionClient`]: it joins the
//! configured base URL with an endpoint path, sends JSON, and turns
//! non-success responses into [`ApiError::Api`] carrying the backend's
//! `error` message. Endpoint groups under [`endpoints`] only build paths and
//! bodies. Photo uploads use a separate multipart path.
//!
//! # Example
//!
//! ```rust,no_run
//! use skinny_legend_api_client::{ClientConfig, NutritionClient};
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NutritionClient::with_config(
//!         ClientConfig::default().with_base_url("http://localhost:8000"),
//!     )?;
//!
//!     let health = client.health().check().await?;
//!     println!("Backend: {}", health.status);
//!
//!     let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
//!     let log = client.daily_logs().get_by_date(date).await?;
//!     println!("{} kcal eaten", log.total_calories.unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod path;
pub mod upload;

pub use client::{NutritionClient, RequestOptions};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use upload::UploadFile;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::{NutritionClient, RequestOptions};
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{
        AiApi, BarcodeApi, DailyLogsApi, ExercisesApi, FoodEntriesApi, HealthApi, ImagesApi,
        MessageResponse, NutritionApi, ProfileApi, RecentFoodsApi, SupplementsApi, WeightLogsApi,
        WorkoutsApi,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::path::ApiPath;
    pub use crate::upload::UploadFile;
}
