//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one group of backend routes.
//! None of them holds logic beyond building the path and query string; all
//! requests go through [`NutritionClient::request`](crate::NutritionClient::request).
//!
//! ## Mapping to the backend
//!
//! | Module | Route prefix | Description |
//! |--------|--------------|-------------|
//! | `daily_logs` | `/api/daily-logs` | One log per user and day, with targets and totals |
//! | `food_entries` | `/api/food-entries` | Foods eaten, attached to a daily log |
//! | `barcode` | `/api/barcode` | Product lookup by barcode |
//! | `images` | `/api/images` | Meal photo upload and gallery |
//! | `ai` | `/api/ai`, `/api/chat` | Photo analysis, food chat, goal calculation |
//! | `nutrition` | `/api/nutrition` | Daily breakdown, history, custom targets |
//! | `profile` | `/api/profile` | Body metrics and derived targets |
//! | `weight_logs` | `/api/weight-logs` | Weigh-ins |
//! | `recent_foods` | `/api/food-entries/recent` | Recently eaten unique foods |
//! | `exercises` | `/api/exercises` | Cardio/activity entries |
//! | `supplements` | `/api/supplements` | Supplements taken |
//! | `workouts` | `/api/workouts` | Strength sessions, exercises, sets, analytics |
//! | `health` | `/health` | Liveness check |

pub mod ai;
pub mod barcode;
pub mod common;
pub mod daily_logs;
pub mod exercises;
pub mod food_entries;
pub mod health;
pub mod images;
pub mod nutrition;
pub mod profile;
pub mod recent_foods;
pub mod supplements;
pub mod weight_logs;
pub mod workouts;

pub use ai::AiApi;
pub use barcode::BarcodeApi;
pub use common::MessageResponse;
pub use daily_logs::DailyLogsApi;
pub use exercises::ExercisesApi;
pub use food_entries::FoodEntriesApi;
pub use health::HealthApi;
pub use images::ImagesApi;
pub use nutrition::NutritionApi;
pub use profile::ProfileApi;
pub use recent_foods::RecentFoodsApi;
pub use supplements::SupplementsApi;
pub use weight_logs::WeightLogsApi;
pub use workouts::WorkoutsApi;
