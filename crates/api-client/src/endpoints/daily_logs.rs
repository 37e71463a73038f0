//! Daily log endpoints
//!
//! Maps to `/api/daily-logs`. Fetching a log by date creates it on the
//! backend when missing, seeded with the user's current targets.

use crate::client::NutritionClient;
use crate::endpoints::common::MessageResponse;
use crate::error::ApiResult;
use crate::path::ApiPath;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skinny_legend_core::selection::SelectedDate;

const BASE: &str = "/api/daily-logs";

/// Daily logs API interface
#[derive(Debug, Clone)]
pub struct DailyLogsApi {
    client: NutritionClient,
    user_id: i64,
}

impl DailyLogsApi {
    pub(crate) fn new(client: NutritionClient) -> Self {
        let user_id = client.user_id();
        Self { client, user_id }
    }

    /// Scope requests to another user
    #[must_use]
    pub fn for_user(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// All logs of the user, newest first
    ///
    /// GET /api/daily-logs?user_id=<u>
    pub async fn list(&self) -> ApiResult<Vec<DailyLog>> {
        self.client.get(&self.list_path()).await
    }

    /// Log for a given day, created on demand
    ///
    /// GET /api/daily-logs/<date>?user_id=<u>
    pub async fn get_by_date(&self, date: NaiveDate) -> ApiResult<DailyLog> {
        self.client.get(&self.by_date_path(date)).await
    }

    /// Log for whatever day is currently selected
    pub async fn get_selected(&self, selected: &SelectedDate) -> ApiResult<DailyLog> {
        self.get_by_date(selected.get()).await
    }

    /// Create a log
    ///
    /// POST /api/daily-logs
    pub async fn create(&self, log: &NewDailyLog) -> ApiResult<DailyLog> {
        self.client.post(BASE, log).await
    }

    /// Update water, exercise minutes and notes
    ///
    /// PUT /api/daily-logs/<id>
    pub async fn update(&self, id: i64, update: &DailyLogUpdate) -> ApiResult<DailyLog> {
        self.client.put(&item_path(id), update).await
    }

    /// Delete a log
    ///
    /// DELETE /api/daily-logs/<id>
    pub async fn delete(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&item_path(id)).await
    }

    fn list_path(&self) -> String {
        ApiPath::new(BASE).query("user_id", self.user_id).build()
    }

    fn by_date_path(&self, date: NaiveDate) -> String {
        ApiPath::new(BASE)
            .date_segment(date)
            .query("user_id", self.user_id)
            .build()
    }
}

fn item_path(id: i64) -> String {
    ApiPath::new(BASE).segment(id).build()
}

/// A day's log with targets and running totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub id: i64,
    pub user_id: Option<i64>,
    pub date: String,
    pub total_calories: Option<f64>,
    pub total_water_ml: Option<f64>,
    pub exercise_minutes: Option<f64>,
    pub notes: Option<String>,
    pub calorie_goal: Option<f64>,
    pub protein_target_g: Option<f64>,
    pub carbs_target_g: Option<f64>,
    pub fat_target_g: Option<f64>,
    pub created_at: Option<String>,
}

impl DailyLog {
    /// Calories left before reaching the goal; negative when over
    #[must_use]
    pub fn calories_remaining(&self) -> Option<f64> {
        Some(self.calorie_goal? - self.total_calories.unwrap_or(0.0))
    }
}

/// Body for creating a log. Targets are filled in by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewDailyLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// `YYYY-MM-DD`; today on the backend when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_water_ml: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_minutes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for updating a log. The backend overwrites all three fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyLogUpdate {
    pub total_water_ml: Option<f64>,
    pub exercise_minutes: Option<f64>,
    pub notes: Option<String>,
}
