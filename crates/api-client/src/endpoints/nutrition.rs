//! Nutrition breakdown and micronutrient target endpoints

use crate::client::NutritionClient;
use crate::endpoints::common::MessageResponse;
use crate::error::ApiResult;
use crate::path::ApiPath;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BASE: &str = "/api/nutrition";

/// Nutrition API interface
#[derive(Debug, Clone)]
pub struct NutritionApi {
    client: NutritionClient,
    user_id: i64,
}

impl NutritionApi {
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

    /// Macro and micronutrient totals for one day, with the sources of each
    /// micronutrient
    ///
    /// GET /api/nutrition/<date>?user_id=<u>
    pub async fn breakdown(&self, date: NaiveDate) -> ApiResult<Value> {
        self.client.get(&self.breakdown_path(date)).await
    }

    /// Per-day totals over an inclusive date range
    ///
    /// GET /api/nutrition/history?user_id=<u>&start_date=<s>&end_date=<e>
    pub async fn history(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<Value> {
        self.client.get(&self.history_path(start, end)).await
    }

    /// Micronutrient targets of the user
    ///
    /// GET /api/nutrition/targets?user_id=<u>
    pub async fn targets(&self) -> ApiResult<Vec<NutritionTarget>> {
        let path = ApiPath::new(BASE)
            .segment("targets")
            .query("user_id", self.user_id)
            .build();
        self.client.get(&path).await
    }

    /// Create or replace the target for one nutrient
    ///
    /// POST /api/nutrition/targets
    pub async fn set_target(&self, target: &NewNutritionTarget) -> ApiResult<NutritionTarget> {
        let path = ApiPath::new(BASE).segment("targets").build();
        self.client.post(&path, target).await
    }

    /// Delete a target
    ///
    /// DELETE /api/nutrition/targets/<id>
    pub async fn delete_target(&self, id: i64) -> ApiResult<MessageResponse> {
        let path = ApiPath::new(BASE).segment("targets").segment(id).build();
        self.client.delete(&path).await
    }

    fn breakdown_path(&self, date: NaiveDate) -> String {
        ApiPath::new(BASE)
            .date_segment(date)
            .query("user_id", self.user_id)
            .build()
    }

    fn history_path(&self, start: NaiveDate, end: NaiveDate) -> String {
        ApiPath::new(BASE)
            .segment("history")
            .query("user_id", self.user_id)
            .date_query("start_date", start)
            .date_query("end_date", end)
            .build()
    }
}

/// Daily target for one micronutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTarget {
    pub id: i64,
    pub user_id: Option<i64>,
    /// Display name, e.g. "Vitamin C Mg"
    pub nutrient_name: String,
    pub target_amount: f64,
    /// `mg` or `mcg`
    pub unit: String,
}

/// Body for setting a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNutritionTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub nutrient_name: String,
    pub target_amount: f64,
    pub unit: String,
}
