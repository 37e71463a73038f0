//! Supplement endpoints
//!
//! On create the backend estimates the supplement's micronutrients from its
//! name and dosage.

use crate::client::NutritionClient;
use crate::endpoints::common::MessageResponse;
use crate::error::ApiResult;
use crate::path::ApiPath;
use serde::{Deserialize, Serialize};

const BASE: &str = "/api/supplements";

/// Supplements API interface
#[derive(Debug, Clone)]
pub struct SupplementsApi {
    client: NutritionClient,
    user_id: i64,
}

impl SupplementsApi {
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

    /// GET /api/supplements/<daily_log_id>
    pub async fn list_by_log(&self, daily_log_id: i64) -> ApiResult<Vec<Supplement>> {
        self.client.get(&item_path(daily_log_id)).await
    }

    /// Supplements taken recently, for quick re-entry
    ///
    /// GET /api/supplements/recent?user_id=<u>
    pub async fn recent(&self) -> ApiResult<Vec<Supplement>> {
        self.client.get(&self.recent_path()).await
    }

    /// POST /api/supplements
    pub async fn create(&self, supplement: &SupplementInput) -> ApiResult<Supplement> {
        self.client.post(BASE, supplement).await
    }

    /// Update name, dosage, type, time and notes. Nutrient estimates are kept.
    ///
    /// PUT /api/supplements/<id>
    pub async fn update(&self, id: i64, supplement: &SupplementInput) -> ApiResult<Supplement> {
        self.client.put(&item_path(id), supplement).await
    }

    /// DELETE /api/supplements/<id>
    pub async fn delete(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&item_path(id)).await
    }

    fn recent_path(&self) -> String {
        ApiPath::new(BASE)
            .segment("recent")
            .query("user_id", self.user_id)
            .build()
    }
}

fn item_path(id: i64) -> String {
    ApiPath::new(BASE).segment(id).build()
}

/// A logged supplement with its estimated nutrients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplement {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub daily_log_id: i64,
    pub name: String,
    pub dosage: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub time_taken: Option<String>,
    pub notes: Option<String>,
    pub vitamin_a_mcg: Option<f64>,
    pub vitamin_c_mg: Option<f64>,
    pub vitamin_d_mcg: Option<f64>,
    pub calcium_mg: Option<f64>,
    pub iron_mg: Option<f64>,
    pub potassium_mg: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub created_at: Option<String>,
}

/// Body for creating or updating a supplement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementInput {
    pub daily_log_id: i64,
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    /// `supplement`, `vitamin`, `mineral`, ...
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub time_taken: String,
    #[serde(default)]
    pub notes: String,
}

fn default_kind() -> String {
    "supplement".to_string()
}

impl SupplementInput {
    /// Supplement with a dosage and the default type
    pub fn new(daily_log_id: i64, name: impl Into<String>, dosage: impl Into<String>) -> Self {
        Self {
            daily_log_id,
            name: name.into(),
            dosage: dosage.into(),
            kind: default_kind(),
            time_taken: String::new(),
            notes: String::new(),
        }
    }
}
