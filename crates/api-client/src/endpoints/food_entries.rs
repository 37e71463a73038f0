//! Food entry endpoints
//!
//! Maps to `/api/food-entries`. Creating, updating or deleting an entry
//! makes the backend recompute the parent log's calorie total.

use crate::client::NutritionClient;
use crate::endpoints::common::MessageResponse;
use crate::error::ApiResult;
use crate::path::ApiPath;
use serde::{Deserialize, Serialize};

const BASE: &str = "/api/food-entries";

/// Food entries API interface
#[derive(Debug, Clone)]
pub struct FoodEntriesApi {
    client: NutritionClient,
}

impl FoodEntriesApi {
    pub(crate) fn new(client: NutritionClient) -> Self {
        Self { client }
    }

    /// Entries of one daily log, in the order they were added
    ///
    /// GET /api/food-entries/<daily_log_id>
    pub async fn list_by_log(&self, daily_log_id: i64) -> ApiResult<Vec<FoodEntry>> {
        self.client.get(&item_path(daily_log_id)).await
    }

    /// Add an entry. Micronutrients are estimated server-side when omitted.
    ///
    /// POST /api/food-entries
    pub async fn create(&self, entry: &FoodEntryInput) -> ApiResult<FoodEntry> {
        self.client.post(BASE, entry).await
    }

    /// Replace an entry's values
    ///
    /// PUT /api/food-entries/<id>
    pub async fn update(&self, id: i64, entry: &FoodEntryInput) -> ApiResult<FoodEntry> {
        self.client.put(&item_path(id), entry).await
    }

    /// Delete an entry
    ///
    /// DELETE /api/food-entries/<id>
    pub async fn delete(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&item_path(id)).await
    }
}

fn item_path(id: i64) -> String {
    ApiPath::new(BASE).segment(id).build()
}

/// Meal slot an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// A logged food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: i64,
    pub daily_log_id: i64,
    pub name: String,
    pub calories: f64,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub sugar_g: Option<f64>,
    pub meal_type: Option<String>,
    pub image_path: Option<String>,
    pub barcode: Option<String>,
    pub serving_size: Option<String>,
    pub created_at: Option<String>,
}

/// Body for creating or updating an entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodEntryInput {
    pub daily_log_id: i64,
    pub name: String,
    pub calories: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    /// Known micronutrients; skips the backend's AI estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub micronutrients: Option<Micronutrients>,
}

impl FoodEntryInput {
    /// Entry with the required fields only
    pub fn new(daily_log_id: i64, name: impl Into<String>, calories: f64) -> Self {
        Self {
            daily_log_id,
            name: name.into(),
            calories,
            ..Self::default()
        }
    }

    /// Set protein, carbs and fat in grams
    #[must_use]
    pub fn with_macros(mut self, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        self.protein_g = Some(protein_g);
        self.carbs_g = Some(carbs_g);
        self.fat_g = Some(fat_g);
        self
    }

    /// Set the meal slot
    #[must_use]
    pub fn with_meal(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    /// Set the serving description, e.g. "1 cup"
    #[must_use]
    pub fn with_serving(mut self, serving_size: impl Into<String>) -> Self {
        self.serving_size = Some(serving_size.into());
        self
    }
}

/// Vitamins and minerals per entry; absent values count as zero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Micronutrients {
    pub vitamin_a_mcg: f64,
    pub vitamin_c_mg: f64,
    pub vitamin_d_mcg: f64,
    pub vitamin_e_mg: f64,
    pub vitamin_k_mcg: f64,
    pub vitamin_b6_mg: f64,
    pub vitamin_b12_mcg: f64,
    pub folate_mcg: f64,
    pub calcium_mg: f64,
    pub iron_mg: f64,
    pub magnesium_mg: f64,
    pub potassium_mg: f64,
    pub zinc_mg: f64,
    pub sodium_mg: f64,
}
