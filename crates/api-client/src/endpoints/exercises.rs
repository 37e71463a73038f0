//! Cardio and general exercise endpoints
//!
//! Changes here make the backend recompute the log's exercise minutes.

use crate::client::NutritionClient;
use crate::endpoints::common::MessageResponse;
use crate::error::ApiResult;
use crate::path::ApiPath;
use serde::{Deserialize, Serialize};

const BASE: &str = "/api/exercises";

/// Exercises API interface
#[derive(Debug, Clone)]
pub struct ExercisesApi {
    client: NutritionClient,
}

impl ExercisesApi {
    pub(crate) fn new(client: NutritionClient) -> Self {
        Self { client }
    }

    /// GET /api/exercises/<daily_log_id>
    pub async fn list_by_log(&self, daily_log_id: i64) -> ApiResult<Vec<Exercise>> {
        self.client.get(&item_path(daily_log_id)).await
    }

    /// POST /api/exercises
    pub async fn create(&self, exercise: &ExerciseInput) -> ApiResult<Exercise> {
        self.client.post(BASE, exercise).await
    }

    /// PUT /api/exercises/<id>
    pub async fn update(&self, id: i64, exercise: &ExerciseInput) -> ApiResult<Exercise> {
        self.client.put(&item_path(id), exercise).await
    }

    /// DELETE /api/exercises/<id>
    pub async fn delete(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&item_path(id)).await
    }
}

fn item_path(id: i64) -> String {
    ApiPath::new(BASE).segment(id).build()
}

/// A logged exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub daily_log_id: i64,
    pub exercise_type: String,
    pub duration_minutes: f64,
    pub calories_burned: Option<f64>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

/// Body for creating or updating an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInput {
    pub daily_log_id: i64,
    pub exercise_type: String,
    pub duration_minutes: f64,
    #[serde(default)]
    pub calories_burned: f64,
    #[serde(default)]
    pub notes: String,
}

impl ExerciseInput {
    /// Exercise with no calorie estimate or notes
    pub fn new(daily_log_id: i64, exercise_type: impl Into<String>, duration_minutes: f64) -> Self {
        Self {
            daily_log_id,
            exercise_type: exercise_type.into(),
            duration_minutes,
            calories_burned: 0.0,
            notes: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path() {
        assert_eq!(item_path(3), "/api/exercises/3");
    }

    #[test]
    fn test_input_body() {
        let body = serde_json::to_value(ExerciseInput::new(2, "Running", 30.0)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "daily_log_id": 2,
                "exercise_type": "Running",
                "duration_minutes": 30.0,
                "calories_burned": 0.0,
                "notes": ""
            })
        );
    }
}
