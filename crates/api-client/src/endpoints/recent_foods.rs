//! Recently used foods, for quick re-entry

use crate::client::NutritionClient;
use crate::endpoints::food_entries::FoodEntryInput;
use crate::error::ApiResult;
use crate::path::ApiPath;
use serde::{Deserialize, Serialize};

/// Number of foods returned when no limit is given
pub const DEFAULT_LIMIT: u32 = 20;

/// Recent foods API interface
#[derive(Debug, Clone)]
pub struct RecentFoodsApi {
    client: NutritionClient,
    user_id: i64,
}

impl RecentFoodsApi {
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

    /// Distinct foods by last use, newest first
    ///
    /// GET /api/food-entries/recent?user_id=<u>&limit=<n>
    pub async fn list(&self, limit: Option<u32>) -> ApiResult<Vec<RecentFood>> {
        self.client.get(&self.list_path(limit)).await
    }

    fn list_path(&self, limit: Option<u32>) -> String {
        ApiPath::new("/api/food-entries/recent")
            .query("user_id", self.user_id)
            .query("limit", limit.unwrap_or(DEFAULT_LIMIT))
            .build()
    }
}

/// A food the user logged before
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentFood {
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub sugar_g: Option<f64>,
    pub serving_size: Option<String>,
    pub last_used: Option<String>,
}

impl RecentFood {
    /// Log this food again on another day
    #[must_use]
    pub fn to_entry(&self, daily_log_id: i64) -> FoodEntryInput {
        let mut entry = FoodEntryInput::new(daily_log_id, self.name.clone(), self.calories)
            .with_macros(
                self.protein_g.unwrap_or_default(),
                self.carbs_g.unwrap_or_default(),
                self.fat_g.unwrap_or_default(),
            );
        entry.fiber_g = self.fiber_g;
        entry.sugar_g = self.sugar_g;
        entry.serving_size = self.serving_size.clone();
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn api() -> RecentFoodsApi {
        NutritionClient::with_config(ClientConfig::default())
            .unwrap()
            .recent_foods()
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(
            api().list_path(None),
            "/api/food-entries/recent?user_id=1&limit=20"
        );
    }

    #[test]
    fn test_explicit_limit() {
        assert_eq!(
            api().for_user(3).list_path(Some(5)),
            "/api/food-entries/recent?user_id=3&limit=5"
        );
    }

    #[test]
    fn test_to_entry() {
        let food = RecentFood {
            name: "Greek yogurt".to_string(),
            calories: 130.0,
            protein_g: Some(17.0),
            carbs_g: Some(6.0),
            fat_g: None,
            fiber_g: None,
            sugar_g: Some(6.0),
            serving_size: Some("170 g".to_string()),
            last_used: None,
        };
        let entry = food.to_entry(4);
        assert_eq!(entry.daily_log_id, 4);
        assert_eq!(entry.fat_g, Some(0.0));
        assert_eq!(entry.serving_size.as_deref(), Some("170 g"));
    }
}
