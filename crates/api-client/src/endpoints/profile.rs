//! User profile endpoints
//!
//! Saving a profile makes the backend derive BMR, TDEE, macro and water
//! targets, and reset micronutrient targets to the RDA for the user's age
//! and gender.

use crate::client::NutritionClient;
use crate::endpoints::common::{flag, MessageResponse};
use crate::error::ApiResult;
use crate::path::ApiPath;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const BASE: &str = "/api/profile";

/// Profile API interface
#[derive(Debug, Clone)]
pub struct ProfileApi {
    client: NutritionClient,
    user_id: i64,
}

impl ProfileApi {
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

    /// The user's profile. Fails with a 404 when none was created yet.
    ///
    /// GET /api/profile?user_id=<u>
    pub async fn get(&self) -> ApiResult<UserProfile> {
        let path = ApiPath::new(BASE).query("user_id", self.user_id).build();
        self.client.get(&path).await
    }

    /// Create the profile
    ///
    /// POST /api/profile
    pub async fn create(&self, profile: &ProfileInput) -> ApiResult<UserProfile> {
        self.client.post(BASE, profile).await
    }

    /// Update the profile
    ///
    /// PUT /api/profile
    pub async fn update(&self, profile: &ProfileInput) -> ApiResult<UserProfile> {
        self.client.put(BASE, profile).await
    }

    /// BMR, TDEE and calorie goal derived from the stored profile
    ///
    /// GET /api/profile/calculations?user_id=<u>
    pub async fn calculations(&self) -> ApiResult<ProfileCalculations> {
        let path = ApiPath::new(BASE)
            .segment("calculations")
            .query("user_id", self.user_id)
            .build();
        self.client.get(&path).await
    }

    /// Copy the current targets onto the log of `date`
    ///
    /// POST /api/profile/update-day-targets/<date>?user_id=<u>
    pub async fn update_day_targets(&self, date: NaiveDate) -> ApiResult<MessageResponse> {
        self.client.post_empty(&self.day_targets_path(date)).await
    }

    fn day_targets_path(&self, date: NaiveDate) -> String {
        ApiPath::new(BASE)
            .segment("update-day-targets")
            .date_segment(date)
            .query("user_id", self.user_id)
            .build()
    }
}

/// Stored profile with derived targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Option<i64>,
    pub user_id: i64,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: String,
    pub activity_level: String,
    pub goal: String,
    pub bmr: Option<f64>,
    pub tdee: Option<f64>,
    pub protein_target_g: Option<f64>,
    pub carbs_target_g: Option<f64>,
    pub fat_target_g: Option<f64>,
    pub water_target_ml: Option<f64>,
    #[serde(default, deserialize_with = "flag")]
    pub use_custom_targets: bool,
    pub custom_calorie_goal: Option<f64>,
    pub custom_protein_target_g: Option<f64>,
    pub custom_carbs_target_g: Option<f64>,
    pub custom_fat_target_g: Option<f64>,
    pub custom_water_target_ml: Option<f64>,
}

/// Body for creating or updating a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: String,
    pub activity_level: String,
    pub goal: String,
    #[serde(default)]
    pub use_custom_targets: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_calorie_goal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_protein_target_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_carbs_target_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fat_target_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_water_target_ml: Option<f64>,
}

/// Energy figures derived from the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCalculations {
    pub bmr: f64,
    pub tdee: f64,
    pub calorie_goal: f64,
    pub goal: String,
    pub activity_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn test_day_targets_path() {
        let api = NutritionClient::with_config(ClientConfig::default())
            .unwrap()
            .profile();
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            api.day_targets_path(date),
            "/api/profile/update-day-targets/2024-03-09?user_id=1"
        );
    }

    #[test]
    fn test_profile_input_from_json() {
        let json = r#"{
            "age": 34,
            "weight_kg": 72.5,
            "height_cm": 168,
            "gender": "female",
            "activity_level": "moderate",
            "goal": "lose"
        }"#;
        let input: ProfileInput = serde_json::from_str(json).unwrap();
        assert!(!input.use_custom_targets);

        let back = serde_json::to_value(&input).unwrap();
        assert!(back.get("custom_calorie_goal").is_none());
        assert_eq!(back["use_custom_targets"], false);
    }

    #[test]
    fn test_profile_deserialize() {
        let json = r#"{
            "id": 1, "user_id": 1, "age": 34, "weight_kg": 72.5, "height_cm": 168,
            "gender": "female", "activity_level": "moderate", "goal": "lose",
            "bmr": 1450.2, "tdee": 2247.8, "protein_target_g": 145,
            "carbs_target_g": 160, "fat_target_g": 58, "water_target_ml": 2900,
            "use_custom_targets": 0, "custom_calorie_goal": null
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.user_id, 1);
        assert!(!profile.use_custom_targets);
        assert_eq!(profile.tdee, Some(2247.8));
    }
}
