//! AI analysis endpoints
//!
//! Photo analysis, the food-logging chat assistant and goal calculation.
//! Responses are produced by a language model and returned as raw JSON.

use crate::client::NutritionClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// AI API interface
#[derive(Debug, Clone)]
pub struct AiApi {
    client: NutritionClient,
}

impl AiApi {
    pub(crate) fn new(client: NutritionClient) -> Self {
        Self { client }
    }

    /// Estimate the foods and macros in an uploaded photo. Earlier results
    /// are reused unless `force_reanalyze` is set.
    ///
    /// POST /api/ai/analyze-image
    pub async fn analyze_image(
        &self,
        image_id: i64,
        notes: Option<&str>,
        force_reanalyze: bool,
    ) -> ApiResult<Value> {
        let body = AnalyzeImageRequest {
            image_id,
            notes: notes.unwrap_or_default().to_string(),
            force_reanalyze,
        };
        self.client.post("/api/ai/analyze-image", &body).await
    }

    /// Ask the assistant about food to log
    ///
    /// POST /api/chat
    pub async fn chat(&self, message: &str, history: &[ChatMessage]) -> ApiResult<Value> {
        let body = ChatRequest {
            message: message.to_string(),
            history: history.to_vec(),
        };
        self.client.post("/api/chat", &body).await
    }

    /// Compute BMR, TDEE and macro targets for the given body metrics
    ///
    /// POST /api/ai/calculate-goals
    pub async fn calculate_goals(&self, inputs: &GoalInputs) -> ApiResult<Value> {
        self.client.post("/api/ai/calculate-goals", inputs).await
    }
}

/// Body of an image analysis request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeImageRequest {
    pub image_id: i64,
    pub notes: String,
    pub force_reanalyze: bool,
}

/// Body of a chat request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<ChatMessage>,
}

/// One turn of a chat conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `user` or `assistant`
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// A message the user sent
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// A reply from the assistant
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Body metrics used for target calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalInputs {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    /// `male` or `female`
    pub gender: String,
    /// e.g. `sedentary`, `light`, `moderate`, `active`, `very_active`
    pub activity_level: String,
    /// e.g. `lose`, `maintain`, `gain`
    pub goal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_shape() {
        let body = AnalyzeImageRequest {
            image_id: 12,
            notes: String::new(),
            force_reanalyze: false,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"image_id": 12, "notes": "", "force_reanalyze": false})
        );
    }

    #[test]
    fn test_chat_request_shape() {
        let body = ChatRequest {
            message: "I had two eggs".to_string(),
            history: vec![
                ChatMessage::user("hi"),
                ChatMessage::assistant("What did you eat?"),
            ],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "I had two eggs");
        assert_eq!(json["history"][1]["role"], "assistant");
    }
}
