//! Weight log endpoints

use crate::client::NutritionClient;
use crate::endpoints::common::MessageResponse;
use crate::error::ApiResult;
use crate::path::ApiPath;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const BASE: &str = "/api/weight-logs";

/// Weight logs API interface
#[derive(Debug, Clone)]
pub struct WeightLogsApi {
    client: NutritionClient,
    user_id: i64,
}

impl WeightLogsApi {
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

    /// Weigh-ins in date order, optionally limited to an inclusive range
    ///
    /// GET /api/weight-logs?user_id=<u>[&start_date=<s>&end_date=<e>]
    pub async fn list(&self, range: Option<(NaiveDate, NaiveDate)>) -> ApiResult<Vec<WeightLog>> {
        self.client.get(&self.list_path(range)).await
    }

    /// Record a weigh-in. A second entry on the same day replaces the first.
    ///
    /// POST /api/weight-logs
    pub async fn create(&self, log: &NewWeightLog) -> ApiResult<WeightLog> {
        self.client.post(BASE, log).await
    }

    /// DELETE /api/weight-logs/<id>
    pub async fn delete(&self, id: i64) -> ApiResult<MessageResponse> {
        let path = ApiPath::new(BASE).segment(id).build();
        self.client.delete(&path).await
    }

    /// Most recent weigh-in; a 404 when there is none
    ///
    /// GET /api/weight-logs/latest?user_id=<u>
    pub async fn latest(&self) -> ApiResult<WeightLog> {
        let path = ApiPath::new(BASE)
            .segment("latest")
            .query("user_id", self.user_id)
            .build();
        self.client.get(&path).await
    }

    fn list_path(&self, range: Option<(NaiveDate, NaiveDate)>) -> String {
        let path = ApiPath::new(BASE).query("user_id", self.user_id);
        match range {
            Some((start, end)) => path
                .date_query("start_date", start)
                .date_query("end_date", end)
                .build(),
            None => path.build(),
        }
    }
}

/// A recorded weigh-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLog {
    pub id: i64,
    pub user_id: Option<i64>,
    pub date: String,
    pub weight_kg: f64,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

/// Body for recording a weigh-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWeightLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Today on the backend when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub weight_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewWeightLog {
    /// Weigh-in for today
    #[must_use]
    pub fn new(weight_kg: f64) -> Self {
        Self {
            user_id: None,
            date: None,
            weight_kg,
            notes: None,
        }
    }

    /// Record it against a specific day
    #[must_use]
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(crate::path::iso(date));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn api() -> WeightLogsApi {
        NutritionClient::with_config(ClientConfig::default())
            .unwrap()
            .weight_logs()
    }

    #[test]
    fn test_list_path_without_range() {
        assert_eq!(api().list_path(None), "/api/weight-logs?user_id=1");
    }

    #[test]
    fn test_list_path_with_range() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(
            api().list_path(Some((start, end))),
            "/api/weight-logs?user_id=1&start_date=2024-01-01&end_date=2024-02-01"
        );
    }

    #[test]
    fn test_new_weight_log_body() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let body = serde_json::to_value(NewWeightLog::new(71.4).on(date)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"date": "2024-03-09", "weight_kg": 71.4})
        );
    }
}
