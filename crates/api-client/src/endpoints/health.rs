//! Health check endpoint

use crate::client::NutritionClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Health check API interface
#[derive(Debug, Clone)]
pub struct HealthApi {
    client: NutritionClient,
}

impl HealthApi {
    /// Create a new health API interface
    pub(crate) fn new(client: NutritionClient) -> Self {
        Self { client }
    }

    /// Check that the backend is up
    ///
    /// GET /health
    pub async fn check(&self) -> ApiResult<HealthResponse> {
        self.client.get("/health").await
    }

    /// Check health with timing information
    pub async fn check_timed(&self) -> ApiResult<(HealthResponse, Duration)> {
        let start = Instant::now();
        let response = self.check().await?;
        Ok((response, start.elapsed()))
    }
}

/// Health check response from the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status, `healthy` when up
    pub status: String,
    /// Human readable detail
    #[serde(default)]
    pub message: String,
}

impl HealthResponse {
    /// Whether the backend reported itself healthy
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}
