//! Request gateway shared by every endpoint group

use crate::config::ClientConfig;
use crate::endpoints::{
    AiApi, BarcodeApi, DailyLogsApi, ExercisesApi, FoodEntriesApi, HealthApi, ImagesApi,
    NutritionApi, ProfileApi, RecentFoodsApi, SupplementsApi, WeightLogsApi, WorkoutsApi,
};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument, warn, Span};
use uuid::Uuid;

const USER_AGENT_VALUE: &str = concat!("skinny-legend-api-client/", env!("CARGO_PKG_VERSION"));

const JSON_CONTENT_TYPE: &str = "application/json";

/// Options for a single gateway call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// HTTP method
    pub method: Method,
    /// Extra headers; these win over the default `Content-Type`
    pub headers: Vec<(String, String)>,
    /// Pre-serialized request body
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    /// Options for the given method, no headers, no body
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a pre-serialized body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `body` as JSON
    pub fn with_json<B: Serialize + ?Sized>(self, body: &B) -> ApiResult<Self> {
        Ok(self.with_body(serde_json::to_string(body)?))
    }
}

/// Shape of a failure body. Every field is optional: the backend may send
/// anything, or nothing parseable at all.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// Skinny Legend API client
///
/// Cheap to clone; clones share one connection pool and configuration.
#[derive(Debug, Clone)]
pub struct NutritionClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl NutritionClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        // No default Content-Type here: multipart uploads must let the
        // transport set their own boundary header.
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = Client::builder().default_headers(default_headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder.build()?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// User id applied when an endpoint group is not scoped explicitly
    #[must_use]
    pub fn user_id(&self) -> i64 {
        self.config.user_id
    }

    /// Full URL for an endpoint path
    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if endpoint.starts_with('/') {
            format!("{base}{endpoint}")
        } else {
            format!("{base}/{endpoint}")
        }
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access daily log endpoints
    #[must_use]
    pub fn daily_logs(&self) -> DailyLogsApi {
        DailyLogsApi::new(self.clone())
    }

    /// Access food entry endpoints
    #[must_use]
    pub fn food_entries(&self) -> FoodEntriesApi {
        FoodEntriesApi::new(self.clone())
    }

    /// Access barcode lookup
    #[must_use]
    pub fn barcode(&self) -> BarcodeApi {
        BarcodeApi::new(self.clone())
    }

    /// Access image upload and gallery endpoints
    #[must_use]
    pub fn images(&self) -> ImagesApi {
        ImagesApi::new(self.clone())
    }

    /// Access AI analysis endpoints
    #[must_use]
    pub fn ai(&self) -> AiApi {
        AiApi::new(self.clone())
    }

    /// Access nutrition breakdown and target endpoints
    #[must_use]
    pub fn nutrition(&self) -> NutritionApi {
        NutritionApi::new(self.clone())
    }

    /// Access user profile endpoints
    #[must_use]
    pub fn profile(&self) -> ProfileApi {
        ProfileApi::new(self.clone())
    }

    /// Access weight log endpoints
    #[must_use]
    pub fn weight_logs(&self) -> WeightLogsApi {
        WeightLogsApi::new(self.clone())
    }

    /// Access recently used foods
    #[must_use]
    pub fn recent_foods(&self) -> RecentFoodsApi {
        RecentFoodsApi::new(self.clone())
    }

    /// Access cardio/activity exercise endpoints
    #[must_use]
    pub fn exercises(&self) -> ExercisesApi {
        ExercisesApi::new(self.clone())
    }

    /// Access supplement endpoints
    #[must_use]
    pub fn supplements(&self) -> SupplementsApi {
        SupplementsApi::new(self.clone())
    }

    /// Access strength workout endpoints
    #[must_use]
    pub fn workouts(&self) -> WorkoutsApi {
        WorkoutsApi::new(self.clone())
    }

    /// Access the backend health check
    #[must_use]
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Gateway
    // -------------------------------------------------------------------------

    /// Perform a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(path, RequestOptions::new(Method::GET)).await
    }

    /// Perform a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(path, RequestOptions::new(Method::POST).with_json(body)?)
            .await
    }

    /// Perform a POST request without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(path, RequestOptions::new(Method::POST)).await
    }

    /// Perform a PUT request with a JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(path, RequestOptions::new(Method::PUT).with_json(body)?)
            .await
    }

    /// Perform a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(path, RequestOptions::new(Method::DELETE)).await
    }

    /// Issue a request and decode the JSON response.
    ///
    /// `Content-Type: application/json` is sent unless `options` overrides
    /// it. A non-success status becomes [`ApiError::Api`] carrying the
    /// body's `error` string, or `HTTP <status>` when there is none.
    /// Transport failures are returned as-is.
    #[instrument(skip(self, options), fields(method = %options.method, request_id))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        let url = self.url_for(endpoint);
        let headers = merge_headers(&options.headers)?;

        let mut request = self.inner.request(options.method, &url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        debug!(url = %url, "Sending request");
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// POST a multipart form. Failures carry a fixed message and the body
    /// is not inspected.
    #[instrument(skip(self, form), fields(request_id))]
    pub async fn upload<T: DeserializeOwned>(&self, endpoint: &str, form: Form) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        let url = self.url_for(endpoint);
        debug!(url = %url, "Uploading");

        let response = self.inner.post(&url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(status = status.as_u16(), "Upload rejected");
            return Err(ApiError::Upload {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            let value = response.json().await?;
            debug!(status = status.as_u16(), "Request succeeded");
            return Ok(value);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        warn!(status = status.as_u16(), error = %message, "Request rejected");
        Err(ApiError::api(status.as_u16(), message))
    }
}

/// Default JSON content type underneath caller headers
fn merge_headers(caller: &[(String, String)]) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    for (name, value) in caller {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ApiError::InvalidHeader(name.clone()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| ApiError::InvalidHeader(format!("{name}: {value}")))?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

/// Message for a failed JSON request: the body's non-empty `error` string,
/// otherwise `HTTP <status>`
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .and_then(|error| match error {
            serde_json::Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = NutritionClient::with_config(ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let client = NutritionClient::with_config(ClientConfig::default().with_base_url("ftp://x"));
        assert!(matches!(client, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_url_for() {
        let client = NutritionClient::with_config(
            ClientConfig::default().with_base_url("http://localhost:8000/"),
        )
        .unwrap();
        assert_eq!(
            client.url_for("/api/barcode/123"),
            "http://localhost:8000/api/barcode/123"
        );
        assert_eq!(client.url_for("health"), "http://localhost:8000/health");
    }

    #[test]
    fn test_error_message_from_body() {
        let status = StatusCode::NOT_FOUND;
        assert_eq!(
            error_message(status, r#"{"error": "Product not found"}"#),
            "Product not found"
        );
    }

    #[test]
    fn test_error_message_fallbacks() {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        assert_eq!(error_message(status, "<html>oops</html>"), "HTTP 500");
        assert_eq!(error_message(status, ""), "HTTP 500");
        assert_eq!(error_message(status, r#"{"message": "nope"}"#), "HTTP 500");
        assert_eq!(error_message(status, r#"{"error": ""}"#), "HTTP 500");
        assert_eq!(error_message(status, r#"{"error": 42}"#), "HTTP 500");
        assert_eq!(error_message(status, "[1, 2]"), "HTTP 500");
    }

    #[test]
    fn test_merge_headers_default_content_type() {
        let headers = merge_headers(&[]).unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_merge_headers_caller_wins() {
        let headers = merge_headers(&[
            ("Content-Type".to_string(), "text/plain".to_string()),
            ("X-Client".to_string(), "cli".to_string()),
        ])
        .unwrap();
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
        assert_eq!(headers["x-client"], "cli");
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_merge_headers_rejects_invalid_name() {
        let result = merge_headers(&[("bad header".to_string(), "x".to_string())]);
        assert!(matches!(result, Err(ApiError::InvalidHeader(_))));
    }

    #[test]
    fn test_request_options() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.body.is_none());

        let options = RequestOptions::new(Method::POST)
            .with_json(&serde_json::json!({"message": "hi"}))
            .unwrap();
        assert_eq!(options.body.as_deref(), Some(r#"{"message":"hi"}"#));
    }
}
