use httpmock::prelude::*;
use reqwest::Method;
use serde_json::{Value, json};
use skinny_legend_api_client::{ApiError, ClientConfig, NutritionClient, RequestOptions};

fn client_for(server: &MockServer) -> NutritionClient {
    NutritionClient::with_config(ClientConfig::default().with_base_url(server.base_url())).unwrap()
}

#[tokio::test]
async fn test_success_returns_body_unchanged() {
    let server = MockServer::start_async().await;
    let body = json!({"id": 4, "date": "2024-03-09", "nested": {"list": [1, 2, 3]}});

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/daily-logs/2024-03-09")
                .header("content-type", "application/json");
            then.status(200).json_body(body.clone());
        })
        .await;

    let client = client_for(&server);
    let value: Value = client.get("/api/daily-logs/2024-03-09").await.unwrap();

    mock.assert_async().await;
    assert_eq!(value, body);
}

#[tokio::test]
async fn test_error_field_becomes_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/barcode/000");
            then.status(404).json_body(json!({"error": "Product not found"}));
        })
        .await;

    let client = client_for(&server);
    let err = client.barcode().lookup("000").await.unwrap_err();

    assert_eq!(err.to_string(), "Product not found");
    assert_eq!(err.status(), Some(404));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_non_json_failure_falls_back_to_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/boom");
            then.status(500).body("<html>Internal Server Error</html>");
        })
        .await;

    let client = client_for(&server);
    let err = client.get::<Value>("/boom").await.unwrap_err();

    assert!(matches!(err, ApiError::Api { status: 500, .. }));
    assert_eq!(err.to_string(), "HTTP 500");
    assert!(err.is_server_error());
}

#[tokio::test]
async fn test_failure_without_error_field_falls_back_to_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/profile").query_param("user_id", "1");
            then.status(404).json_body(json!({"message": "No profile found"}));
        })
        .await;

    let client = client_for(&server);
    let err = client.profile().get().await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP 404");
}

#[tokio::test]
async fn test_caller_headers_override_content_type() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/chat")
                .header("content-type", "text/plain")
                .header("x-trace", "abc")
                .body("hello");
            then.status(200).json_body(json!({"ok": true}));
        })
        .await;

    let client = client_for(&server);
    let options = RequestOptions::new(Method::POST)
        .with_header("Content-Type", "text/plain")
        .with_header("X-Trace", "abc")
        .with_body("hello");
    let value: Value = client.request("/api/chat", options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(value["ok"], true);
}

#[tokio::test]
async fn test_json_body_is_sent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/ai/analyze-image")
                .json_body(json!({"image_id": 12, "notes": "", "force_reanalyze": false}));
            then.status(200).json_body(json!({"foods": []}));
        })
        .await;

    let client = client_for(&server);
    let value = client.ai().analyze_image(12, None, false).await.unwrap();

    mock.assert_async().await;
    assert_eq!(value, json!({"foods": []}));
}

#[tokio::test]
async fn test_transport_failure_is_passed_through() {
    // Bind then drop a listener to get a port nothing is serving on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = NutritionClient::with_config(
        ClientConfig::default().with_base_url(format!("http://127.0.0.1:{port}")),
    )
    .unwrap();
    let err = client.health().check().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(200)
                .json_body(json!({"status": "healthy", "message": "Skinny Legend API is running"}));
        })
        .await;

    let client = client_for(&server);
    let (health, _elapsed) = client.health().check_timed().await.unwrap();

    assert!(health.is_healthy());
    assert_eq!(health.message, "Skinny Legend API is running");
}
