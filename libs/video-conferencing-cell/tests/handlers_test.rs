use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use shared_utils::test_utils::TestConfig;
use video_conferencing_cell::{zoom_settings_routes, ZoomSettingsStore};

fn create_test_app(config: &TestConfig) -> Router {
    zoom_settings_routes(config.to_arc(), Arc::new(ZoomSettingsStore::new()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn post_settings(body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_get_settings_before_first_save_is_empty_object() {
    let app = create_test_app(&TestConfig::open());

    let (status, json) = send(app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({}));
}

#[tokio::test]
async fn test_save_then_read_settings() {
    let app = create_test_app(&TestConfig::open());

    let (status, saved) = send(
        app.clone(),
        post_settings(json!({ "apiKey": "key", "apiSecret": "secret", "zoomEmail": "host@clinic.example" }), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["id"], 1);

    let (_, updated) = send(app.clone(), post_settings(json!({ "apiKey": "rotated" }), None)).await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["apiKey"], "rotated");
    assert_eq!(updated["apiSecret"], "secret");

    let (status, fetched) = send(app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_invalid_settings_return_400_with_errors() {
    let app = create_test_app(&TestConfig::open());

    let (status, json) = send(app.clone(), post_settings(json!({ "zoomEmail": "nope" }), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"][0]["field"], "zoomEmail");

    let (status, json) = send(app, post_settings(json!({ "apiKey": 42 }), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"][0]["field"], "body");
}

#[tokio::test]
async fn test_settings_require_admin_token_when_secured() {
    let config = TestConfig::secured();
    let app = create_test_app(&config);

    let (status, _) = send(app.clone(), Request::builder().uri("/").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = config.admin_token();
    let (status, json) = send(app, post_settings(json!({ "apiKey": "key" }), Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["apiKey"], "key");
}
