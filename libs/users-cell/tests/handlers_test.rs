use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use users_cell::{user_routes, UserStore};

fn create_test_app() -> Router {
    user_routes(Arc::new(UserStore::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn register(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn jane() -> Value {
    json!({
        "username": "jane",
        "password": "s3cret-pass",
        "email": "jane@example.com",
        "firstName": "Jane",
        "lastName": "Doe"
    })
}

#[tokio::test]
async fn test_register_user() {
    let app = create_test_app();

    let (status, json) = send(&app, register(jane())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        json,
        json!({
            "id": 1,
            "username": "jane",
            "email": "jane@example.com",
            "firstName": "Jane",
            "lastName": "Doe",
            "role": "patient"
        })
    );
}

#[tokio::test]
async fn test_response_never_carries_password() {
    let app = create_test_app();

    let (_, json) = send(&app, register(jane())).await;

    let object = json.as_object().unwrap();
    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("passwordHash"));
    assert!(!json.to_string().contains("s3cret-pass"));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = create_test_app();
    send(&app, register(jane())).await;

    let mut again = jane();
    again["username"] = json!("jane2");
    let (status, json) = send(&app, register(again)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "User with this email already exists");

    let mut other = jane();
    other["username"] = json!("john");
    other["email"] = json!("john@example.com");
    let (status, json) = send(&app, register(other)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["id"], 2);
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let app = create_test_app();
    send(&app, register(jane())).await;

    let mut again = jane();
    again["email"] = json!("other@example.com");
    let (status, json) = send(&app, register(again)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "User with this username already exists");
}

#[tokio::test]
async fn test_invalid_user_data() {
    let app = create_test_app();

    let (status, json) = send(&app, register(json!({ "email": "nope" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid user data");
    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["username", "password", "email"]);
}

#[tokio::test]
async fn test_malformed_body() {
    let app = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, json) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid user data");
    assert_eq!(json["errors"][0]["field"], "body");
}
