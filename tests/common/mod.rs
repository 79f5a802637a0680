use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bloglist::bloglist_config::CorsConfig;
use bloglist::router::init_router;
use bloglist::state::AppState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

#[allow(dead_code)]
pub fn initial_blogs() -> Vec<Value> {
    vec![
        json!({
            "title": "Camambert Will Save All",
            "author": "Arthur Smitheson",
            "url": "https://google.com/cheese",
            "likes": 45
        }),
        json!({
            "title": "Vegan cheese, a modern tragedy",
            "author": "Marcus Grujer",
            "url": "https:cheese.com",
            "likes": 54
        }),
    ]
}

pub fn setup_test_app() -> Router {
    init_router(AppState::in_memory(CorsConfig::default()))
}

/// App preloaded with [`initial_blogs`] through the public API.
#[allow(dead_code)]
pub async fn setup_seeded_app() -> Router {
    let app = setup_test_app();
    for blog in initial_blogs() {
        let (status, _) = send_json(&app, "POST", "/api/blogs", &blog).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    app
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, body)
}

#[allow(dead_code)]
pub async fn send_json(app: &Router, method: &str, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn send_empty(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub async fn list_blogs(app: &Router) -> Vec<Value> {
    let (status, body) = send_empty(app, "GET", "/api/blogs").await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().clone()
}
