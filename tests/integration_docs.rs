mod common;

use axum::http::StatusCode;
use common::{send_empty, setup_test_app};

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let app = setup_test_app();

    let (status, body) = send_empty(&app, "GET", "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/blogs"));
    assert!(paths.contains_key("/api/blogs/{id}"));
    assert!(paths.contains_key("/api/users"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = setup_test_app();

    let (status, _) = send_empty(&app, "GET", "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
