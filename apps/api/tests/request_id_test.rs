//! # Request ID 統合テスト
//!
//! ミドルウェアスタックが全レスポンスに `X-Request-Id` を付与すること、
//! クライアント提供の ID が保持されることを検証する。

use std::sync::Arc;

use axum::{Router, body::Body};
use chainraffle_api::{app_builder::build_app, handler::AdminState};
use http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;
use uuid::Uuid;

fn test_app() -> Router {
    build_app(Arc::new(AdminState {
        admin_key: "test-admin-key".to_string(),
    }))
}

#[tokio::test]
async fn test_レスポンスにrequest_idが付与される() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_生成されるrequest_idはuuid_v7() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap();

    let uuid = Uuid::parse_str(request_id).unwrap();
    assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
}

#[tokio::test]
async fn test_クライアント提供のrequest_idが保持される() {
    let client_id = "11111111-2222-7333-8444-555555555555";

    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", client_id)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        client_id
    );
}

#[tokio::test]
async fn test_エラーレスポンスにもrequest_idが付与される() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key("x-request-id"));
}
