//! Tests for the information-headers filter.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use tower::ServiceExt;
use uuid::Uuid;

use gateway_ws::http::middleware::info_headers::{REQUEST_ID_HEADER, RESPONSE_TIME_HEADER};
use gateway_ws::http::middleware::with_support_layers;

fn app() -> Router {
    with_support_layers(Router::new().route("/ping", get(|| async { "pong" })))
}

#[tokio::test]
async fn generates_request_id_when_absent() {
    let response = app()
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .expect("request id header present")
        .to_str()
        .unwrap();
    assert!(Uuid::parse_str(request_id).is_ok());
}

#[tokio::test]
async fn propagates_client_request_id() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/ping")
                .header(REQUEST_ID_HEADER, "client-chosen-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(REQUEST_ID_HEADER).unwrap(),
        "client-chosen-id"
    );
}

#[tokio::test]
async fn stamps_response_time() {
    let response = app()
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let elapsed = response
        .headers()
        .get(RESPONSE_TIME_HEADER)
        .expect("response time header present")
        .to_str()
        .unwrap();
    assert!(elapsed.parse::<u128>().is_ok());
}
