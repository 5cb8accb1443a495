//! End-to-end tests for the query-parameter extractor.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::FromRef;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use tower::ServiceExt;

use gateway_ws::config::schema::QueryParametersConfig;
use gateway_ws::queries::extract::QueryParametersProviderState;
use gateway_ws::queries::params::{BasicQueryParametersParser, QueryParameters};

#[derive(Clone)]
struct AppState {
    queries: QueryParametersProviderState,
}

impl FromRef<AppState> for QueryParametersProviderState {
    fn from_ref(state: &AppState) -> Self {
        state.queries.clone()
    }
}

async fn list_resources(params: QueryParameters) -> String {
    format!(
        "page={};page_size={};sort={};index_fields_only={}",
        params.page,
        params.page_size,
        params.sort.as_deref().unwrap_or("-"),
        params.index_fields_only
    )
}

fn app() -> Router {
    let state = AppState {
        queries: QueryParametersProviderState {
            config: QueryParametersConfig {
                default_page_size: 10,
                max_page_size: 50,
            },
            parser: Arc::new(BasicQueryParametersParser),
        },
    };
    Router::new()
        .route("/v1.0/resource", get(list_resources))
        .with_state(state)
}

async fn send(uri: &str) -> (StatusCode, String) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn defaults_apply_when_parameters_are_absent() {
    let (status, body) = send("/v1.0/resource").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "page=0;page_size=10;sort=-;index_fields_only=false");
}

#[tokio::test]
async fn explicit_parameters_are_bound() {
    let (status, body) =
        send("/v1.0/resource?api:page=3&api:pageSize=25&api:sort=name&api:indexFieldsOnly=true")
            .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "page=3;page_size=25;sort=name;index_fields_only=true");
}

#[tokio::test]
async fn oversized_page_size_yields_structured_bad_request() {
    let (status, body) = send("/v1.0/resource?api:pageSize=500").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "invalid_page_size");
    assert!(json["errorDescription"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn negative_page_yields_invalid_page_code() {
    let (status, body) = send("/v1.0/resource?api:page=-2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "invalid_page");
}

#[tokio::test]
async fn non_numeric_page_yields_generic_bad_request() {
    let (status, body) = send("/v1.0/resource?api:page=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "bad_request");
}
