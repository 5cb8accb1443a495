//! Shared utilities for integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, Uri};
use axum::routing::any;
use axum::Router;
use tower::{Layer, ServiceExt};

use gateway_ws::auth::token::{TokenInfo, TokenParser, TokenVerificationError};
use gateway_ws::config::schema::DomainRewriteConfig;
use gateway_ws::http::middleware::domain_rewrite::{domain_rewrite_middleware, DomainRewrite};

/// Token parser returning a fixed domain for any token.
pub struct StaticTokenParser {
    pub domain_id: String,
}

#[async_trait]
impl TokenParser for StaticTokenParser {
    async fn parse_and_verify(
        &self,
        _raw_token: &str,
    ) -> Result<TokenInfo, TokenVerificationError> {
        Ok(TokenInfo {
            domain_id: self.domain_id.clone(),
            subject: None,
            scopes: Vec::new(),
        })
    }
}

/// Token parser that rejects every token.
pub struct RejectingTokenParser;

#[async_trait]
impl TokenParser for RejectingTokenParser {
    async fn parse_and_verify(
        &self,
        _raw_token: &str,
    ) -> Result<TokenInfo, TokenVerificationError> {
        Err(TokenVerificationError::Malformed)
    }
}

pub fn rewrite_config(endpoints: &str, unauthenticated: &str) -> DomainRewriteConfig {
    DomainRewriteConfig {
        enabled: true,
        unauthenticated_path_pattern: unauthenticated.to_string(),
        endpoints: endpoints.to_string(),
    }
}

async fn echo_uri(uri: Uri) -> String {
    uri.to_string()
}

fn echo_router() -> Router {
    Router::new()
        .route("/", any(echo_uri))
        .route("/{*path}", any(echo_uri))
}

/// Send one request through the rewrite filter (wrapped around the
/// router, so the rewrite happens pre-routing) and return the URI the
/// inner handler observed.
pub async fn uri_after_rewrite(
    config: &DomainRewriteConfig,
    parser: Arc<dyn TokenParser>,
    uri: &str,
    authorization: Option<&str>,
) -> String {
    let rewrite = DomainRewrite::new(config, parser).expect("rewrite patterns must compile");
    let app =
        axum::middleware::from_fn_with_state(rewrite, domain_rewrite_middleware).layer(echo_router());

    let mut builder = Request::builder().uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
