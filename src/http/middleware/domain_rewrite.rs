//! Domain-aware URI rewriting.
//!
//! # Responsibilities
//! - Detect paths that omit the tenant/domain segment
//! - Resolve the caller's domain from its bearer token
//! - Splice the domain into the path before route matching
//!
//! # Design Decisions
//! - Domain-qualified paths win: they are never rewritten, even when
//!   they would also loosely match the domain-less form
//! - Endpoint matching is exact alternation against the allow-list,
//!   not prefix matching
//! - Token problems (absent header, wrong scheme, failed verification)
//!   all degrade to the sentinel domain; the request stays routable and
//!   the downstream authorizer decides what to reject

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::uri::PathAndQuery;
use axum::http::{header, HeaderMap, Request, Uri};
use axum::middleware::Next;
use axum::response::Response;
use regex::Regex;

use crate::auth::token::TokenParser;
use crate::config::schema::DomainRewriteConfig;
use crate::observability::metrics;

const TOKEN_PREFIX: &str = "Bearer ";

/// Domain used when no valid identity can be resolved.
pub const UNAUTHENTICATED_DOMAIN: &str = "unauthenticated";

/// Immutable state of the rewrite filter, compiled once at construction
/// and shared across requests.
#[derive(Clone)]
pub struct DomainRewrite {
    enabled: bool,
    token_parser: Arc<dyn TokenParser>,
    unauthenticated_path: Option<Regex>,
    with_domain: Regex,
    without_domain: Regex,
}

impl DomainRewrite {
    /// Compile the path patterns from configuration.
    ///
    /// The endpoint allow-list becomes an alternation inside the two
    /// mutually exclusive patterns: `vX.Y/{domain}/{endpoint}(/...)` and
    /// `vX.Y/{endpoint}(/...)`. Both are anchored full matches against
    /// the path without its leading slash.
    pub fn new(
        config: &DomainRewriteConfig,
        token_parser: Arc<dyn TokenParser>,
    ) -> Result<Self, regex::Error> {
        let alternation = config
            .endpoints
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .collect::<Vec<_>>()
            .join("|");

        let with_domain = Regex::new(&format!(
            r"^v[0-9]+\.[0-9]+/[\w\-:\.]+/({alternation})(/.*)?$"
        ))?;
        let without_domain =
            Regex::new(&format!(r"^v[0-9]+\.[0-9]+/({alternation})(/.*)?$"))?;
        let unauthenticated_path = if config.unauthenticated_path_pattern.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(
                "^(?:{})$",
                config.unauthenticated_path_pattern
            ))?)
        };

        Ok(Self {
            enabled: config.enabled,
            token_parser,
            unauthenticated_path,
            with_domain,
            without_domain,
        })
    }

    fn is_unauthenticated_path(&self, path: &str) -> bool {
        self.unauthenticated_path
            .as_ref()
            .map(|pattern| pattern.is_match(path))
            .unwrap_or(false)
    }

    /// The path needs a domain when it misses the domain-qualified form
    /// but matches the domain-less one. Checked in that order: a
    /// domain-qualified match short-circuits to "no rewrite".
    fn needs_domain_in_path(&self, path: &str) -> bool {
        !self.with_domain.is_match(path) && self.without_domain.is_match(path)
    }

    /// Resolve the caller's domain from the Authorization header.
    ///
    /// Anything short of a verified bearer token resolves to the
    /// sentinel domain; verification failures are logged at debug level
    /// and never surfaced to the client.
    async fn extract_request_domain(&self, headers: &HeaderMap) -> String {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        if let Some(value) = authorization {
            if let Some(raw_token) = value.strip_prefix(TOKEN_PREFIX) {
                match self.token_parser.parse_and_verify(raw_token).await {
                    Ok(info) => return info.domain_id,
                    Err(error) => {
                        tracing::debug!(error = %error, "cannot parse authorization token");
                    }
                }
            }
        }
        UNAUTHENTICATED_DOMAIN.to_string()
    }
}

/// Pre-routing filter injecting the tenant domain into domain-less paths.
pub async fn domain_rewrite_middleware(
    State(rewrite): State<DomainRewrite>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if !rewrite.enabled {
        return next.run(req).await;
    }

    let path = req.uri().path().trim_start_matches('/').to_string();
    if rewrite.is_unauthenticated_path(&path) || !rewrite.needs_domain_in_path(&path) {
        return next.run(req).await;
    }

    let domain = rewrite.extract_request_domain(req.headers()).await;
    if let Some((version, remainder)) = path.split_once('/') {
        let rewritten = format!("{version}/{domain}/{remainder}");
        match rebuild_uri(req.uri(), &rewritten) {
            Ok(uri) => {
                tracing::debug!(from = %path, to = %rewritten, "injected domain into request path");
                metrics::record_domain_rewrite("rewritten");
                *req.uri_mut() = uri;
            }
            Err(error) => {
                tracing::warn!(path = %rewritten, error = %error, "rewritten path is not a valid URI, passing request through");
            }
        }
    }

    next.run(req).await
}

/// Rebuild the request URI with a new path, preserving the query string.
fn rebuild_uri(uri: &Uri, path: &str) -> Result<Uri, axum::http::Error> {
    let path_and_query = match uri.query() {
        Some(query) => format!("/{path}?{query}"),
        None => format!("/{path}"),
    };
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query.as_str())?);
    Ok(Uri::from_parts(parts)?)
}
