//! Request filters.
//!
//! Both filters are plain axum middleware functions. The domain rewrite
//! filter must wrap the host application's router (not be added with
//! `Router::layer`) so the rewritten path participates in route
//! matching.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod domain_rewrite;
pub mod info_headers;

pub use domain_rewrite::{domain_rewrite_middleware, DomainRewrite};
pub use info_headers::info_headers_middleware;

/// Attach the standard support layers to a router: request/response
/// tracing and the information headers. The domain rewrite filter is
/// not included here, since it must wrap the router itself.
pub fn with_support_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(axum::middleware::from_fn(info_headers_middleware))
        .layer(TraceLayer::new_for_http())
}
