//! Web-service support utilities for REST API gateways.

pub mod auth;
pub mod config;
pub mod http;
pub mod observability;
pub mod queries;

pub use auth::rules::AuthorizationRulesService;
pub use config::schema::GatewayConfig;
pub use http::middleware::domain_rewrite::{domain_rewrite_middleware, DomainRewrite};
pub use queries::params::QueryParameters;
