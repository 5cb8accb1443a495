//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the endpoint allow-list compiles into a usable alternation
//! - Validate value ranges (page sizes) and the Redis URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("domain_rewrite.endpoints is empty; the rewrite filter would never match")]
    EmptyEndpoints,

    #[error("domain_rewrite.endpoints entry '{0}' contains characters outside [A-Za-z0-9_-]")]
    InvalidEndpoint(String),

    #[error("domain_rewrite.unauthenticated_path_pattern does not compile: {0}")]
    InvalidUnauthenticatedPattern(String),

    #[error("queries.default_page_size must be positive, got {0}")]
    NonPositiveDefaultPageSize(i32),

    #[error("queries.max_page_size ({max}) must be at least default_page_size ({default})")]
    PageSizeBoundsInverted { default: i32, max: i32 },

    #[error("auth_redis.url is not a valid redis URL: {0}")]
    InvalidRedisUrl(String),
}

/// Validate a configuration, collecting every violation found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.domain_rewrite.enabled {
        let endpoints: Vec<&str> = config
            .domain_rewrite
            .endpoints
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .collect();
        if endpoints.is_empty() {
            errors.push(ValidationError::EmptyEndpoints);
        }
        for endpoint in endpoints {
            if !endpoint
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            {
                errors.push(ValidationError::InvalidEndpoint(endpoint.to_string()));
            }
        }
        if !config.domain_rewrite.unauthenticated_path_pattern.is_empty() {
            if let Err(e) = Regex::new(&config.domain_rewrite.unauthenticated_path_pattern) {
                errors.push(ValidationError::InvalidUnauthenticatedPattern(e.to_string()));
            }
        }
    }

    if config.queries.default_page_size < 1 {
        errors.push(ValidationError::NonPositiveDefaultPageSize(
            config.queries.default_page_size,
        ));
    }
    if config.queries.max_page_size < config.queries.default_page_size {
        errors.push(ValidationError::PageSizeBoundsInverted {
            default: config.queries.default_page_size,
            max: config.queries.max_page_size,
        });
    }

    match Url::parse(&config.auth_redis.url) {
        Ok(url) if url.scheme() == "redis" || url.scheme() == "rediss" => {}
        Ok(url) => errors.push(ValidationError::InvalidRedisUrl(format!(
            "unsupported scheme '{}'",
            url.scheme()
        ))),
        Err(e) => errors.push(ValidationError::InvalidRedisUrl(e.to_string())),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
