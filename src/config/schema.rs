//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! gateway support services. All types derive Serde traits for
//! deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway support services.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Domain-aware URI rewrite filter.
    pub domain_rewrite: DomainRewriteConfig,

    /// Redis store holding authorization rules.
    pub auth_redis: RedisConfig,

    /// Query-parameter binding defaults.
    pub queries: QueryParametersConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Domain-aware URI rewrite settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DomainRewriteConfig {
    /// Enable the rewrite filter. Disabled means pass-through.
    pub enabled: bool,

    /// Full-match pattern for paths served without authentication
    /// (e.g., "v1.0/health"). Empty means no such paths.
    pub unauthenticated_path_pattern: String,

    /// Comma-separated endpoint names eligible for domain injection
    /// (e.g., "resource,user").
    pub endpoints: String,
}

impl Default for DomainRewriteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            unauthenticated_path_pattern: String::new(),
            endpoints: String::new(),
        }
    }
}

/// Redis connection settings for the rules store.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Connection URL (e.g., "redis://127.0.0.1:6379"). Credentials and
    /// database index go in the URL.
    pub url: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
        }
    }
}

/// Defaults and bounds for the query-parameter extractor.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryParametersConfig {
    /// Page size applied when `api:pageSize` is absent.
    pub default_page_size: i32,

    /// Upper bound on `api:pageSize`.
    pub max_page_size: i32,
}

impl Default for QueryParametersConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 50,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
