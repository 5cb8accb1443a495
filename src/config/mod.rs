//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → handed to each component at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; components receive their section
//!   by value at construction, never through shared mutable state
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::DomainRewriteConfig;
pub use schema::GatewayConfig;
pub use schema::QueryParametersConfig;
pub use schema::RedisConfig;
