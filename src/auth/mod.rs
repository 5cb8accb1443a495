//! Authorization support subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → http::middleware::domain_rewrite (token.rs resolves the domain)
//!     → downstream handler
//!     → rules.rs (resolve cached rules for token + audience)
//!     → repository.rs trait → redis.rs or memory.rs
//! ```
//!
//! # Design Decisions
//! - The resolver never writes: rule sets are populated and invalidated
//!   by the process that issues tokens
//! - A cache miss is "no rules currently known", not an error
//! - Token verification lives behind the TokenParser trait; this crate
//!   carries no cryptography

pub mod memory;
pub mod redis;
pub mod repository;
pub mod rules;
pub mod token;

pub use memory::InMemoryAuthorizationRulesRepository;
pub use self::redis::RedisAuthorizationRulesRepository;
pub use repository::{AuthorizationRulesRepository, StoreError};
pub use rules::{AuthorizationRulesService, RuleDocument};
pub use token::{TokenInfo, TokenParser, TokenVerificationError};
