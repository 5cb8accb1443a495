//! Rules store contract.

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::rules::RuleDocument;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store command error: {0}")]
    Command(String),

    #[error("stored rule is not a valid document: {0}")]
    Deserialization(String),
}

/// Contract expected of the store backing the rules cache.
///
/// Implementations only read rule sets; population and invalidation
/// belong to the token-issuing process. The store is eventually
/// consistent with that process, so a missing key means "no rules
/// currently known", never an authoritative "no rules exist".
#[async_trait]
pub trait AuthorizationRulesRepository: Send + Sync {
    /// Derive the cache key for a (token, audience) pair.
    ///
    /// Pure: no I/O, and stable for the lifetime of the process.
    fn key_for_authorization_rules(&self, token: &str, audience: &str) -> String;

    /// Fetch the rule set stored under `key`. A missing key yields an
    /// empty set.
    async fn get(&self, key: &str) -> Result<HashSet<RuleDocument>, StoreError>;

    /// O(1) existence probe, independent of payload size.
    async fn exists_rules(&self, key: &str) -> Result<bool, StoreError>;

    /// Verify the backing store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// Key scheme shared by every store implementation so the resolver's two
/// operations can never disagree on the key.
pub(crate) fn rule_key(token: &str, audience: &str) -> String {
    format!("{audience}:{token}")
}
