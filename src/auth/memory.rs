//! In-memory rules store for tests and local development.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::auth::repository::{rule_key, AuthorizationRulesRepository, StoreError};
use crate::auth::rules::RuleDocument;

/// Concurrent in-memory rules store.
///
/// Mirrors the Redis store's key scheme so the two are interchangeable
/// behind the repository trait.
#[derive(Clone, Default)]
pub struct InMemoryAuthorizationRulesRepository {
    rules: Arc<DashMap<String, HashSet<RuleDocument>>>,
}

impl InMemoryAuthorizationRulesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a rule under the key derived for this token/audience pair.
    ///
    /// Only the seeding side exists here; the repository trait itself is
    /// read-only, matching the production store.
    pub fn put_rule(&self, token: &str, audience: &str, rule: RuleDocument) {
        let key = rule_key(token, audience);
        self.rules.entry(key).or_default().insert(rule);
    }
}

#[async_trait]
impl AuthorizationRulesRepository for InMemoryAuthorizationRulesRepository {
    fn key_for_authorization_rules(&self, token: &str, audience: &str) -> String {
        rule_key(token, audience)
    }

    async fn get(&self, key: &str) -> Result<HashSet<RuleDocument>, StoreError> {
        Ok(self
            .rules
            .get(key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn exists_rules(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.rules.contains_key(key))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
