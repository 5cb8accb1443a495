//! Authorization rule documents and the lookup service.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::repository::{AuthorizationRulesRepository, StoreError};
use crate::observability::metrics;

/// One authorization rule, as issued by the token-granting process.
///
/// The document is opaque to this crate: an arbitrary structured value
/// whose schema belongs to the authorizer consuming it. Equality and
/// hashing run over a canonical form (object keys visited in sorted
/// order), so rule sets behave as sets regardless of attribute order in
/// the cached payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleDocument(Value);

impl RuleDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Hash for RuleDocument {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(&self.0, state);
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => 0u8.hash(state),
        Value::Bool(b) => {
            1u8.hash(state);
            b.hash(state);
        }
        Value::Number(n) => {
            2u8.hash(state);
            n.to_string().hash(state);
        }
        Value::String(s) => {
            3u8.hash(state);
            s.hash(state);
        }
        Value::Array(items) => {
            4u8.hash(state);
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            5u8.hash(state);
            map.len().hash(state);
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for key in keys {
                key.hash(state);
                hash_value(&map[key.as_str()], state);
            }
        }
    }
}

/// Resolves cached authorization rules for a (token, audience) pair.
///
/// The service knows nothing about the store's key scheme or wire
/// format; it derives keys through the repository and propagates store
/// failures unchanged. Retries, if any, belong to the store client.
#[derive(Clone)]
pub struct AuthorizationRulesService {
    repository: Arc<dyn AuthorizationRulesRepository>,
}

impl AuthorizationRulesService {
    pub fn new(repository: Arc<dyn AuthorizationRulesRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the rule set cached for this token/audience pair.
    ///
    /// A cache miss yields an empty set: absence of rules is the "no
    /// restriction" signal consumed by callers, not an error.
    pub async fn get_authorization_rules(
        &self,
        token: &str,
        audience: &str,
    ) -> Result<HashSet<RuleDocument>, StoreError> {
        let key = self.repository.key_for_authorization_rules(token, audience);
        metrics::record_rules_lookup("get");
        self.repository.get(&key).await
    }

    /// Cheap existence probe: is any rule cached for this pair?
    pub async fn exists_rules_for_token(
        &self,
        token: &str,
        audience: &str,
    ) -> Result<bool, StoreError> {
        let key = self.repository.key_for_authorization_rules(token, audience);
        metrics::record_rules_lookup("exists");
        self.repository.exists_rules(&key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::memory::InMemoryAuthorizationRulesRepository;
    use serde_json::json;

    #[test]
    fn test_rule_document_equality_ignores_key_order() {
        let a = RuleDocument::new(json!({"scope": "read", "audience": "api"}));
        let b = RuleDocument::new(json!({"audience": "api", "scope": "read"}));
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_rule_document_hash_distinguishes_values() {
        let mut set = HashSet::new();
        set.insert(RuleDocument::new(json!({"scope": "read"})));
        set.insert(RuleDocument::new(json!({"scope": "write"})));
        set.insert(RuleDocument::new(json!(["read", "write"])));
        assert_eq!(set.len(), 3);
    }

    #[tokio::test]
    async fn test_miss_yields_empty_set_not_error() {
        let service = AuthorizationRulesService::new(Arc::new(
            InMemoryAuthorizationRulesRepository::new(),
        ));
        let rules = service
            .get_authorization_rules("token", "audience")
            .await
            .unwrap();
        assert!(rules.is_empty());
    }

    #[tokio::test]
    async fn test_exists_matches_get_for_any_store_state() {
        let repository = Arc::new(InMemoryAuthorizationRulesRepository::new());
        let service = AuthorizationRulesService::new(repository.clone());

        // Empty store: both operations agree on absence.
        assert!(!service.exists_rules_for_token("t", "a").await.unwrap());
        assert!(service
            .get_authorization_rules("t", "a")
            .await
            .unwrap()
            .is_empty());

        repository.put_rule("t", "a", RuleDocument::new(json!({"scope": "read"})));

        assert!(service.exists_rules_for_token("t", "a").await.unwrap());
        assert!(!service
            .get_authorization_rules("t", "a")
            .await
            .unwrap()
            .is_empty());

        // A different audience derives a different key.
        assert!(!service.exists_rules_for_token("t", "other").await.unwrap());
    }

    #[tokio::test]
    async fn test_rules_form_a_set() {
        let repository = Arc::new(InMemoryAuthorizationRulesRepository::new());
        let service = AuthorizationRulesService::new(repository.clone());

        repository.put_rule("t", "a", RuleDocument::new(json!({"scope": "read"})));
        repository.put_rule("t", "a", RuleDocument::new(json!({"scope": "read"})));
        repository.put_rule("t", "a", RuleDocument::new(json!({"scope": "write"})));

        let rules = service.get_authorization_rules("t", "a").await.unwrap();
        assert_eq!(rules.len(), 2);
    }
}
