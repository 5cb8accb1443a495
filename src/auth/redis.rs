//! Redis-backed rules store.

use std::collections::HashSet;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::auth::repository::{rule_key, AuthorizationRulesRepository, StoreError};
use crate::auth::rules::RuleDocument;
use crate::config::schema::RedisConfig;

/// Rules store backed by Redis.
///
/// Rule sets live in Redis SETs under the derived rule key; each member
/// is one serialized JSON document. The connection manager multiplexes
/// one connection across concurrent requests and reconnects on failure;
/// command failures surface to the caller as [`StoreError`] without
/// local retries.
#[derive(Clone)]
pub struct RedisAuthorizationRulesRepository {
    connection: ConnectionManager,
}

impl RedisAuthorizationRulesRepository {
    /// Connect to Redis and build the shared connection manager.
    pub async fn connect(config: &RedisConfig) -> Result<Self, StoreError> {
        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        let connection = client
            .get_connection_manager()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl AuthorizationRulesRepository for RedisAuthorizationRulesRepository {
    fn key_for_authorization_rules(&self, token: &str, audience: &str) -> String {
        rule_key(token, audience)
    }

    async fn get(&self, key: &str) -> Result<HashSet<RuleDocument>, StoreError> {
        let mut connection = self.connection.clone();
        let members: Vec<String> = connection
            .smembers(key)
            .await
            .map_err(|e| StoreError::Command(e.to_string()))?;
        members
            .iter()
            .map(|raw| {
                serde_json::from_str(raw).map_err(|e| StoreError::Deserialization(e.to_string()))
            })
            .collect()
    }

    async fn exists_rules(&self, key: &str) -> Result<bool, StoreError> {
        let mut connection = self.connection.clone();
        connection
            .exists(key)
            .await
            .map_err(|e| StoreError::Command(e.to_string()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let mut connection = self.connection.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut connection)
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}
