use std::time::Duration;
use crate::client::enums::backend_kind::BackendKind;
use crate::client::structs::cache_client::CacheClient;
use crate::driver::enums::cache_request::{CacheRequest, CacheResponse};
use crate::errors::CacheError;
use crate::pool::structs::pool_status::PoolStatus;
use crate::resilience::enums::circuit_state::CircuitState;

/// Longest key the wire protocols agree on (the memcache bound), measured
/// after prefixing.
pub const MAX_KEY_LENGTH: usize = 250;

impl CacheClient {
    /// Fetches the value stored under `key`.
    ///
    /// A missing (or TTL-expired) key fails with [`CacheError::KeyNotFound`];
    /// that is a normal negative result, not a backend failure.
    pub async fn get(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        let cache_key = self.cache_key(key)?;
        match self.resilience.execute(CacheRequest::Get { key: cache_key }).await? {
            CacheResponse::Value(Some(value)) => Ok(value),
            CacheResponse::Value(None) => Err(CacheError::KeyNotFound(key.to_string())),
            _ => Err(CacheError::OperationError("unexpected response for get".to_string())),
        }
    }

    /// Stores `value` under `key`, replacing any previous value. A `ttl`
    /// of `None` (or zero) stores without expiry.
    pub async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), CacheError> {
        let cache_key = self.cache_key(key)?;
        self.resilience
            .execute(CacheRequest::Set { key: cache_key, value: value.to_vec(), ttl })
            .await?;
        Ok(())
    }

    /// Removes `key`; removing an absent key fails with
    /// [`CacheError::KeyNotFound`].
    pub async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let cache_key = self.cache_key(key)?;
        match self.resilience.execute(CacheRequest::Delete { key: cache_key }).await? {
            CacheResponse::Deleted(true) => Ok(()),
            CacheResponse::Deleted(false) => Err(CacheError::KeyNotFound(key.to_string())),
            _ => Err(CacheError::OperationError("unexpected response for delete".to_string())),
        }
    }

    pub async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let cache_key = self.cache_key(key)?;
        match self.resilience.execute(CacheRequest::Exists { key: cache_key }).await? {
            CacheResponse::Exists(present) => Ok(present),
            _ => Err(CacheError::OperationError("unexpected response for exists".to_string())),
        }
    }

    /// Health probe through the full stack: resilience, pool, driver.
    pub async fn ping(&self) -> Result<(), CacheError> {
        self.resilience.execute(CacheRequest::Ping).await?;
        Ok(())
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    pub fn pool_status(&self) -> PoolStatus {
        self.resilience.pool().status()
    }

    pub fn circuit_state(&self) -> CircuitState {
        self.resilience.breaker().state()
    }

    /// Validates and prefixes a caller key. Fails before any network
    /// interaction so a bad key costs zero round-trips.
    pub(crate) fn cache_key(&self, key: &str) -> Result<String, CacheError> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey("key must not be empty".to_string()));
        }
        let cache_key = format!("{}{}", self.key_prefix, key);
        if cache_key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidKey(format!(
                "key exceeds {} bytes after prefixing",
                MAX_KEY_LENGTH
            )));
        }
        Ok(cache_key)
    }
}
