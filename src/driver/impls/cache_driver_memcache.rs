use async_trait::async_trait;
use log::debug;
use std::time::Duration;
use crate::client::enums::backend_kind::BackendKind;
use crate::config::structs::cache_config::CacheConfig;
use crate::driver::helpers::ttl_seconds;
use crate::driver::structs::cache_driver_memcache::{CacheConnectionMemcache, CacheDriverMemcache};
use crate::driver::traits::cache_driver::{CacheConnection, CacheDriver};
use crate::errors::CacheError;

impl CacheDriverMemcache {
    #[tracing::instrument(skip(config))]
    pub fn new(config: &CacheConfig) -> Result<Self, CacheError> {
        Ok(Self {
            url: format!("{}{}", BackendKind::memcache.url_scheme(), config.address()),
        })
    }
}

#[async_trait]
impl CacheDriver for CacheDriverMemcache {
    async fn connect(&self) -> Result<Box<dyn CacheConnection>, CacheError> {
        let client = memcache::connect(self.url.as_str())
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Memcache: {}", e)))?;
        debug!("[Memcache] opened connection");
        Ok(Box::new(CacheConnectionMemcache { client }))
    }

    fn name(&self) -> &'static str {
        "memcache"
    }
}

#[async_trait]
impl CacheConnection for CacheConnectionMemcache {
    async fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.client
            .get::<Vec<u8>>(key)
            .map_err(CacheError::MemcacheError)
    }

    async fn set(&mut self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), CacheError> {
        // 0 means persist-forever on the memcache wire.
        let expiration = ttl.map(ttl_seconds).unwrap_or(0) as u32;
        self.client
            .set(key, value, expiration)
            .map_err(CacheError::MemcacheError)?;
        debug!("[Memcache] set {} ({} bytes)", key, value.len());
        Ok(())
    }

    async fn delete(&mut self, key: &str) -> Result<bool, CacheError> {
        let removed = self.client
            .delete(key)
            .map_err(CacheError::MemcacheError)?;
        debug!("[Memcache] deleted {} (removed={})", key, removed);
        Ok(removed)
    }

    async fn exists(&mut self, key: &str) -> Result<bool, CacheError> {
        // The protocol has no exists verb; a get answers the same question.
        let value = self.client
            .get::<Vec<u8>>(key)
            .map_err(CacheError::MemcacheError)?;
        Ok(value.is_some())
    }

    async fn ping(&mut self) -> Result<(), CacheError> {
        self.client
            .version()
            .map_err(CacheError::MemcacheError)?;
        Ok(())
    }
}
