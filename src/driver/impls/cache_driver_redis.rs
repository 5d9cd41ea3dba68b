use async_trait::async_trait;
use log::debug;
use redis::AsyncCommands;
use std::time::Duration;
use crate::client::enums::backend_kind::BackendKind;
use crate::config::structs::cache_config::CacheConfig;
use crate::driver::helpers::ttl_seconds;
use crate::driver::structs::cache_driver_redis::{CacheConnectionRedis, CacheDriverRedis};
use crate::driver::traits::cache_driver::{CacheConnection, CacheDriver};
use crate::errors::CacheError;

impl CacheDriverRedis {
    #[tracing::instrument(skip(config))]
    pub fn new(config: &CacheConfig) -> Result<Self, CacheError> {
        let auth = match (&config.username, &config.password) {
            (Some(user), Some(pass)) => format!("{}:{}@", user, pass),
            (None, Some(pass)) => format!(":{}@", pass),
            _ => String::new(),
        };
        let url = format!(
            "{}{}{}/{}",
            BackendKind::redis.url_scheme(),
            auth,
            config.address(),
            config.db_index.unwrap_or(0)
        );
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CacheDriver for CacheDriverRedis {
    async fn connect(&self) -> Result<Box<dyn CacheConnection>, CacheError> {
        let connection = self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        debug!("[Redis] opened connection");
        Ok(Box::new(CacheConnectionRedis { connection }))
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

#[async_trait]
impl CacheConnection for CacheConnectionRedis {
    async fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let value: Option<Vec<u8>> = self.connection
            .get(key)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(value)
    }

    async fn set(&mut self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), CacheError> {
        match ttl.map(ttl_seconds).filter(|seconds| *seconds > 0) {
            Some(seconds) => {
                self.connection
                    .set_ex::<_, _, ()>(key, value, seconds)
                    .await
                    .map_err(CacheError::RedisError)?;
            }
            None => {
                self.connection
                    .set::<_, _, ()>(key, value)
                    .await
                    .map_err(CacheError::RedisError)?;
            }
        }
        debug!("[Redis] set {} ({} bytes)", key, value.len());
        Ok(())
    }

    async fn delete(&mut self, key: &str) -> Result<bool, CacheError> {
        let removed: i64 = self.connection
            .del(key)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] deleted {} (removed={})", key, removed);
        Ok(removed > 0)
    }

    async fn exists(&mut self, key: &str) -> Result<bool, CacheError> {
        let exists: bool = self.connection
            .exists(key)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(exists)
    }

    async fn ping(&mut self) -> Result<(), CacheError> {
        redis::cmd("PING")
            .query_async::<String>(&mut self.connection)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(())
    }
}
