use std::time::Duration;
use crate::config::structs::cache_config::CacheConfig;
use crate::pool::structs::pool_limits::PoolLimits;

impl PoolLimits {
    pub fn from_config(config: &CacheConfig) -> Self {
        Self {
            pool_min: config.pool_min,
            pool_max: config.pool_max,
            connect_timeout: Duration::from_millis(config.connect_timeout_ms),
            acquire_timeout: Duration::from_millis(config.acquire_timeout_ms),
            idle_validate: Duration::from_millis(config.idle_validate_ms),
        }
    }
}
