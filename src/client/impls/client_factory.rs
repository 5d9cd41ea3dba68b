use log::info;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use crate::client::enums::backend_kind::BackendKind;
use crate::client::structs::cache_client::CacheClient;
use crate::client::structs::client_factory::{ClientFactory, DriverConstructor};
use crate::config::structs::cache_config::CacheConfig;
use crate::driver::structs::cache_driver_memcache::CacheDriverMemcache;
use crate::driver::structs::cache_driver_memory::CacheDriverMemory;
use crate::driver::structs::cache_driver_redis::CacheDriverRedis;
use crate::driver::traits::cache_driver::CacheDriver;
use crate::errors::CacheError;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::pool::structs::pool_limits::PoolLimits;
use crate::resilience::structs::circuit_breaker::{CircuitBreaker, CircuitSettings};
use crate::resilience::structs::resilience_wrapper::ResilienceWrapper;
use crate::resilience::structs::retry_policy::RetryPolicy;

impl Default for ClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientFactory {
    /// Factory with the built-in backends registered.
    pub fn new() -> ClientFactory {
        let mut factory = ClientFactory { constructors: BTreeMap::new() };
        factory.register(BackendKind::redis, Box::new(|config| {
            Ok(Arc::new(CacheDriverRedis::new(config)?) as Arc<dyn CacheDriver>)
        }));
        factory.register(BackendKind::memcache, Box::new(|config| {
            Ok(Arc::new(CacheDriverMemcache::new(config)?) as Arc<dyn CacheDriver>)
        }));
        factory.register(BackendKind::memory, Box::new(|_config| {
            Ok(Arc::new(CacheDriverMemory::new()) as Arc<dyn CacheDriver>)
        }));
        factory
    }

    /// Registers (or replaces) the driver constructor for a kind.
    pub fn register(&mut self, kind: BackendKind, constructor: DriverConstructor) {
        self.constructors.insert(kind, constructor);
    }

    /// Validates the configuration for the requested kind and wires driver,
    /// pool and resilience wrapper into a ready client.
    ///
    /// Construction never dials the backend; connection failures surface on
    /// first use through the resilience layer. The only failure here is
    /// [`CacheError::ConfigError`].
    #[tracing::instrument(skip(self, config))]
    pub fn create(&self, kind: BackendKind, config: &CacheConfig) -> Result<CacheClient, CacheError> {
        config.validate(kind)?;
        let constructor = self.constructors.get(&kind).ok_or_else(|| {
            CacheError::ConfigError(format!("no driver registered for the {} backend", kind))
        })?;
        let driver = constructor(config)?;

        let pool = ConnectionPool::new(driver, PoolLimits::from_config(config));
        let breaker = CircuitBreaker::new(CircuitSettings {
            failure_threshold: config.circuit_failure_threshold,
            window: Duration::from_millis(config.circuit_window_ms),
            cooldown: Duration::from_millis(config.circuit_cooldown_ms),
        });
        let retry = RetryPolicy::new(
            config.max_retries,
            Duration::from_millis(config.retry_base_delay_ms),
            Duration::from_millis(config.retry_max_delay_ms),
        );
        let resilience = ResilienceWrapper::new(
            pool,
            breaker,
            retry,
            Duration::from_millis(config.call_timeout_ms),
        );

        info!("[Factory] built {} cache client (pool {}..{})", kind, config.pool_min, config.pool_max);
        Ok(CacheClient {
            kind,
            key_prefix: config.key_prefix.clone(),
            resilience,
        })
    }
}
