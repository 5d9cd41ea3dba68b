use crate::client::enums::backend_kind::BackendKind;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;
use crate::errors::CacheError;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            // Empty on purpose: an unconfigured record must fail validation
            // for the network backends instead of dialing a guessed address.
            host: String::new(),
            port: 6379,
            db_index: None,
            username: None,
            password: None,
            key_prefix: String::from("cache:"),
            pool_min: 1,
            pool_max: 8,
            connect_timeout_ms: 5000,
            acquire_timeout_ms: 5000,
            call_timeout_ms: 2000,
            idle_validate_ms: 30000,
            max_retries: 3,
            retry_base_delay_ms: 100,
            retry_max_delay_ms: 2000,
            circuit_failure_threshold: 5,
            circuit_window_ms: 60000,
            circuit_cooldown_ms: 30000,
        }
    }
}

impl CacheConfig {
    pub fn load(data: &[u8]) -> Result<CacheConfig, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<CacheConfig, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match std::fs::write(path, data) {
            Ok(()) => Ok(()),
            Err(e) => Err(ConfigurationError::IOError(e)),
        }
    }

    /// `host:port` as the drivers dial it.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Checks completeness for the chosen backend kind.
    ///
    /// The factory calls this before any driver is built, so a broken record
    /// fails fast with [`CacheError::ConfigError`] instead of surfacing as a
    /// connect failure later.
    pub fn validate(&self, kind: BackendKind) -> Result<(), CacheError> {
        if self.pool_max == 0 {
            return Err(CacheError::ConfigError("pool_max must be at least 1".to_string()));
        }
        if self.pool_min > self.pool_max {
            return Err(CacheError::ConfigError(format!(
                "pool_min ({}) must not exceed pool_max ({})",
                self.pool_min, self.pool_max
            )));
        }
        if self.call_timeout_ms == 0 {
            return Err(CacheError::ConfigError("call_timeout_ms must be at least 1".to_string()));
        }
        if self.circuit_failure_threshold == 0 {
            return Err(CacheError::ConfigError("circuit_failure_threshold must be at least 1".to_string()));
        }
        match kind {
            BackendKind::redis | BackendKind::memcache => {
                if self.host.is_empty() {
                    return Err(CacheError::ConfigError(format!("host is required for the {} backend", kind)));
                }
                if self.port == 0 {
                    return Err(CacheError::ConfigError(format!("port is required for the {} backend", kind)));
                }
            }
            BackendKind::memory => {}
        }
        Ok(())
    }
}
