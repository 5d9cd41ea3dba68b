use serde::{
    Deserialize,
    Serialize
};

/// Connection, pool and resilience settings for one cache client.
///
/// All durations are milliseconds. The record is immutable once handed to
/// the factory; a client never observes configuration changes after
/// construction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CacheConfig {
    pub host: String,
    pub port: u16,
    pub db_index: Option<i64>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub key_prefix: String,
    pub pool_min: usize,
    pub pool_max: usize,
    pub connect_timeout_ms: u64,
    pub acquire_timeout_ms: u64,
    pub call_timeout_ms: u64,
    pub idle_validate_ms: u64,
    pub max_retries: u32,
    pub retry_base_delay_ms: u64,
    pub retry_max_delay_ms: u64,
    pub circuit_failure_threshold: u32,
    pub circuit_window_ms: u64,
    pub circuit_cooldown_ms: u64,
}
