/// Memcache driver and connection.
pub mod cache_driver_memcache;

/// In-memory driver, connection and shared store.
pub mod cache_driver_memory;

/// Redis driver and connection.
pub mod cache_driver_redis;
