/// Memcache driver implementation.
pub mod cache_driver_memcache;

/// In-memory driver implementation.
pub mod cache_driver_memory;

/// Redis driver implementation.
pub mod cache_driver_redis;
