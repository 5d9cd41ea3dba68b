//! Configuration management module.
//!
//! The cache client is configured through a single [`structs::cache_config::CacheConfig`]
//! record covering connection endpoints, pool bounds, timeouts, retry policy
//! and circuit-breaker settings. Records deserialize from TOML and every
//! field carries a documented default.
//!
//! # Example
//!
//! ```rust,ignore
//! use cachelink::config::structs::cache_config::CacheConfig;
//!
//! let config = CacheConfig::load_file("cache.toml")?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Implementation blocks for configuration loading and validation.
pub mod impls;

/// Configuration data structures.
pub mod structs;

/// Configuration unit tests.
pub mod tests;
