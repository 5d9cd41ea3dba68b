//! # cachelink
//!
//! A unified, resilient caching client for Rust. Heterogeneous caching
//! backends (Redis, Memcache, an in-process store) are normalized behind a
//! single capability-set interface with connection pooling and a uniform
//! resilience policy applied regardless of backend.
//!
//! ## Overview
//!
//! Application code talks to a [`client::structs::cache_client::CacheClient`]
//! built by the [`client::structs::client_factory::ClientFactory`]. Every
//! facade call travels through the resilience layer (per-call timeout, retry
//! with exponential backoff, circuit breaker), borrows a connection from the
//! bounded pool, and dispatches to the backend driver that owns the wire
//! protocol.
//!
//! ## Features
//!
//! - **Pluggable Drivers**: Redis, Memcache and an in-memory backend behind
//!   one async trait; new backends register with the factory without
//!   touching the facade or the resilience layer
//! - **Connection Pooling**: bounded pool with warm-up, bounded acquisition,
//!   idle revalidation by ping and discard-and-replace of broken connections
//! - **Resilience**: per-call timeouts, bounded retries with exponential
//!   backoff, and a Closed/Open/HalfOpen circuit breaker per client
//! - **Uniform Errors**: one error taxonomy regardless of backend, with a
//!   single transient/terminal classification point
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cachelink::client::enums::backend_kind::BackendKind;
//! use cachelink::client::structs::client_factory::ClientFactory;
//! use cachelink::config::structs::cache_config::CacheConfig;
//!
//! let config = CacheConfig::load_file("cache.toml")?;
//! let client = ClientFactory::new().create(BackendKind::redis, &config)?;
//!
//! client.set("session:1", b"payload", None).await?;
//! let value = client.get("session:1").await?;
//! ```
//!
//! ## Modules
//!
//! - [`client`] - facade, backend selection and the client factory
//! - [`config`] - configuration record and TOML parsing
//! - [`driver`] - per-backend adapters owning the wire protocols
//! - [`errors`] - the error taxonomy shared by every layer
//! - [`pool`] - bounded connection pool with lifecycle management
//! - [`resilience`] - timeout, retry and circuit-breaker policy

/// Cache client facade and factory.
///
/// Contains the public operations application code depends on (`get`, `set`,
/// `delete`, `exists`, `ping`), local key validation and prefixing, and the
/// factory that assembles a client for a requested backend kind.
pub mod client;

/// Configuration management module.
///
/// Handles loading, parsing and validating the cache client configuration
/// from TOML files, with defaults for every tunable.
pub mod config;

/// Backend driver module.
///
/// Defines the driver and connection traits plus the Redis, Memcache and
/// in-memory implementations. Drivers own their backend's request framing;
/// nothing above this layer knows wire details.
pub mod driver;

/// Error types shared across the crate.
pub mod errors;

/// Connection pool module.
///
/// Bounded per-client pool with warm-up, bounded blocking acquisition,
/// idle revalidation and automatic replacement of broken connections.
pub mod pool;

/// Resilience policy module.
///
/// Per-call timeout, retry with exponential backoff, and the circuit
/// breaker state machine that isolates a failing backend.
pub mod resilience;
