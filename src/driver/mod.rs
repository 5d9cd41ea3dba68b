//! Backend driver module.
//!
//! A driver is a connection factory plus a connection type for one concrete
//! caching technology. The [`traits::cache_driver::CacheDriver`] trait hides
//! the backend's wire protocol; everything above this layer speaks in keys,
//! opaque byte values and TTLs.
//!
//! # Variants
//!
//! - **Redis**: one multiplexed async connection per pooled connection,
//!   GET/SET/SETEX/DEL/EXISTS/PING through the `redis` crate
//! - **Memcache**: one client per pooled connection through the `memcache`
//!   crate; the protocol has no exists verb, so `exists` is emulated via get
//! - **Memory**: an in-process store shared by all of its connections,
//!   simulating one backend server; supports failure injection and request
//!   counters so pool and resilience behavior can be validated without a
//!   live network dependency
//!
//! A driver is safe to invoke concurrently on distinct connections but a
//! single connection is never shared between callers; the pool guarantees
//! exclusive checkout.

/// Request and response shapes dispatched to a connection.
pub mod enums;

/// TTL conversion and request dispatch helpers.
pub mod helpers;

/// Implementation blocks for the driver variants.
pub mod impls;

/// Data structures for the driver variants.
pub mod structs;

/// Driver and connection trait definitions.
pub mod traits;
