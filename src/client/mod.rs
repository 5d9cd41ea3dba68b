//! Cache client facade and factory.
//!
//! The [`structs::cache_client::CacheClient`] is the sole surface
//! application code depends on: `get`, `set`, `delete`, `exists` and `ping`,
//! all with local key validation and prefixing before anything touches the
//! network. The [`structs::client_factory::ClientFactory`] is the single
//! assembly point where a driver, its pool and the resilience wrapper get
//! wired together for a requested backend kind, so adding a backend means
//! one driver plus one registry entry.
//!
//! # Example
//!
//! ```rust,ignore
//! use cachelink::client::enums::backend_kind::BackendKind;
//! use cachelink::client::structs::client_factory::ClientFactory;
//!
//! let client = ClientFactory::new().create(BackendKind::memcache, &config)?;
//! if client.exists("session:1").await? {
//!     let value = client.get("session:1").await?;
//! }
//! ```

/// Backend kind enumeration.
pub mod enums;

/// Implementation blocks for the facade and factory.
pub mod impls;

/// Facade and factory structures.
pub mod structs;

/// Client unit tests.
pub mod tests;
