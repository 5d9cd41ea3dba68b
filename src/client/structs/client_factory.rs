use std::collections::BTreeMap;
use std::sync::Arc;
use crate::client::enums::backend_kind::BackendKind;
use crate::config::structs::cache_config::CacheConfig;
use crate::driver::traits::cache_driver::CacheDriver;
use crate::errors::CacheError;

/// Builds a driver for one backend kind from a configuration record.
pub type DriverConstructor =
    Box<dyn Fn(&CacheConfig) -> Result<Arc<dyn CacheDriver>, CacheError> + Send + Sync>;

/// Constructs configured [`crate::client::structs::cache_client::CacheClient`]s.
///
/// Backend selection is a registry from kind to driver constructor; the
/// built-in kinds register at construction and [`Self::register`] admits
/// replacements or new entries without touching the facade or the
/// resilience layer.
pub struct ClientFactory {
    pub(crate) constructors: BTreeMap<BackendKind, DriverConstructor>,
}
