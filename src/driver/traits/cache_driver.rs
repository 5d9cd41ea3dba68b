use async_trait::async_trait;
use std::time::Duration;
use crate::errors::CacheError;

/// Connection factory for one backend technology.
///
/// Implementations must be safe to call from any task; each successful
/// `connect` yields an independent connection the pool owns exclusively.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheDriver: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn CacheConnection>, CacheError>;

    fn name(&self) -> &'static str;
}

/// A single live transport handle to a backend instance.
///
/// Connections are checked out to exactly one in-flight call at a time, so
/// methods take `&mut self` and implementations need no internal locking
/// across callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheConnection: Send {
    async fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    async fn set(&mut self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Returns false when the key was not present.
    async fn delete(&mut self, key: &str) -> Result<bool, CacheError>;

    async fn exists(&mut self, key: &str) -> Result<bool, CacheError>;

    /// Lightweight no-op request used for idle revalidation and health probes.
    async fn ping(&mut self) -> Result<(), CacheError>;
}
