use std::sync::Arc;
use tokio::sync::OwnedSemaphorePermit;
use crate::driver::traits::cache_driver::CacheConnection;
use crate::pool::structs::connection_pool::ConnectionPool;

/// RAII guard for one checked-out connection.
///
/// Dropping the guard releases the connection on every exit path: back to
/// the idle set when healthy, discarded when marked broken or when a request
/// was still in flight (the caller was cancelled mid-call, so the wire state
/// is unknown). The capacity permit is released after the connection is
/// accounted for.
pub struct PooledConnection {
    pub(crate) connection: Option<Box<dyn CacheConnection>>,
    pub(crate) pool: Arc<ConnectionPool>,
    pub(crate) in_flight: bool,
    pub(crate) broken: bool,
    pub(crate) _permit: OwnedSemaphorePermit,
}
