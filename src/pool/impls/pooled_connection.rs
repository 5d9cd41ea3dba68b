use std::sync::Arc;
use tokio::sync::OwnedSemaphorePermit;
use crate::driver::enums::cache_request::{CacheRequest, CacheResponse};
use crate::driver::helpers;
use crate::driver::traits::cache_driver::CacheConnection;
use crate::errors::CacheError;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::pool::structs::pooled_connection::PooledConnection;

impl PooledConnection {
    pub(crate) fn checked_out(
        connection: Box<dyn CacheConnection>,
        pool: Arc<ConnectionPool>,
        permit: OwnedSemaphorePermit,
    ) -> Self {
        Self {
            connection: Some(connection),
            pool,
            in_flight: false,
            broken: false,
            _permit: permit,
        }
    }

    /// Dispatches one request on the held connection.
    ///
    /// The in-flight flag spans the await: if the caller is cancelled while
    /// a request is on the wire, the guard drops with the flag still set and
    /// the connection is discarded instead of returned with unknown state.
    pub async fn invoke(&mut self, request: &CacheRequest) -> Result<CacheResponse, CacheError> {
        self.in_flight = true;
        let result = match self.connection.as_deref_mut() {
            Some(connection) => helpers::dispatch(connection, request).await,
            None => Err(CacheError::ConnectionError("connection already released".to_string())),
        };
        self.in_flight = false;
        result
    }

    /// Marks the connection for discard instead of reuse on release.
    pub fn mark_broken(&mut self) {
        self.broken = true;
    }
}

impl Drop for PooledConnection {
    fn drop(&mut self) {
        if let Some(connection) = self.connection.take() {
            if self.broken || self.in_flight {
                self.pool.discard(connection, self.in_flight);
            } else {
                self.pool.park(connection);
            }
        }
    }
}
