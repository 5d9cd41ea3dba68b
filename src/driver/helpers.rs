use std::time::Duration;
use crate::driver::enums::cache_request::{CacheRequest, CacheResponse};
use crate::driver::traits::cache_driver::CacheConnection;
use crate::errors::CacheError;

/// Converts a TTL into the whole seconds the wire protocols expect.
///
/// Sub-second values round up so a short TTL never becomes "no expiry";
/// both Redis and Memcache treat 0 as persist-forever.
pub fn ttl_seconds(ttl: Duration) -> u64 {
    let mut seconds = ttl.as_secs();
    if ttl.subsec_nanos() > 0 {
        seconds += 1;
    }
    seconds
}

/// Dispatches one request on a checked-out connection.
pub async fn dispatch(
    connection: &mut dyn CacheConnection,
    request: &CacheRequest,
) -> Result<CacheResponse, CacheError> {
    match request {
        CacheRequest::Get { key } => Ok(CacheResponse::Value(connection.get(key).await?)),
        CacheRequest::Set { key, value, ttl } => {
            connection.set(key, value, *ttl).await?;
            Ok(CacheResponse::Done)
        }
        CacheRequest::Delete { key } => Ok(CacheResponse::Deleted(connection.delete(key).await?)),
        CacheRequest::Exists { key } => Ok(CacheResponse::Exists(connection.exists(key).await?)),
        CacheRequest::Ping => {
            connection.ping().await?;
            Ok(CacheResponse::Done)
        }
    }
}
