use std::time::Duration;

/// One backend operation, carried through the resilience layer so a failed
/// attempt can be re-dispatched verbatim on a fresh connection.
#[derive(Debug, Clone)]
pub enum CacheRequest {
    Get { key: String },
    Set { key: String, value: Vec<u8>, ttl: Option<Duration> },
    Delete { key: String },
    Exists { key: String },
    Ping,
}

/// Result of a dispatched [`CacheRequest`].
///
/// A missing key is a normal negative result at this level; the facade
/// decides whether it becomes an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResponse {
    Value(Option<Vec<u8>>),
    Deleted(bool),
    Exists(bool),
    Done,
}

impl CacheRequest {
    pub fn operation(&self) -> &'static str {
        match self {
            CacheRequest::Get { .. } => "get",
            CacheRequest::Set { .. } => "set",
            CacheRequest::Delete { .. } => "delete",
            CacheRequest::Exists { .. } => "exists",
            CacheRequest::Ping => "ping",
        }
    }
}
