use thiserror::Error;

/// Unified error taxonomy for every cache operation.
///
/// Transient failures are absorbed and retried inside the resilience layer;
/// everything else propagates unchanged to the caller.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),

    #[error("{0} timed out")]
    Timeout(&'static str),

    #[error("Pool exhausted: {0}")]
    PoolExhausted(String),

    #[error("Circuit open: {0}")]
    CircuitOpen(String),

    #[error("Cache unavailable for {operation}: {source}")]
    Unavailable {
        operation: &'static str,
        source: Box<CacheError>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Memcache error: {0}")]
    MemcacheError(#[from] memcache::MemcacheError),
}

impl CacheError {
    /// Single classification point for the retry and circuit-breaker logic.
    ///
    /// Transient errors are network-class failures where another attempt can
    /// reasonably succeed. Driver-crate errors count only when they represent
    /// I/O-level failures; a backend that answered with a protocol error is
    /// reachable and therefore not transient.
    pub fn is_transient(&self) -> bool {
        match self {
            CacheError::ConnectionError(_) | CacheError::Timeout(_) => true,
            CacheError::RedisError(e) => {
                e.is_io_error()
                    || e.is_timeout()
                    || e.is_connection_dropped()
                    || e.is_connection_refusal()
            }
            CacheError::MemcacheError(e) => {
                matches!(e, memcache::MemcacheError::IOError(_))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_display() {
        let error = CacheError::InvalidKey("key must not be empty".to_string());
        assert_eq!(format!("{}", error), "Invalid key: key must not be empty");
    }

    #[test]
    fn test_key_not_found_display() {
        let error = CacheError::KeyNotFound("test_key".to_string());
        assert_eq!(format!("{}", error), "Key not found: test_key");
    }

    #[test]
    fn test_connection_error_display() {
        let error = CacheError::ConnectionError("failed to connect".to_string());
        assert_eq!(format!("{}", error), "Connection error: failed to connect");
    }

    #[test]
    fn test_timeout_display() {
        let error = CacheError::Timeout("get");
        assert_eq!(format!("{}", error), "get timed out");
    }

    #[test]
    fn test_unavailable_wraps_last_cause() {
        let error = CacheError::Unavailable {
            operation: "set",
            source: Box::new(CacheError::ConnectionError("wire reset".to_string())),
        };
        assert_eq!(
            format!("{}", error),
            "Cache unavailable for set: Connection error: wire reset"
        );
    }

    #[test]
    fn test_transient_classification() {
        assert!(CacheError::ConnectionError("down".to_string()).is_transient());
        assert!(CacheError::Timeout("get").is_transient());
        assert!(!CacheError::KeyNotFound("k".to_string()).is_transient());
        assert!(!CacheError::InvalidKey("empty".to_string()).is_transient());
        assert!(!CacheError::PoolExhausted("full".to_string()).is_transient());
        assert!(!CacheError::CircuitOpen("cooling down".to_string()).is_transient());
        assert!(!CacheError::ConfigError("missing host".to_string()).is_transient());
        assert!(!CacheError::OperationError("bad value".to_string()).is_transient());
    }

    #[test]
    fn test_unavailable_is_terminal() {
        let error = CacheError::Unavailable {
            operation: "get",
            source: Box::new(CacheError::Timeout("get")),
        };
        assert!(!error.is_transient());
    }

    #[test]
    fn test_error_debug() {
        let error = CacheError::ConnectionError("test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConnectionError"));
        assert!(debug_str.contains("test"));
    }
}
