/// Outcome handle for one admitted call.
pub mod circuit_admission;

/// Per-client circuit breaker.
pub mod circuit_breaker;

/// Bounded exponential backoff policy.
pub mod retry_policy;

/// Timeout, retry and breaker composition around the pool.
pub mod resilience_wrapper;
