/// Admission outcome recording and abandonment.
pub mod circuit_admission;

/// Breaker state transitions.
pub mod circuit_breaker;

/// Backoff computation.
pub mod retry_policy;

/// The execute loop.
pub mod resilience_wrapper;
