//! Resilience policy module.
//!
//! Every facade operation runs through
//! [`structs::resilience_wrapper::ResilienceWrapper::execute`]: circuit
//! admission, pool acquisition, then the driver call bounded by the per-call
//! timeout. Transient failures retry with exponential backoff up to the
//! configured bound, re-checking the breaker before every attempt;
//! `PoolExhausted` and `CircuitOpen` surface immediately. After retries are
//! exhausted the last transient cause is wrapped in `Unavailable`.
//!
//! The circuit breaker opens after N consecutive failures within a rolling
//! window, rejects calls fail-fast for a cooldown period, then admits
//! exactly one trial call: success closes it, failure restarts the
//! cooldown. A not-found result counts as backend success.

/// Circuit breaker state machine states.
pub mod enums;

/// Implementation blocks for the resilience layer.
pub mod impls;

/// Breaker, retry policy and wrapper structures.
pub mod structs;
