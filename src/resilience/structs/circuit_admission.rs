use crate::resilience::structs::circuit_breaker::CircuitBreaker;

/// Outcome handle for one call admitted through the breaker.
///
/// Exactly one of `succeed`/`fail` should be called with the call's
/// outcome. An admission dropped without an outcome (the caller was
/// cancelled) releases a HalfOpen trial slot without transitioning:
/// an abandoned probe is no evidence either way.
pub struct CircuitAdmission {
    pub(crate) breaker: CircuitBreaker,
    pub(crate) trial: bool,
    pub(crate) settled: bool,
}
