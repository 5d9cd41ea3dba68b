/// Circuit breaker states.
pub mod circuit_state;
