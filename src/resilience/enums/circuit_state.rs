use std::time::Instant;

/// Circuit breaker state for one backend.
///
/// Calls are rejected fail-fast only while Open (and while a HalfOpen
/// trial is already in flight).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Normal operation.
    Closed,

    /// Backend considered down; calls rejected until the cooldown deadline.
    Open { until: Instant },

    /// Cooldown elapsed; one trial call decides the next state.
    HalfOpen,
}

impl CircuitState {
    pub fn name(&self) -> &'static str {
        match self {
            CircuitState::Closed => "Closed",
            CircuitState::Open { .. } => "Open",
            CircuitState::HalfOpen => "HalfOpen",
        }
    }
}
