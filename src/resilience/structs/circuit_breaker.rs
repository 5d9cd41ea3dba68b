use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use crate::resilience::enums::circuit_state::CircuitState;

/// Failure-isolation state machine for one backend.
///
/// All transitions happen under one mutex with a monotonic rule: a
/// concurrent success can never close a circuit that a failure just
/// opened within the same evaluation window. Cheap to clone; clones share
/// the ledger.
#[derive(Debug, Clone)]
pub struct CircuitBreaker {
    pub(crate) ledger: Arc<Mutex<CircuitLedger>>,
    pub(crate) settings: CircuitSettings,
}

#[derive(Debug, Clone, Copy)]
pub struct CircuitSettings {
    pub failure_threshold: u32,
    pub window: Duration,
    pub cooldown: Duration,
}

#[derive(Debug)]
pub(crate) struct CircuitLedger {
    pub(crate) state: CircuitState,
    /// Timestamps of the current consecutive-failure run, pruned to the
    /// rolling window. Cleared by any success.
    pub(crate) recent_failures: Vec<Instant>,
    /// True while the single HalfOpen trial call is out.
    pub(crate) trial_in_flight: bool,
}
