use log::{info, warn};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;
use crate::errors::CacheError;
use crate::resilience::enums::circuit_state::CircuitState;
use crate::resilience::structs::circuit_admission::CircuitAdmission;
use crate::resilience::structs::circuit_breaker::{CircuitBreaker, CircuitLedger, CircuitSettings};

impl CircuitBreaker {
    pub fn new(settings: CircuitSettings) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(CircuitLedger {
                state: CircuitState::Closed,
                recent_failures: Vec::new(),
                trial_in_flight: false,
            })),
            settings,
        }
    }

    /// Gatekeeper for one call. Closed admits freely; Open rejects until
    /// the cooldown deadline, then flips to HalfOpen and admits exactly one
    /// trial; HalfOpen rejects while that trial is out.
    pub fn admit(&self, operation: &'static str) -> Result<CircuitAdmission, CacheError> {
        let mut ledger = self.ledger.lock();
        match ledger.state {
            CircuitState::Closed => Ok(self.admission(false)),
            CircuitState::Open { until } => {
                let now = Instant::now();
                if now >= until {
                    ledger.state = CircuitState::HalfOpen;
                    ledger.trial_in_flight = true;
                    info!("[Circuit] cooldown elapsed, admitting one trial call");
                    Ok(self.admission(true))
                } else {
                    Err(CacheError::CircuitOpen(format!(
                        "{} rejected for another {:?}",
                        operation,
                        until - now
                    )))
                }
            }
            CircuitState::HalfOpen => {
                if ledger.trial_in_flight {
                    Err(CacheError::CircuitOpen(format!("{} rejected, trial call in flight", operation)))
                } else {
                    ledger.trial_in_flight = true;
                    Ok(self.admission(true))
                }
            }
        }
    }

    pub fn state(&self) -> CircuitState {
        self.ledger.lock().state
    }

    fn admission(&self, trial: bool) -> CircuitAdmission {
        CircuitAdmission {
            breaker: self.clone(),
            trial,
            settled: false,
        }
    }

    pub(crate) fn record_success(&self, trial: bool) {
        let mut ledger = self.ledger.lock();
        if trial {
            ledger.state = CircuitState::Closed;
            ledger.recent_failures.clear();
            ledger.trial_in_flight = false;
            info!("[Circuit] trial call succeeded, closing circuit");
            return;
        }
        // Open wins over a concurrent success from an older call.
        if matches!(ledger.state, CircuitState::Closed) {
            ledger.recent_failures.clear();
        }
    }

    pub(crate) fn record_failure(&self, trial: bool) {
        let now = Instant::now();
        let mut ledger = self.ledger.lock();
        if trial {
            ledger.trial_in_flight = false;
            ledger.state = CircuitState::Open { until: now + self.settings.cooldown };
            warn!("[Circuit] trial call failed, reopening for {:?}", self.settings.cooldown);
            return;
        }
        let window = self.settings.window;
        ledger.recent_failures.push(now);
        ledger.recent_failures.retain(|at| now.duration_since(*at) <= window);
        if matches!(ledger.state, CircuitState::Closed)
            && ledger.recent_failures.len() as u32 >= self.settings.failure_threshold {
                ledger.state = CircuitState::Open { until: now + self.settings.cooldown };
                warn!(
                    "[Circuit] {} consecutive failures, opening circuit for {:?}",
                    ledger.recent_failures.len(),
                    self.settings.cooldown
                );
            }
    }

    pub(crate) fn release_trial(&self) {
        let mut ledger = self.ledger.lock();
        if ledger.trial_in_flight {
            ledger.trial_in_flight = false;
            info!("[Circuit] trial call abandoned without an outcome");
        }
    }
}
