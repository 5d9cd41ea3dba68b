use std::sync::Arc;
use std::time::Duration;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::resilience::structs::circuit_breaker::CircuitBreaker;
use crate::resilience::structs::retry_policy::RetryPolicy;

/// Composes timeout, retry and circuit breaking around the pool.
///
/// The per-call timeout bounds the driver operation only; acquisition is
/// bounded separately inside the pool so a capacity wait can never be
/// mistaken for a backend failure.
#[derive(Debug, Clone)]
pub struct ResilienceWrapper {
    pub(crate) pool: Arc<ConnectionPool>,
    pub(crate) breaker: CircuitBreaker,
    pub(crate) retry: RetryPolicy,
    pub(crate) call_timeout: Duration,
}
