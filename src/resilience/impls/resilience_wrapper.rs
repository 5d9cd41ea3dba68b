use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use crate::driver::enums::cache_request::{CacheRequest, CacheResponse};
use crate::errors::CacheError;
use crate::pool::structs::connection_pool::ConnectionPool;
use crate::resilience::structs::circuit_breaker::CircuitBreaker;
use crate::resilience::structs::resilience_wrapper::ResilienceWrapper;
use crate::resilience::structs::retry_policy::RetryPolicy;

impl ResilienceWrapper {
    pub fn new(
        pool: Arc<ConnectionPool>,
        breaker: CircuitBreaker,
        retry: RetryPolicy,
        call_timeout: Duration,
    ) -> Self {
        Self { pool, breaker, retry, call_timeout }
    }

    pub fn pool(&self) -> &Arc<ConnectionPool> {
        &self.pool
    }

    pub fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    /// Runs one request through breaker, pool and driver with bounded
    /// retries.
    ///
    /// Transient failures (connect errors, per-call timeouts, backend I/O
    /// errors) feed the breaker and retry with backoff; `PoolExhausted` and
    /// `CircuitOpen` surface immediately and are never retried. A
    /// non-transient backend error means the backend answered, so it counts
    /// as breaker success and propagates unchanged.
    pub async fn execute(&self, request: CacheRequest) -> Result<CacheResponse, CacheError> {
        let operation = request.operation();
        let mut attempt: u32 = 0;
        loop {
            let admission = self.breaker.admit(operation)?;

            let mut guard = match self.pool.acquire().await {
                Ok(guard) => guard,
                Err(error) if error.is_transient() => {
                    admission.fail();
                    if attempt >= self.retry.max_retries() {
                        return Err(CacheError::Unavailable { operation, source: Box::new(error) });
                    }
                    debug!("[Resilience] {} connect failed ({}), retry {} queued", operation, error, attempt + 1);
                    sleep(self.retry.delay_for(attempt)).await;
                    attempt += 1;
                    continue;
                }
                // PoolExhausted lands here: local capacity, not backend
                // health, so the admission drops unsettled.
                Err(error) => return Err(error),
            };

            let error = match timeout(self.call_timeout, guard.invoke(&request)).await {
                Ok(Ok(response)) => {
                    admission.succeed();
                    return Ok(response);
                }
                Ok(Err(error)) if error.is_transient() => {
                    guard.mark_broken();
                    admission.fail();
                    error
                }
                Ok(Err(error)) => {
                    admission.succeed();
                    return Err(error);
                }
                Err(_) => {
                    // The request is still on the wire; the guard's
                    // in-flight flag makes the drop below discard it.
                    admission.fail();
                    CacheError::Timeout(operation)
                }
            };
            drop(guard);

            if attempt >= self.retry.max_retries() {
                return Err(CacheError::Unavailable { operation, source: Box::new(error) });
            }
            debug!("[Resilience] {} attempt {} failed ({}), backing off", operation, attempt + 1, error);
            sleep(self.retry.delay_for(attempt)).await;
            attempt += 1;
        }
    }
}
