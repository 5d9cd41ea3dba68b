use std::time::Duration;
use crate::resilience::structs::retry_policy::RetryPolicy;

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self { max_retries, base_delay, max_delay }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Backoff before re-running attempt `attempt + 1` (zero-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}
