use std::time::Duration;

/// Bounded retry with exponential backoff.
///
/// Attempt `n` (zero-based) backs off `base_delay * 2^n`, capped at
/// `max_delay`. No jitter.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub(crate) max_retries: u32,
    pub(crate) base_delay: Duration,
    pub(crate) max_delay: Duration,
}
