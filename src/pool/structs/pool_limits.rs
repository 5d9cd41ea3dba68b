use std::time::Duration;

/// Pool sizing and timing bounds, fixed at construction. There is no
/// dynamic resizing.
#[derive(Debug, Clone)]
pub struct PoolLimits {
    pub pool_min: usize,
    pub pool_max: usize,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_validate: Duration,
}
