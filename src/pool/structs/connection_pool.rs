use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use crate::driver::traits::cache_driver::{CacheConnection, CacheDriver};
use crate::pool::structs::pool_limits::PoolLimits;

/// Bounded pool of live connections for one driver.
///
/// The ledger mutex guards only the counters and the idle set; connects and
/// pings happen outside it. Checkout capacity is gated by the semaphore so
/// acquisition can block (bounded) without holding the lock.
pub struct ConnectionPool {
    pub(crate) driver: Arc<dyn CacheDriver>,
    pub(crate) limits: PoolLimits,
    pub(crate) permits: Arc<Semaphore>,
    pub(crate) ledger: Mutex<PoolLedger>,
}

#[derive(Default)]
pub(crate) struct PoolLedger {
    pub(crate) idle: Vec<IdleConnection>,
    pub(crate) in_use: usize,
    pub(crate) pending: usize,
}

pub(crate) struct IdleConnection {
    pub(crate) connection: Box<dyn CacheConnection>,
    pub(crate) parked_at: Instant,
}
