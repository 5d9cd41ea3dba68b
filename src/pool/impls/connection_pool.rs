use log::{debug, warn};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::time::timeout;
use crate::driver::traits::cache_driver::{CacheConnection, CacheDriver};
use crate::errors::CacheError;
use crate::pool::structs::connection_pool::{ConnectionPool, IdleConnection};
use crate::pool::structs::pool_limits::PoolLimits;
use crate::pool::structs::pool_status::PoolStatus;
use crate::pool::structs::pooled_connection::PooledConnection;

impl ConnectionPool {
    /// Builds the pool and spawns a best-effort warm-up of `pool_min`
    /// connections. Construction itself never touches the network, so a
    /// down backend surfaces on first use, not at assembly time.
    pub fn new(driver: Arc<dyn CacheDriver>, limits: PoolLimits) -> Arc<ConnectionPool> {
        let pool = Arc::new(ConnectionPool {
            driver,
            permits: Arc::new(Semaphore::new(limits.pool_max)),
            ledger: Mutex::default(),
            limits,
        });
        pool.spawn_warmup();
        pool
    }

    /// Checks a connection out, blocking up to the acquisition timeout for
    /// capacity. A connection idle past the revalidation threshold must
    /// answer a ping first; one that fails is discarded and the acquisition
    /// falls through to a fresh connect.
    pub async fn acquire(self: &Arc<Self>) -> Result<PooledConnection, CacheError> {
        let permit = match timeout(
            self.limits.acquire_timeout,
            Arc::clone(&self.permits).acquire_owned(),
        ).await {
            Ok(Ok(permit)) => permit,
            Ok(Err(_)) => {
                return Err(CacheError::PoolExhausted("connection pool is closed".to_string()));
            }
            Err(_) => {
                return Err(CacheError::PoolExhausted(format!(
                    "no connection available within {:?}",
                    self.limits.acquire_timeout
                )));
            }
        };

        loop {
            let parked = { self.ledger.lock().idle.pop() };
            match parked {
                Some(idle) => {
                    let mut connection = idle.connection;
                    if idle.parked_at.elapsed() >= self.limits.idle_validate {
                        match timeout(self.limits.connect_timeout, connection.ping()).await {
                            Ok(Ok(())) => {}
                            Ok(Err(e)) => {
                                debug!("[Pool] discarding stale {} connection: {}", self.driver.name(), e);
                                continue;
                            }
                            Err(_) => {
                                debug!("[Pool] discarding stale {} connection: revalidation timed out", self.driver.name());
                                continue;
                            }
                        }
                    }
                    self.ledger.lock().in_use += 1;
                    return Ok(PooledConnection::checked_out(connection, Arc::clone(self), permit));
                }
                None => {
                    let at_capacity = {
                        let mut ledger = self.ledger.lock();
                        if ledger.idle.len() + ledger.in_use + ledger.pending >= self.limits.pool_max {
                            true
                        } else {
                            ledger.pending += 1;
                            false
                        }
                    };
                    if at_capacity {
                        // Capacity is accounted for elsewhere; an idle
                        // connection must be about to appear.
                        tokio::task::yield_now().await;
                        continue;
                    }
                    let connected = timeout(self.limits.connect_timeout, self.driver.connect()).await;
                    self.ledger.lock().pending -= 1;
                    return match connected {
                        Ok(Ok(connection)) => {
                            self.ledger.lock().in_use += 1;
                            Ok(PooledConnection::checked_out(connection, Arc::clone(self), permit))
                        }
                        Ok(Err(e)) => Err(e),
                        Err(_) => Err(CacheError::Timeout("connect")),
                    };
                }
            }
        }
    }

    pub fn status(&self) -> PoolStatus {
        let ledger = self.ledger.lock();
        PoolStatus {
            idle: ledger.idle.len(),
            in_use: ledger.in_use,
            pending: ledger.pending,
            max: self.limits.pool_max,
        }
    }

    /// Returns a healthy connection to the idle set.
    pub(crate) fn park(&self, connection: Box<dyn CacheConnection>) {
        let mut ledger = self.ledger.lock();
        ledger.in_use -= 1;
        ledger.idle.push(IdleConnection { connection, parked_at: Instant::now() });
    }

    /// Drops a broken or interrupted connection and spawns a best-effort
    /// replacement while the pool sits below its minimum.
    pub(crate) fn discard(self: &Arc<Self>, connection: Box<dyn CacheConnection>, interrupted: bool) {
        drop(connection);
        let below_min = {
            let mut ledger = self.ledger.lock();
            ledger.in_use -= 1;
            ledger.idle.len() + ledger.in_use + ledger.pending < self.limits.pool_min
        };
        debug!(
            "[Pool] discarded {} connection ({})",
            self.driver.name(),
            if interrupted { "interrupted mid-request" } else { "broken" }
        );
        if below_min
            && let Ok(handle) = tokio::runtime::Handle::try_current() {
                let pool = Arc::clone(self);
                handle.spawn(async move {
                    pool.add_idle_connection().await;
                });
            }
    }

    fn spawn_warmup(self: &Arc<Self>) {
        if self.limits.pool_min == 0 {
            return;
        }
        // No runtime means no warm-up; lazy connects cover the gap.
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let pool = Arc::clone(self);
        handle.spawn(async move {
            for _ in 0..pool.limits.pool_min {
                if !pool.add_idle_connection().await {
                    break;
                }
            }
        });
    }

    /// Connects one idle connection, capacity-checked. Failures are logged,
    /// never surfaced; the first failure stops a warm-up run.
    pub(crate) async fn add_idle_connection(&self) -> bool {
        {
            let mut ledger = self.ledger.lock();
            if ledger.idle.len() + ledger.in_use + ledger.pending >= self.limits.pool_max {
                return false;
            }
            ledger.pending += 1;
        }
        let connected = timeout(self.limits.connect_timeout, self.driver.connect()).await;
        let mut ledger = self.ledger.lock();
        ledger.pending -= 1;
        match connected {
            Ok(Ok(connection)) => {
                ledger.idle.push(IdleConnection { connection, parked_at: Instant::now() });
                true
            }
            Ok(Err(e)) => {
                warn!("[Pool] {} warm-up connect failed: {}", self.driver.name(), e);
                false
            }
            Err(_) => {
                warn!("[Pool] {} warm-up connect timed out", self.driver.name());
                false
            }
        }
    }
}

impl std::fmt::Debug for ConnectionPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ledger = self.ledger.lock();
        f.debug_struct("ConnectionPool")
            .field("driver", &self.driver.name())
            .field("idle", &ledger.idle.len())
            .field("in_use", &ledger.in_use)
            .field("pending", &ledger.pending)
            .field("max", &self.limits.pool_max)
            .finish()
    }
}
