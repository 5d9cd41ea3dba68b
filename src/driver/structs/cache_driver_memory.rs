use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// In-process backend used for tests, development and degraded-mode
/// deployments that want the cache contract without a network dependency.
///
/// The store is shared by every connection the driver hands out, simulating
/// one backend server. Clones of the driver share the same store so tests
/// can keep a handle for inspection and failure injection while the client
/// owns the driver.
#[derive(Debug, Clone)]
pub struct CacheDriverMemory {
    pub(crate) store: Arc<MemoryStore>,
}

#[derive(Debug)]
pub struct CacheConnectionMemory {
    pub(crate) store: Arc<MemoryStore>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) entries: Mutex<HashMap<String, MemoryEntry>>,
    pub(crate) control: Mutex<MemoryControl>,
}

#[derive(Debug, Clone)]
pub struct MemoryEntry {
    pub(crate) value: Vec<u8>,
    pub(crate) expires_at: Option<Instant>,
}

/// Failure-injection switches and observation counters.
#[derive(Debug, Default)]
pub struct MemoryControl {
    pub(crate) failing_connects: u32,
    pub(crate) failing_requests: u32,
    pub(crate) connects: u64,
    pub(crate) requests: u64,
}
