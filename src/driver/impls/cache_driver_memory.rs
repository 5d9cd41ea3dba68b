use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use std::time::{Duration, Instant};
use crate::driver::structs::cache_driver_memory::{
    CacheConnectionMemory,
    CacheDriverMemory,
    MemoryEntry,
    MemoryStore
};
use crate::driver::traits::cache_driver::{CacheConnection, CacheDriver};
use crate::errors::CacheError;

impl Default for CacheDriverMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheDriverMemory {
    pub fn new() -> Self {
        Self { store: Arc::new(MemoryStore::default()) }
    }

    /// The next `count` connect attempts fail with a transient error.
    pub fn fail_connects(&self, count: u32) {
        self.store.control.lock().failing_connects = count;
    }

    /// The next `count` requests fail with a transient error.
    pub fn fail_requests(&self, count: u32) {
        self.store.control.lock().failing_requests = count;
    }

    pub fn connect_count(&self) -> u64 {
        self.store.control.lock().connects
    }

    pub fn request_count(&self) -> u64 {
        self.store.control.lock().requests
    }

    /// Keys currently held, as the backend sees them (prefixed).
    pub fn keys(&self) -> Vec<String> {
        self.store.entries.lock().keys().cloned().collect()
    }
}

impl MemoryStore {
    /// Counts the request and applies any injected fault before the
    /// operation touches the store.
    fn begin_request(&self) -> Result<(), CacheError> {
        let mut control = self.control.lock();
        control.requests += 1;
        if control.failing_requests > 0 {
            control.failing_requests -= 1;
            return Err(CacheError::ConnectionError("injected request failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheDriver for CacheDriverMemory {
    async fn connect(&self) -> Result<Box<dyn CacheConnection>, CacheError> {
        {
            let mut control = self.store.control.lock();
            control.connects += 1;
            if control.failing_connects > 0 {
                control.failing_connects -= 1;
                return Err(CacheError::ConnectionError("injected connect failure".to_string()));
            }
        }
        debug!("[Memory] opened connection");
        Ok(Box::new(CacheConnectionMemory { store: Arc::clone(&self.store) }))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[async_trait]
impl CacheConnection for CacheConnectionMemory {
    async fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.store.begin_request()?;
        let mut entries = self.store.entries.lock();
        match entries.get(key) {
            Some(entry) => {
                if entry.expires_at.is_some_and(|at| at <= Instant::now()) {
                    entries.remove(key);
                    Ok(None)
                } else {
                    Ok(Some(entry.value.clone()))
                }
            }
            None => Ok(None),
        }
    }

    async fn set(&mut self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), CacheError> {
        self.store.begin_request()?;
        // Last write wins; a zero TTL means no expiry, matching the wire
        // backends.
        let expires_at = ttl
            .filter(|ttl| !ttl.is_zero())
            .map(|ttl| Instant::now() + ttl);
        self.store.entries.lock().insert(
            key.to_string(),
            MemoryEntry { value: value.to_vec(), expires_at },
        );
        Ok(())
    }

    async fn delete(&mut self, key: &str) -> Result<bool, CacheError> {
        self.store.begin_request()?;
        Ok(self.store.entries.lock().remove(key).is_some())
    }

    async fn exists(&mut self, key: &str) -> Result<bool, CacheError> {
        self.store.begin_request()?;
        let mut entries = self.store.entries.lock();
        match entries.get(key) {
            Some(entry) => {
                if entry.expires_at.is_some_and(|at| at <= Instant::now()) {
                    entries.remove(key);
                    Ok(false)
                } else {
                    Ok(true)
                }
            }
            None => Ok(false),
        }
    }

    async fn ping(&mut self) -> Result<(), CacheError> {
        self.store.begin_request()?;
        Ok(())
    }
}
