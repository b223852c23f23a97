use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memory::{CacheConnectorMemory, MemoryEntry};
use crate::cache::structs::cache_value::CacheValue;
use crate::cache::traits::cache_backend::CacheBackend;
use ahash::AHashMap;
use async_trait::async_trait;
use log::{debug, info};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::time::Instant;

impl MemoryEntry {
    pub fn new(value: &CacheValue) -> MemoryEntry {
        let expires_at = match value.expiration {
            0 => None,
            seconds => Some(Instant::now() + Duration::from_secs(u64::from(seconds))),
        };
        MemoryEntry {
            payload: value.payload.clone(),
            expires_at,
            category: value.category.clone(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    fn counter_value(&self) -> Result<u64, CacheError> {
        std::str::from_utf8(&self.payload)
            .ok()
            .and_then(|text| text.trim().parse::<u64>().ok())
            .ok_or_else(|| CacheError::OperationError("cannot increment or decrement non-numeric value".to_string()))
    }
}

impl CacheConnectorMemory {
    pub fn new(name: &str) -> CacheConnectorMemory {
        CacheConnectorMemory {
            name: name.to_string(),
            entries: Mutex::new(AHashMap::new()),
            shut_down: AtomicBool::new(false),
        }
    }

    fn ensure_open(&self) -> Result<(), CacheError> {
        if self.shut_down.load(Ordering::SeqCst) {
            return Err(CacheError::ShutDown);
        }
        Ok(())
    }

    /// Runs `operation` against the live entry for `key`, dropping it first if expired.
    fn with_live_entry<T>(&self, key: &str, operation: impl FnOnce(&mut AHashMap<String, MemoryEntry>, bool) -> T) -> T {
        let mut entries = self.entries.lock();
        let now = Instant::now();
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
        }
        let present = entries.contains_key(key);
        operation(&mut entries, present)
    }

    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.lock().values().filter(|entry| !entry.is_expired(now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn category_of(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).and_then(|entry| entry.category.clone())
    }

    fn adjust(&self, key: &str, apply: impl FnOnce(u64) -> u64) -> Result<Option<u64>, CacheError> {
        self.ensure_open()?;
        self.with_live_entry(key, |entries, _| match entries.get_mut(key) {
            None => Ok(None),
            Some(entry) => {
                let next = apply(entry.counter_value()?);
                entry.payload = next.to_string().into_bytes();
                Ok(Some(next))
            }
        })
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemory {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.ensure_open()?;
        Ok(self.with_live_entry(key, |entries, _| entries.get(key).map(|entry| entry.payload.clone())))
    }

    async fn get_bulk(&self, keys: &[String]) -> Result<HashMap<String, Vec<u8>>, CacheError> {
        self.ensure_open()?;
        let now = Instant::now();
        let entries = self.entries.lock();
        Ok(keys
            .iter()
            .filter_map(|key| {
                entries
                    .get(key)
                    .filter(|entry| !entry.is_expired(now))
                    .map(|entry| (key.clone(), entry.payload.clone()))
            })
            .collect())
    }

    async fn set(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError> {
        self.ensure_open()?;
        self.entries.lock().insert(key.to_string(), MemoryEntry::new(value));
        debug!("[Memory] {} set {} ({} bytes)", self.name, key, value.payload.len());
        Ok(true)
    }

    async fn add(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError> {
        self.ensure_open()?;
        Ok(self.with_live_entry(key, |entries, present| {
            if present {
                return false;
            }
            entries.insert(key.to_string(), MemoryEntry::new(value));
            true
        }))
    }

    async fn replace(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError> {
        self.ensure_open()?;
        Ok(self.with_live_entry(key, |entries, present| {
            if !present {
                return false;
            }
            entries.insert(key.to_string(), MemoryEntry::new(value));
            true
        }))
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        self.ensure_open()?;
        Ok(self.with_live_entry(key, |entries, present| present && entries.remove(key).is_some()))
    }

    async fn increment(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError> {
        self.adjust(key, |current| current.wrapping_add(amount))
    }

    async fn decrement(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError> {
        self.adjust(key, |current| current.saturating_sub(amount))
    }

    async fn flush(&self) -> Result<(), CacheError> {
        self.ensure_open()?;
        self.entries.lock().clear();
        Ok(())
    }

    fn shutdown(&self) {
        if !self.shut_down.swap(true, Ordering::SeqCst) {
            self.entries.lock().clear();
            info!("[Memory] Pool {} shut down", self.name);
        }
    }

    fn describe(&self) -> String {
        format!("memory[{}]", self.name)
    }
}
