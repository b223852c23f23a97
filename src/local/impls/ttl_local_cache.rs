use crate::local::structs::ttl_local_cache::{LocalEntries, LocalEntry, TtlLocalCache};
use crate::local::traits::local_fallback_cache::LocalFallbackCache;
use log::debug;
use parking_lot::Mutex;
use std::time::Duration;
use tokio::time::Instant;

impl LocalEntries {
    pub fn insert(&mut self, key: &str, value: Vec<u8>, expires_at: Instant, category: &str) {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);
        let entry = LocalEntry {
            value,
            expires_at,
            sequence,
            category: category.to_string(),
        };
        if let Some(previous) = self.map.insert(key.to_string(), entry) {
            self.by_expiry.remove(&(previous.expires_at, previous.sequence));
        }
        self.by_expiry.insert((expires_at, sequence), key.to_string());
    }

    pub fn remove(&mut self, key: &str) -> Option<LocalEntry> {
        let entry = self.map.remove(key)?;
        self.by_expiry.remove(&(entry.expires_at, entry.sequence));
        Some(entry)
    }

    fn pop_soonest(&mut self) -> Option<(Instant, String)> {
        let ((expires_at, _), key) = self.by_expiry.pop_first()?;
        self.map.remove(&key);
        Some((expires_at, key))
    }

    /// Drops everything expired at `now`, then the soonest-expiring entries while still full.
    fn make_room(&mut self, capacity: usize, now: Instant) {
        while self.map.len() >= capacity {
            match self.by_expiry.first_key_value() {
                Some(((expires_at, _), _)) if *expires_at <= now => {
                    self.pop_soonest();
                }
                _ => break,
            }
        }
        while self.map.len() >= capacity {
            match self.pop_soonest() {
                Some((_, key)) => debug!("[LocalCache] Evicting {} to stay within {} entries", key, capacity),
                None => break,
            }
        }
    }
}

impl TtlLocalCache {
    pub fn new(capacity: usize) -> TtlLocalCache {
        TtlLocalCache {
            capacity: capacity.max(1),
            entries: Mutex::new(LocalEntries::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn category_of(&self, key: &str) -> Option<String> {
        self.entries.lock().map.get(key).map(|entry| entry.category.clone())
    }
}

impl LocalFallbackCache for TtlLocalCache {
    fn get(&self, key: &str, _category: &str) -> Option<Vec<u8>> {
        let mut entries = self.entries.lock();
        let now = Instant::now();
        match entries.map.get(key) {
            Some(entry) if entry.expires_at > now => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn set(&self, key: &str, value: Vec<u8>, ttl: Duration, category: &str) {
        let mut entries = self.entries.lock();
        let now = Instant::now();
        if !entries.map.contains_key(key) {
            entries.make_room(self.capacity, now);
        }
        entries.insert(key, value, now + ttl, category);
    }
}
