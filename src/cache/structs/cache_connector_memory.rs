use ahash::AHashMap;
use parking_lot::Mutex;
use std::sync::atomic::AtomicBool;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct MemoryEntry {
    pub(crate) payload: Vec<u8>,
    pub(crate) expires_at: Option<Instant>,
    pub(crate) category: Option<String>,
}

/// Single-process backend with memcached semantics, used for local
/// development and tests.
#[derive(Debug)]
pub struct CacheConnectorMemory {
    pub(crate) name: String,
    pub(crate) entries: Mutex<AHashMap<String, MemoryEntry>>,
    pub(crate) shut_down: AtomicBool,
}
