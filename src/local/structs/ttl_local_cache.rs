use ahash::AHashMap;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct LocalEntry {
    pub(crate) value: Vec<u8>,
    pub(crate) expires_at: Instant,
    pub(crate) sequence: u64,
    pub(crate) category: String,
}

/// Entries plus an index ordered by expiry, so the next entry to drop is always first.
#[derive(Debug, Default)]
pub struct LocalEntries {
    pub(crate) map: AHashMap<String, LocalEntry>,
    pub(crate) by_expiry: BTreeMap<(Instant, u64), String>,
    pub(crate) next_sequence: u64,
}

#[derive(Debug)]
pub struct TtlLocalCache {
    pub(crate) capacity: usize,
    pub(crate) entries: Mutex<LocalEntries>,
}
