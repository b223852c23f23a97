use crate::cache::structs::ketama_ring::KetamaRing;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

pub struct MemcacheNode {
    pub(crate) address: String,
    pub(crate) url: String,
    pub(crate) pool_size: u32,
    pub(crate) retry_after: Duration,
    pub(crate) client: Mutex<Option<Arc<memcache::Client>>>,
    pub(crate) last_failure: Mutex<Option<Instant>>,
    pub(crate) connecting: AtomicBool,
}

pub struct CacheConnectorMemcache {
    pub(crate) nodes: Arc<Vec<MemcacheNode>>,
    pub(crate) ring: KetamaRing,
    pub(crate) shut_down: AtomicBool,
}
