use crate::cache::traits::cache_backend::CacheBackend;
use std::sync::Arc;

/// Long-lived client handles shared by every caller. In a shared-pool layout
/// `read` and `write` point at the same client.
#[derive(Clone)]
pub struct TopologyClients {
    pub read: Arc<dyn CacheBackend>,
    pub write: Arc<dyn CacheBackend>,
    pub backup: Option<Arc<dyn CacheBackend>>,
}
