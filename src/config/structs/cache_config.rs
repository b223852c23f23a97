use crate::cache::enums::cache_engine::CacheEngine;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CacheConfig {
    pub engine: CacheEngine,
    pub server_topology: Option<String>,
    pub operation_timeout_millis: u64,
    pub connect_timeout_millis: u64,
    /// Connections kept per memcache node.
    pub pool_size: u32,
    /// How long a node that failed to connect is skipped before the next attempt.
    pub reconnect_backoff_millis: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            engine: CacheEngine::memcache,
            server_topology: None,
            operation_timeout_millis: 2500,
            connect_timeout_millis: 1000,
            pool_size: 4,
            reconnect_backoff_millis: 1000,
        }
    }
}
