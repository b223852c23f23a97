use crate::cache::structs::ketama_ring::KetamaRing;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use std::sync::atomic::AtomicBool;
use tokio::sync::OnceCell;

#[derive(Debug)]
pub struct RedisNode {
    pub(crate) address: String,
    pub(crate) client: redis::Client,
    pub(crate) manager_config: ConnectionManagerConfig,
    pub(crate) connection: OnceCell<ConnectionManager>,
}

#[derive(Debug)]
pub struct CacheConnectorRedis {
    pub(crate) nodes: Vec<RedisNode>,
    pub(crate) ring: KetamaRing,
    pub(crate) shut_down: AtomicBool,
}
