pub mod cache_connector_memcache;
pub mod cache_connector_memory;
pub mod cache_connector_redis;
pub mod cache_engine;
pub mod cache_value;
pub mod ketama_ring;
