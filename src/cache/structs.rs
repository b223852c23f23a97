//! Cache connector structures.

/// Payload plus expiration and category tag.
pub mod cache_value;

/// Consistent-hash ring shared by the pooled connectors.
pub mod ketama_ring;

/// Memcache pool connector.
pub mod cache_connector_memcache;

/// Redis pool connector.
pub mod cache_connector_redis;

/// In-process connector.
pub mod cache_connector_memory;
