//! Backend client layer.
//!
//! Every backend is reached through the [`traits::cache_backend::CacheBackend`]
//! trait. A pool is one logical backend made of several nodes; keys are routed
//! to nodes with a ketama-style consistent-hash ring so that removing a node
//! only remaps the keys it owned.
//!
//! # Supported Engines
//!
//! - **Memcache**: blocking `memcache` client, one lazily connected client per
//!   node, calls run on the blocking pool
//! - **Redis**: multiplexed async connection per node
//! - **Memory**: single-process store with memcached semantics

/// Cache engine enumeration (memcache, redis, memory).
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for cache connectors.
pub mod impls;

/// Data structures for cache connections.
pub mod structs;

/// Cache backend trait definitions.
pub mod traits;
