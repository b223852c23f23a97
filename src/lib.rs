//! # cachegate
//!
//! A policy layer in front of a clustered key-value cache (memcached or
//! redis). Storage and wire protocols belong to the backend clients; this
//! crate adds what sits on top of them:
//!
//! - **Topology routing**: one configuration string describes a shared
//!   read/write pool with an optional hot-standby backup pool, or separate
//!   write and read pools.
//! - **Bounded access**: every backend read runs under a short timeout and a
//!   failure or timeout is a miss, never an error for the caller.
//! - **Dual path**: with `dual-read-write-enabled` on, misses fall back to the
//!   backup pool and mutations are mirrored to it.
//! - **Stampede protection**: on a hot-key miss a single caller wins a
//!   distributed `add` lock and recomputes while others get the last value
//!   held in a local fallback cache.
//! - **Key normalization**: whitespace and control characters are escaped
//!   reversibly before keys reach the wire.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cachegate::config::structs::configuration::Configuration;
//! use cachegate::facade::structs::cache_facade::CacheFacade;
//! use cachegate::flags::structs::static_config_provider::StaticConfigProvider;
//! use cachegate::local::structs::ttl_local_cache::TtlLocalCache;
//!
//! let config = Configuration::load_from_file(Path::new("config.toml"), false)?;
//! let provider = Arc::new(StaticConfigProvider::from_flags(&config.flags));
//! let facade = CacheFacade::start(&config, Some(provider), Arc::new(TtlLocalCache::new(10_000)))?;
//!
//! facade.set("user 42", b"profile".to_vec(), 300, "users").await?;
//! let value = facade.get_hot("user 42", true, "users").await;
//! facade.shutdown();
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Backend trait and the memcache, redis and memory pools
//! - [`common`] - Logging set-up and CLI helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`executor`] - Timeout-bounded execution of backend calls
//! - [`facade`] - The public cache surface
//! - [`flags`] - Dynamic feature flags with per-flag defaults
//! - [`gateway`] - Primary/backup routing of reads and mutations
//! - [`keys`] - Key normalization and bulk key remapping
//! - [`local`] - Process-local fallback cache
//! - [`stampede`] - Hot-key lock-and-fallback protocol
//! - [`structs`] - CLI argument parsing
//! - [`topology`] - Server topology parsing and client construction

/// Backend clients behind a common async trait.
///
/// Memcache and redis pools route keys over a ketama ring; the memory backend
/// serves development and tests.
pub mod cache;

/// Logging set-up and value rendering.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating TOML configuration files.
pub mod config;

pub mod executor;

/// Public cache surface combining every other module.
pub mod facade;

/// Dynamic feature flags read fresh on every call.
pub mod flags;

pub mod gateway;

/// Key normalization.
pub mod keys;

pub mod local;

/// Hot-key stampede protection.
pub mod stampede;

/// CLI argument structures.
pub mod structs;

/// Server topology parsing and client construction.
pub mod topology;
