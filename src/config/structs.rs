//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Backend engine, server topology and operation timeouts.
pub mod cache_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Start-up values for the dynamic feature flags.
pub mod flags_config;

/// Local fallback cache sizing.
pub mod local_cache_config;
