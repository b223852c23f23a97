//! Configuration management module.
//!
//! Loads, parses and validates the static configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! - **log_level**: logging verbosity for the binary
//! - **cache**: backend engine, server topology string and timeouts
//! - **flags**: start-up values for the dynamic feature flags
//! - **local_cache**: capacity of the local fallback cache
//!
//! # Example
//!
//! ```rust,ignore
//! use cachegate::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(Path::new("config.toml"), false)?;
//! let topology = config.topology()?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
