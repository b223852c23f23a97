//! Dynamic feature flags.
//!
//! Flags come from an optional, injected [`traits::config_provider::ConfigProvider`]
//! and are read fresh on every call so operational toggles apply without a
//! restart. Each flag falls back to its own default independently; the
//! [`structs::flag_snapshot::FlagSnapshot`] records where every value came from.

pub mod enums;
pub mod errors;
pub mod impls;
pub mod structs;
pub mod traits;

#[cfg(test)]
mod tests;

pub const DUAL_READ_WRITE_ENABLED: &str = "dual-read-write-enabled";
pub const HOTKEY_LOCK_TTL_SECONDS: &str = "hotkey-lock-ttl-seconds";
pub const GET_TIMEOUT_MILLIS: &str = "get-timeout-millis";
