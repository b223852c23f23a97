//! Hot-key stampede protection.
//!
//! On a hot miss exactly one caller wins a short-lived distributed lock
//! (`add` of `<key>_lock`) and recomputes. Everyone else is served the last
//! value copied into the local fallback cache.

use std::time::Duration;

pub mod enums;
pub mod impls;
pub mod structs;

pub const LOCK_SUFFIX: &str = "_lock";
pub const LOCK_MARKER: &[u8] = b"1";
pub const LOCAL_FALLBACK_TTL: Duration = Duration::from_secs(24 * 60 * 60);
