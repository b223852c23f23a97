use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    pub dual_read_write_enabled: bool,
    pub hotkey_lock_ttl_seconds: u32,
    pub get_timeout_millis: u64,
}
