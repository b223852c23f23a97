use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FlagsConfig {
    pub dual_read_write_enabled: bool,
    pub hotkey_lock_ttl_seconds: u32,
    pub get_timeout_millis: u64,
}

impl Default for FlagsConfig {
    fn default() -> Self {
        Self {
            dual_read_write_enabled: false,
            hotkey_lock_ttl_seconds: 30,
            get_timeout_millis: 100,
        }
    }
}
