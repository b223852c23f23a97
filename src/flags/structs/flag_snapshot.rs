use crate::flags::enums::flag_source::FlagSource;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FlagValue<T> {
    pub value: T,
    pub source: FlagSource,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FlagSnapshot {
    pub dual_read_write_enabled: FlagValue<bool>,
    pub hotkey_lock_ttl_seconds: FlagValue<u32>,
    pub get_timeout_millis: FlagValue<u64>,
}
