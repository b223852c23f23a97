use crate::flags::structs::feature_flags::FeatureFlags;
use std::time::Duration;

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            dual_read_write_enabled: false,
            hotkey_lock_ttl_seconds: 30,
            get_timeout_millis: 100,
        }
    }
}

impl FeatureFlags {
    pub fn get_timeout(&self) -> Duration {
        Duration::from_millis(self.get_timeout_millis)
    }
}
