use crate::flags::enums::flag_source::FlagSource;
use crate::flags::structs::feature_flags::FeatureFlags;
use crate::flags::structs::flag_snapshot::FlagSnapshot;

impl FlagSnapshot {
    pub fn flags(&self) -> FeatureFlags {
        FeatureFlags {
            dual_read_write_enabled: self.dual_read_write_enabled.value,
            hotkey_lock_ttl_seconds: self.hotkey_lock_ttl_seconds.value,
            get_timeout_millis: self.get_timeout_millis.value,
        }
    }

    /// Flags whose value did not come from the provider.
    pub fn defaulted(&self) -> Vec<&'static str> {
        let mut defaulted = Vec::new();
        if self.dual_read_write_enabled.source != FlagSource::provider {
            defaulted.push(crate::flags::DUAL_READ_WRITE_ENABLED);
        }
        if self.hotkey_lock_ttl_seconds.source != FlagSource::provider {
            defaulted.push(crate::flags::HOTKEY_LOCK_TTL_SECONDS);
        }
        if self.get_timeout_millis.source != FlagSource::provider {
            defaulted.push(crate::flags::GET_TIMEOUT_MILLIS);
        }
        defaulted
    }
}
