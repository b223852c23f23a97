use crate::config::structs::flags_config::FlagsConfig;
use crate::flags::errors::ConfigProviderError;
use crate::flags::structs::static_config_provider::StaticConfigProvider;
use crate::flags::traits::config_provider::ConfigProvider;
use crate::flags::{DUAL_READ_WRITE_ENABLED, GET_TIMEOUT_MILLIS, HOTKEY_LOCK_TTL_SECONDS};

impl StaticConfigProvider {
    pub fn new() -> StaticConfigProvider {
        StaticConfigProvider::default()
    }

    pub fn from_flags(flags: &FlagsConfig) -> StaticConfigProvider {
        let provider = StaticConfigProvider::new();
        provider.set_property(DUAL_READ_WRITE_ENABLED, flags.dual_read_write_enabled);
        provider.set_property(HOTKEY_LOCK_TTL_SECONDS, flags.hotkey_lock_ttl_seconds);
        provider.set_property(GET_TIMEOUT_MILLIS, flags.get_timeout_millis);
        provider
    }

    pub fn set_property(&self, key: &str, value: impl ToString) {
        self.properties.write().insert(key.to_string(), value.to_string());
    }

    pub fn remove_property(&self, key: &str) {
        self.properties.write().remove(key);
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_property(&self, key: &str) -> Result<Option<String>, ConfigProviderError> {
        Ok(self.properties.read().get(key).cloned())
    }
}
