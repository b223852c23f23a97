use crate::flags::errors::ConfigProviderError;
use crate::flags::traits::config_provider::ConfigProvider;

struct FailingProvider;

impl ConfigProvider for FailingProvider {
    fn get_property(&self, key: &str) -> Result<Option<String>, ConfigProviderError> {
        Err(ConfigProviderError::ReadFailed {
            key: key.to_string(),
            reason: "service down".to_string(),
        })
    }
}

mod flag_reader_tests {
    use super::FailingProvider;
    use crate::config::structs::flags_config::FlagsConfig;
    use crate::flags::enums::flag_source::FlagSource;
    use crate::flags::structs::feature_flags::FeatureFlags;
    use crate::flags::structs::flag_reader::FlagReader;
    use crate::flags::structs::static_config_provider::StaticConfigProvider;
    use crate::flags::{DUAL_READ_WRITE_ENABLED, GET_TIMEOUT_MILLIS, HOTKEY_LOCK_TTL_SECONDS};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_defaults_without_provider() {
        let reader = FlagReader::new(None);
        let snapshot = reader.snapshot();
        assert_eq!(snapshot.flags(), FeatureFlags::default());
        assert_eq!(snapshot.dual_read_write_enabled.source, FlagSource::no_provider);
        assert_eq!(snapshot.defaulted().len(), 3);
        assert_eq!(reader.fallback_count(), 0);
    }

    #[test]
    fn test_default_values() {
        let flags = FeatureFlags::default();
        assert!(!flags.dual_read_write_enabled);
        assert_eq!(flags.hotkey_lock_ttl_seconds, 30);
        assert_eq!(flags.get_timeout(), Duration::from_millis(100));
    }

    #[test]
    fn test_failing_provider_falls_back_per_flag() {
        let reader = FlagReader::new(Some(Arc::new(FailingProvider)));
        let snapshot = reader.snapshot();
        assert_eq!(snapshot.flags(), FeatureFlags::default());
        assert_eq!(snapshot.get_timeout_millis.source, FlagSource::provider_error);
        assert_eq!(reader.fallback_count(), 3);
    }

    #[test]
    fn test_provider_values_are_used() {
        let provider = Arc::new(StaticConfigProvider::new());
        provider.set_property(DUAL_READ_WRITE_ENABLED, "TRUE");
        provider.set_property(GET_TIMEOUT_MILLIS, 250);
        let reader = FlagReader::new(Some(provider));
        let snapshot = reader.snapshot();
        assert!(snapshot.dual_read_write_enabled.value);
        assert_eq!(snapshot.get_timeout_millis.value, 250);
        assert_eq!(snapshot.hotkey_lock_ttl_seconds.source, FlagSource::absent);
        assert_eq!(snapshot.defaulted(), vec![HOTKEY_LOCK_TTL_SECONDS]);
    }

    #[test]
    fn test_invalid_value_falls_back_only_for_that_flag() {
        let provider = Arc::new(StaticConfigProvider::new());
        provider.set_property(DUAL_READ_WRITE_ENABLED, "true");
        provider.set_property(HOTKEY_LOCK_TTL_SECONDS, "soon");
        provider.set_property(GET_TIMEOUT_MILLIS, 0);
        let reader = FlagReader::new(Some(provider));
        let snapshot = reader.snapshot();
        assert!(snapshot.dual_read_write_enabled.value);
        assert_eq!(snapshot.hotkey_lock_ttl_seconds.value, 30);
        assert_eq!(snapshot.hotkey_lock_ttl_seconds.source, FlagSource::invalid_value);
        assert_eq!(snapshot.get_timeout_millis.value, 100);
        assert_eq!(reader.fallback_count(), 2);
    }

    #[test]
    fn test_changes_apply_on_next_read() {
        let provider = Arc::new(StaticConfigProvider::new());
        let reader = FlagReader::new(Some(provider.clone()));
        assert!(!reader.current().dual_read_write_enabled);
        provider.set_property(DUAL_READ_WRITE_ENABLED, true);
        assert!(reader.current().dual_read_write_enabled);
        provider.remove_property(DUAL_READ_WRITE_ENABLED);
        assert!(!reader.current().dual_read_write_enabled);
    }

    #[test]
    fn test_static_provider_from_config() {
        let config = FlagsConfig {
            dual_read_write_enabled: true,
            hotkey_lock_ttl_seconds: 5,
            get_timeout_millis: 40,
        };
        let reader = FlagReader::new(Some(Arc::new(StaticConfigProvider::from_flags(&config))));
        let flags = reader.current();
        assert!(flags.dual_read_write_enabled);
        assert_eq!(flags.hotkey_lock_ttl_seconds, 5);
        assert_eq!(flags.get_timeout_millis, 40);
        assert!(reader.snapshot().defaulted().is_empty());
    }
}
