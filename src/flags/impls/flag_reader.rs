use crate::flags::enums::flag_source::FlagSource;
use crate::flags::structs::feature_flags::FeatureFlags;
use crate::flags::structs::flag_reader::FlagReader;
use crate::flags::structs::flag_snapshot::{FlagSnapshot, FlagValue};
use crate::flags::traits::config_provider::ConfigProvider;
use crate::flags::{DUAL_READ_WRITE_ENABLED, GET_TIMEOUT_MILLIS, HOTKEY_LOCK_TTL_SECONDS};
use log::{debug, warn};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

impl fmt::Debug for FlagReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagReader")
            .field("provider", &self.provider.as_ref().map(|_| "<ConfigProvider>"))
            .field("fallbacks", &self.fallbacks.load(Ordering::Relaxed))
            .finish()
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

// Zero would mean "never expires" for a lock and "always time out" for reads.
fn parse_positive<T: std::str::FromStr + PartialEq + Default>(raw: &str) -> Option<T> {
    raw.parse::<T>().ok().filter(|value| *value != T::default())
}

impl FlagReader {
    pub fn new(provider: Option<Arc<dyn ConfigProvider>>) -> FlagReader {
        FlagReader {
            provider,
            fallbacks: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn snapshot(&self) -> FlagSnapshot {
        let defaults = FeatureFlags::default();
        FlagSnapshot {
            dual_read_write_enabled: self.read(DUAL_READ_WRITE_ENABLED, defaults.dual_read_write_enabled, parse_bool),
            hotkey_lock_ttl_seconds: self.read(HOTKEY_LOCK_TTL_SECONDS, defaults.hotkey_lock_ttl_seconds, parse_positive::<u32>),
            get_timeout_millis: self.read(GET_TIMEOUT_MILLIS, defaults.get_timeout_millis, parse_positive::<u64>),
        }
    }

    pub fn current(&self) -> FeatureFlags {
        self.snapshot().flags()
    }

    /// Number of reads that fell back because the provider failed or returned garbage.
    pub fn fallback_count(&self) -> u64 {
        self.fallbacks.load(Ordering::Relaxed)
    }

    fn read<T>(&self, key: &str, default: T, parse: impl Fn(&str) -> Option<T>) -> FlagValue<T> {
        let Some(provider) = &self.provider else {
            return FlagValue { value: default, source: FlagSource::no_provider };
        };
        let source = match provider.get_property(key) {
            Ok(Some(raw)) => match parse(raw.trim()) {
                Some(value) => return FlagValue { value, source: FlagSource::provider },
                None => {
                    warn!("[Flags] Ignoring invalid value '{}' for {}", raw, key);
                    FlagSource::invalid_value
                }
            },
            Ok(None) => return FlagValue { value: default, source: FlagSource::absent },
            Err(e) => {
                debug!("[Flags] {}, using default for {}", e, key);
                FlagSource::provider_error
            }
        };
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
        FlagValue { value: default, source }
    }
}
