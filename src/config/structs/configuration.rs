use serde::{Deserialize, Serialize};
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::flags_config::FlagsConfig;
use crate::config::structs::local_cache_config::LocalCacheConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub cache: CacheConfig,
    #[serde(default)]
    pub flags: FlagsConfig,
    #[serde(default)]
    pub local_cache: LocalCacheConfig,
}
