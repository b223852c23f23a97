use crate::cache::enums::cache_engine::CacheEngine;
use std::fmt;

impl fmt::Display for CacheEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheEngine::memcache => write!(f, "memcache"),
            CacheEngine::redis => write!(f, "redis"),
            CacheEngine::memory => write!(f, "memory"),
        }
    }
}

impl CacheEngine {
    pub fn url_scheme(&self) -> &'static str {
        match self {
            CacheEngine::memcache => "memcache://",
            CacheEngine::redis => "redis://",
            CacheEngine::memory => "memory://",
        }
    }
}
