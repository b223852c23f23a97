use std::time::Duration;

pub trait LocalFallbackCache: Send + Sync {
    fn get(&self, key: &str, category: &str) -> Option<Vec<u8>>;

    fn set(&self, key: &str, value: Vec<u8>, ttl: Duration, category: &str);
}
