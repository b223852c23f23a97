use crate::cache::structs::cache_value::CacheValue;

impl CacheValue {
    pub fn new(payload: impl Into<Vec<u8>>, expiration: u32) -> CacheValue {
        CacheValue {
            payload: payload.into(),
            expiration,
            category: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> CacheValue {
        if !category.is_empty() {
            self.category = Some(category.to_string());
        }
        self
    }
}
