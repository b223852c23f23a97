use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LocalCacheConfig {
    pub capacity: usize,
}

impl Default for LocalCacheConfig {
    fn default() -> Self {
        Self {
            capacity: 10_000,
        }
    }
}
