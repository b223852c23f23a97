use crate::config::enums::configuration_error::ConfigurationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Operation {operation} timed out after {millis}ms")]
    Timeout {
        operation: String,
        millis: u64,
    },

    #[error("Cache client has been shut down")]
    ShutDown,

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Memcache error: {0}")]
    MemcacheError(#[from] memcache::MemcacheError),
}

impl CacheError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, CacheError::Timeout { .. })
    }
}
