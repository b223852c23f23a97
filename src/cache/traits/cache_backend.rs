use crate::cache::errors::CacheError;
use crate::cache::structs::cache_value::CacheValue;
use async_trait::async_trait;
use std::collections::HashMap;

/// A clustered cache client. Keys handed to a backend are already normalized.
///
/// Storing operations return `Ok(false)` when the backend refused the write
/// for a semantic reason (`add` on an existing key, `replace` on a missing
/// one) and `Err` only when the backend could not be reached or failed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    async fn get_bulk(&self, keys: &[String]) -> Result<HashMap<String, Vec<u8>>, CacheError>;

    async fn set(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError>;

    async fn add(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError>;

    async fn replace(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError>;

    async fn delete(&self, key: &str) -> Result<bool, CacheError>;

    /// `Ok(None)` when the counter does not exist.
    async fn increment(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError>;

    /// Saturates at zero. `Ok(None)` when the counter does not exist.
    async fn decrement(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError>;

    async fn flush(&self) -> Result<(), CacheError>;

    /// Releases connections. Must tolerate repeated calls.
    fn shutdown(&self);

    fn describe(&self) -> String;
}
