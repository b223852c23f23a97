use crate::flags::errors::ConfigProviderError;

/// Source of dynamically refreshed, string-keyed properties.
pub trait ConfigProvider: Send + Sync {
    /// `Ok(None)` when the key is not set.
    fn get_property(&self, key: &str) -> Result<Option<String>, ConfigProviderError>;
}
