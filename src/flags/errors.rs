use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigProviderError {
    #[error("Config provider unavailable: {0}")]
    Unavailable(String),

    #[error("Config provider failed reading '{key}': {reason}")]
    ReadFailed {
        key: String,
        reason: String,
    },
}
