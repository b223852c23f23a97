use crate::cache::errors::CacheError;
use log::debug;
use std::future::Future;
use std::time::Duration;

/// Awaits `operation` for at most `timeout`. Errors and timeouts yield `None`.
pub async fn run_bounded<T, F>(label: &str, timeout: Duration, operation: F) -> Option<T>
where
    F: Future<Output = Result<T, CacheError>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            debug!("[Executor] {} failed, treating as miss: {}", label, e);
            None
        }
        Err(_) => {
            debug!("[Executor] {} timed out after {}ms, treating as miss", label, timeout.as_millis());
            None
        }
    }
}

/// Awaits `operation` for at most `timeout`, surfacing failures.
pub async fn run_with_deadline<T, F>(label: &str, timeout: Duration, operation: F) -> Result<T, CacheError>
where
    F: Future<Output = Result<T, CacheError>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => Err(CacheError::Timeout {
            operation: label.to_string(),
            millis: timeout.as_millis() as u64,
        }),
    }
}
