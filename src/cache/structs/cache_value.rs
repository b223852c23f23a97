use serde::{Deserialize, Serialize};

/// Payload handed to a backend on every storing mutation.
///
/// `expiration` is in seconds, `0` meaning no expiry. `category` is an opaque
/// namespace tag that is forwarded untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CacheValue {
    pub payload: Vec<u8>,
    pub expiration: u32,
    pub category: Option<String>,
}
