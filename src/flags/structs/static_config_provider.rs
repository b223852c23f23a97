use parking_lot::RwLock;
use std::collections::HashMap;

/// In-process provider whose properties can be changed at runtime.
#[derive(Debug, Default)]
pub struct StaticConfigProvider {
    pub(crate) properties: RwLock<HashMap<String, String>>,
}
