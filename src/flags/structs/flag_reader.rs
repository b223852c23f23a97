use crate::flags::traits::config_provider::ConfigProvider;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

#[derive(Clone)]
pub struct FlagReader {
    pub(crate) provider: Option<Arc<dyn ConfigProvider>>,
    pub(crate) fallbacks: Arc<AtomicU64>,
}
