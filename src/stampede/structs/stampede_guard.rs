use crate::gateway::structs::dual_path_gateway::DualPathGateway;
use crate::local::traits::local_fallback_cache::LocalFallbackCache;
use std::sync::Arc;

pub struct StampedeGuard {
    pub(crate) gateway: Arc<DualPathGateway>,
    pub(crate) local: Arc<dyn LocalFallbackCache>,
}
