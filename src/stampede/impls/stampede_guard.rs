use crate::cache::structs::cache_value::CacheValue;
use crate::gateway::structs::dual_path_gateway::DualPathGateway;
use crate::keys::codec::normalize;
use crate::local::traits::local_fallback_cache::LocalFallbackCache;
use crate::stampede::enums::hot_read_state::HotReadState;
use crate::stampede::structs::read_outcome::ReadOutcome;
use crate::stampede::structs::stampede_guard::StampedeGuard;
use crate::stampede::{LOCAL_FALLBACK_TTL, LOCK_MARKER, LOCK_SUFFIX};
use log::debug;
use std::fmt;
use std::sync::Arc;

impl fmt::Debug for StampedeGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StampedeGuard")
            .field("gateway", &self.gateway)
            .finish_non_exhaustive()
    }
}

impl StampedeGuard {
    pub fn new(gateway: Arc<DualPathGateway>, local: Arc<dyn LocalFallbackCache>) -> StampedeGuard {
        StampedeGuard { gateway, local }
    }

    /// Lock key for an original (not yet normalized) cache key.
    pub fn lock_key(key: &str) -> String {
        normalize(&format!("{}{}", key, LOCK_SUFFIX)).into_owned()
    }

    pub async fn read_hot(&self, key: &str, category: &str) -> ReadOutcome {
        let normalized = normalize(key);
        if let Some(value) = self.gateway.read(&normalized).await {
            self.local.set(&normalized, value.clone(), LOCAL_FALLBACK_TTL, category);
            return ReadOutcome::hit(value);
        }

        let ttl = self.gateway.flags().current().hotkey_lock_ttl_seconds;
        let token = CacheValue::new(LOCK_MARKER.to_vec(), ttl).with_category(category);
        match self.gateway.acquire_lock(&Self::lock_key(key), &token).await {
            Some(true) => {
                debug!("[Stampede] Lock on {} acquired for {}s, caller recomputes", normalized, ttl);
                ReadOutcome::miss(HotReadState::MissHotLockAcquired)
            }
            answer => {
                let value = self.local.get(&normalized, category);
                debug!(
                    "[Stampede] Lock on {} {}, local fallback {}",
                    normalized,
                    if answer.is_some() { "held elsewhere" } else { "indeterminate" },
                    if value.is_some() { "hit" } else { "miss" }
                );
                ReadOutcome {
                    state: HotReadState::MissHotLockDenied,
                    value,
                }
            }
        }
    }
}
