use crate::cache::errors::CacheError;
use crate::cache::structs::cache_value::CacheValue;
use crate::config::structs::configuration::Configuration;
use crate::facade::structs::cache_facade::CacheFacade;
use crate::flags::structs::flag_reader::FlagReader;
use crate::flags::structs::flag_snapshot::FlagSnapshot;
use crate::flags::traits::config_provider::ConfigProvider;
use crate::gateway::enums::mutation::Mutation;
use crate::gateway::structs::dual_path_gateway::DualPathGateway;
use crate::keys::codec::reform_bulk;
use crate::keys::structs::normalized_key::NormalizedKey;
use crate::local::traits::local_fallback_cache::LocalFallbackCache;
use crate::stampede::enums::hot_read_state::HotReadState;
use crate::stampede::structs::read_outcome::ReadOutcome;
use crate::stampede::structs::stampede_guard::StampedeGuard;
use crate::topology::structs::server_topology::ServerTopology;
use crate::topology::structs::topology_clients::TopologyClients;
use log::{debug, info, trace, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

impl CacheFacade {
    /// Parses the configured topology and builds its clients. Configuration
    /// problems are fatal here.
    pub fn start(
        configuration: &Configuration,
        provider: Option<Arc<dyn ConfigProvider>>,
        local: Arc<dyn LocalFallbackCache>,
    ) -> Result<CacheFacade, CacheError> {
        let topology = configuration.topology()?;
        let clients = TopologyClients::connect(&topology, &configuration.cache)?;
        info!(
            "[Facade] Started {} cache with {} write, {} read and {} backup endpoints",
            configuration.cache.engine,
            topology.write_endpoints.len(),
            topology.read_endpoints.len(),
            topology.backup_endpoints.as_ref().map(Vec::len).unwrap_or(0)
        );
        let operation_timeout = Duration::from_millis(configuration.cache.operation_timeout_millis);
        let mut facade = Self::from_clients(clients, provider, local, operation_timeout);
        facade.topology = Some(topology);
        Ok(facade)
    }

    pub fn from_clients(
        clients: TopologyClients,
        provider: Option<Arc<dyn ConfigProvider>>,
        local: Arc<dyn LocalFallbackCache>,
        operation_timeout: Duration,
    ) -> CacheFacade {
        if provider.is_none() {
            warn!("[Facade] No config provider, feature flags stay at their defaults");
        }
        let gateway = Arc::new(DualPathGateway::new(clients, FlagReader::new(provider), operation_timeout));
        CacheFacade {
            topology: None,
            guard: StampedeGuard::new(gateway.clone(), local),
            gateway,
            shut_down: AtomicBool::new(false),
        }
    }

    pub fn topology(&self) -> Option<&ServerTopology> {
        self.topology.as_ref()
    }

    pub fn clients(&self) -> &TopologyClients {
        self.gateway.clients()
    }

    pub fn flags(&self) -> FlagSnapshot {
        self.gateway.flags().snapshot()
    }

    pub fn flag_fallbacks(&self) -> u64 {
        self.gateway.flags().fallback_count()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }

    fn ensure_serving(&self) -> Result<(), CacheError> {
        if self.is_shut_down() {
            return Err(CacheError::ShutDown);
        }
        Ok(())
    }

    pub async fn get(&self, key: &str, category: &str) -> Option<Vec<u8>> {
        self.read(key, false, category).await.into_value()
    }

    /// Backend form of a caller key.
    fn wire_key(key: &str) -> String {
        let key = NormalizedKey::new(key);
        if key.is_changed() {
            trace!("[Facade] Key {:?} sent as {:?}", key.original, key.normalized);
        }
        key.normalized
    }

    pub async fn get_hot(&self, key: &str, is_hot: bool, category: &str) -> Option<Vec<u8>> {
        self.read(key, is_hot, category).await.into_value()
    }

    /// Like [`CacheFacade::get_hot`] but reports how the value was obtained.
    pub async fn read(&self, key: &str, is_hot: bool, category: &str) -> ReadOutcome {
        if self.is_shut_down() {
            debug!("[Facade] Read of {} after shutdown", key);
            return ReadOutcome::miss(HotReadState::MissNotHot);
        }
        if is_hot {
            return self.guard.read_hot(key, category).await;
        }
        match self.gateway.read(&Self::wire_key(key)).await {
            Some(value) => ReadOutcome::hit(value),
            None => ReadOutcome::miss(HotReadState::MissNotHot),
        }
    }

    /// Results are keyed by the caller's original keys; missing keys are absent.
    pub async fn get_bulk<S: AsRef<str>>(&self, keys: &[S], categories: &HashMap<String, String>) -> HashMap<String, Vec<u8>> {
        if self.is_shut_down() || keys.is_empty() {
            return HashMap::new();
        }
        trace!("[Facade] Bulk read of {} keys across {} categories", keys.len(), categories.len());
        match reform_bulk(keys) {
            Some(mapping) => {
                let found = self.gateway.read_bulk(&mapping.normalize_keys(keys)).await;
                mapping.restore(found)
            }
            None => {
                let keys: Vec<String> = keys.iter().map(|key| key.as_ref().to_string()).collect();
                self.gateway.read_bulk(&keys).await
            }
        }
    }

    pub async fn set(&self, key: &str, value: impl Into<Vec<u8>>, expiration: u32, category: &str) -> Result<bool, CacheError> {
        self.ensure_serving()?;
        let mutation = Mutation::Set {
            key: Self::wire_key(key),
            value: CacheValue::new(value, expiration).with_category(category),
        };
        Ok(self.gateway.mutate(mutation).await?.stored())
    }

    /// Hotness only matters on the read path; `_is_hot` is accepted for
    /// callers that pass it on both sides.
    pub async fn set_hot(
        &self,
        key: &str,
        value: impl Into<Vec<u8>>,
        expiration: u32,
        _is_hot: bool,
        category: &str,
    ) -> Result<bool, CacheError> {
        self.set(key, value, expiration, category).await
    }

    pub async fn add(&self, key: &str, value: impl Into<Vec<u8>>, expiration: u32, category: &str) -> Result<bool, CacheError> {
        self.ensure_serving()?;
        let mutation = Mutation::Add {
            key: Self::wire_key(key),
            value: CacheValue::new(value, expiration).with_category(category),
        };
        Ok(self.gateway.mutate(mutation).await?.stored())
    }

    pub async fn replace(&self, key: &str, value: impl Into<Vec<u8>>, expiration: u32, category: &str) -> Result<bool, CacheError> {
        self.ensure_serving()?;
        let mutation = Mutation::Replace {
            key: Self::wire_key(key),
            value: CacheValue::new(value, expiration).with_category(category),
        };
        Ok(self.gateway.mutate(mutation).await?.stored())
    }

    pub async fn remove(&self, key: &str) -> Result<bool, CacheError> {
        self.ensure_serving()?;
        let mutation = Mutation::Delete {
            key: Self::wire_key(key),
        };
        Ok(self.gateway.mutate(mutation).await?.stored())
    }

    pub async fn remove_in_category(&self, key: &str, category: &str) -> Result<bool, CacheError> {
        trace!("[Facade] Removing {} from category '{}'", key, category);
        self.remove(key).await
    }

    /// `Ok(None)` when the counter does not exist.
    pub async fn increment(&self, key: &str, amount: u64, category: &str) -> Result<Option<u64>, CacheError> {
        self.ensure_serving()?;
        trace!("[Facade] Incrementing {} in category '{}'", key, category);
        let mutation = Mutation::Increment {
            key: Self::wire_key(key),
            amount,
        };
        Ok(self.gateway.mutate(mutation).await?.counter())
    }

    /// Saturates at zero. `Ok(None)` when the counter does not exist.
    pub async fn decrement(&self, key: &str, amount: u64, category: &str) -> Result<Option<u64>, CacheError> {
        self.ensure_serving()?;
        trace!("[Facade] Decrementing {} in category '{}'", key, category);
        let mutation = Mutation::Decrement {
            key: Self::wire_key(key),
            amount,
        };
        Ok(self.gateway.mutate(mutation).await?.counter())
    }

    pub async fn clear(&self) -> Result<(), CacheError> {
        self.ensure_serving()?;
        self.gateway.mutate(Mutation::Flush).await?;
        info!("[Facade] Cache cleared");
        Ok(())
    }

    /// Decodes a MessagePack value. Undecodable payloads read as a miss.
    pub async fn get_as<T: DeserializeOwned>(&self, key: &str, category: &str) -> Option<T> {
        let payload = self.get(key, category).await?;
        match rmp_serde::from_slice(&payload) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("[Facade] Cannot decode {}: {}", key, e);
                None
            }
        }
    }

    pub async fn set_as<T: Serialize>(&self, key: &str, value: &T, expiration: u32, category: &str) -> Result<bool, CacheError> {
        let payload = rmp_serde::to_vec(value).map_err(|e| CacheError::SerializationError(e.to_string()))?;
        self.set(key, payload, expiration, category).await
    }

    /// Releases every client once. Later calls do nothing.
    pub fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::AcqRel) {
            return;
        }
        self.gateway.shutdown();
        info!("[Facade] Shut down");
    }
}
