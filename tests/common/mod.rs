#![allow(dead_code)]
use async_trait::async_trait;
use cachegate::cache::enums::cache_engine::CacheEngine;
use cachegate::cache::errors::CacheError;
use cachegate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use cachegate::cache::structs::cache_value::CacheValue;
use cachegate::cache::traits::cache_backend::CacheBackend;
use cachegate::config::structs::configuration::Configuration;
use cachegate::facade::structs::cache_facade::CacheFacade;
use cachegate::flags::DUAL_READ_WRITE_ENABLED;
use cachegate::flags::structs::static_config_provider::StaticConfigProvider;
use cachegate::local::structs::ttl_local_cache::TtlLocalCache;
use rand::RngExt;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub type TestFacade = Arc<CacheFacade>;
pub type TestProvider = Arc<StaticConfigProvider>;

pub const PRIMARY_AND_BACKUP: &str = "10.0.0.1:11211|10.0.0.2:11211";

pub fn create_test_config(topology: &str) -> Configuration {
    let mut config: Configuration = Configuration::init();
    config.cache.engine = CacheEngine::memory;
    config.cache.server_topology = Some(topology.to_string());
    config
}

pub fn create_test_provider(dual: bool) -> TestProvider {
    let provider = Arc::new(StaticConfigProvider::new());
    provider.set_property(DUAL_READ_WRITE_ENABLED, dual);
    provider
}

pub fn create_test_facade(topology: &str, dual: bool) -> (TestFacade, TestProvider) {
    let provider = create_test_provider(dual);
    let facade = CacheFacade::start(
        &create_test_config(topology),
        Some(provider.clone()),
        Arc::new(TtlLocalCache::new(1024)),
    )
    .expect("memory facade starts");
    (Arc::new(facade), provider)
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// A key that needs normalization, unique per call.
pub fn random_key() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 8] = rng.random();
    format!("item {}", hex::encode(bytes))
}

/// Memory backend that sleeps before every call.
pub struct SlowBackend {
    pub inner: CacheConnectorMemory,
    pub delay: Duration,
}

impl SlowBackend {
    pub fn new(name: &str, delay: Duration) -> SlowBackend {
        SlowBackend {
            inner: CacheConnectorMemory::new(name),
            delay,
        }
    }
}

#[async_trait]
impl CacheBackend for SlowBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        tokio::time::sleep(self.delay).await;
        self.inner.get(key).await
    }

    async fn get_bulk(&self, keys: &[String]) -> Result<HashMap<String, Vec<u8>>, CacheError> {
        tokio::time::sleep(self.delay).await;
        self.inner.get_bulk(keys).await
    }

    async fn set(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError> {
        tokio::time::sleep(self.delay).await;
        self.inner.set(key, value).await
    }

    async fn add(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError> {
        tokio::time::sleep(self.delay).await;
        self.inner.add(key, value).await
    }

    async fn replace(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError> {
        tokio::time::sleep(self.delay).await;
        self.inner.replace(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        tokio::time::sleep(self.delay).await;
        self.inner.delete(key).await
    }

    async fn increment(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError> {
        tokio::time::sleep(self.delay).await;
        self.inner.increment(key, amount).await
    }

    async fn decrement(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError> {
        tokio::time::sleep(self.delay).await;
        self.inner.decrement(key, amount).await
    }

    async fn flush(&self) -> Result<(), CacheError> {
        tokio::time::sleep(self.delay).await;
        self.inner.flush().await
    }

    fn shutdown(&self) {
        self.inner.shutdown();
    }

    fn describe(&self) -> String {
        format!("slow {}", self.inner.describe())
    }
}
