use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memcache::{CacheConnectorMemcache, MemcacheNode};
use crate::cache::structs::cache_value::CacheValue;
use crate::cache::structs::ketama_ring::KetamaRing;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;
use async_trait::async_trait;
use futures_util::future::join_all;
use log::{debug, info, warn};
use memcache::MemcacheError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

impl fmt::Debug for MemcacheNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemcacheNode")
            .field("address", &self.address)
            .field("connected", &self.client.lock().is_some())
            .field("backing_off", &self.backoff_remaining().is_some())
            .finish()
    }
}

impl fmt::Debug for CacheConnectorMemcache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorMemcache")
            .field("nodes", &self.nodes)
            .field("points", &self.ring.point_count())
            .finish()
    }
}

impl MemcacheNode {
    pub fn new(address: &str, config: &CacheConfig) -> MemcacheNode {
        let url = format!(
            "{}{}?timeout={}&connect_timeout={}&tcp_nodelay=true",
            CacheEngine::memcache.url_scheme(),
            address,
            Duration::from_millis(config.operation_timeout_millis).as_secs_f64(),
            Duration::from_millis(config.connect_timeout_millis).as_secs_f64()
        );
        MemcacheNode {
            address: address.to_string(),
            url,
            pool_size: config.pool_size.max(1),
            retry_after: Duration::from_millis(config.reconnect_backoff_millis),
            client: Mutex::new(None),
            last_failure: Mutex::new(None),
            connecting: AtomicBool::new(false),
        }
    }

    /// Connects on first use so an unreachable node only fails the calls routed to it.
    /// The slot lock is never held while connecting. After a failed attempt the node
    /// is skipped until the back-off window has passed, and only one caller dials at a time.
    pub fn client(&self) -> Result<Arc<memcache::Client>, CacheError> {
        if let Some(client) = self.client.lock().as_ref() {
            return Ok(client.clone());
        }
        if let Some(remaining) = self.backoff_remaining() {
            return Err(CacheError::ConnectionError(format!(
                "Memcache at {} is unreachable, retrying in {}ms",
                self.address,
                remaining.as_millis()
            )));
        }
        if self
            .connecting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(CacheError::ConnectionError(format!(
                "Memcache at {} is still connecting",
                self.address
            )));
        }
        if let Some(client) = self.client.lock().clone() {
            self.connecting.store(false, Ordering::Release);
            return Ok(client);
        }

        let result = memcache::Client::with_pool_size(self.url.as_str(), self.pool_size);
        let outcome = match result {
            Ok(client) => {
                self.last_failure.lock().take();
                let mut slot = self.client.lock();
                let client = slot.get_or_insert_with(|| Arc::new(client)).clone();
                info!("[Memcache] Connected to {} ({} connections)", self.address, self.pool_size);
                Ok(client)
            }
            Err(e) => {
                self.record_failure();
                warn!("[Memcache] Failed to connect to {}: {}", self.address, e);
                Err(CacheError::ConnectionError(format!("Failed to connect to Memcache at {}: {}", self.address, e)))
            }
        };
        self.connecting.store(false, Ordering::Release);
        outcome
    }

    pub fn record_failure(&self) {
        *self.last_failure.lock() = Some(Instant::now());
    }

    /// Time left before another connect attempt is allowed, if any.
    pub fn backoff_remaining(&self) -> Option<Duration> {
        let failed_at = (*self.last_failure.lock())?;
        self.retry_after
            .checked_sub(failed_at.elapsed())
            .filter(|remaining| !remaining.is_zero())
    }

    pub fn disconnect(&self) {
        self.client.lock().take();
    }
}

impl CacheConnectorMemcache {
    pub fn new(addresses: &[String], config: &CacheConfig) -> Result<Self, CacheError> {
        if addresses.is_empty() {
            return Err(CacheError::ConnectionError("Memcache pool needs at least one address".to_string()));
        }
        let nodes = addresses
            .iter()
            .map(|address| MemcacheNode::new(address, config))
            .collect::<Vec<_>>();
        Ok(Self {
            nodes: Arc::new(nodes),
            ring: KetamaRing::new(addresses),
            shut_down: AtomicBool::new(false),
        })
    }

    fn ensure_open(&self) -> Result<(), CacheError> {
        if self.shut_down.load(Ordering::SeqCst) {
            return Err(CacheError::ShutDown);
        }
        Ok(())
    }

    fn node_index(&self, key: &str) -> Result<usize, CacheError> {
        self.ring
            .node_for(key)
            .ok_or_else(|| CacheError::OperationError("Memcache pool has no nodes".to_string()))
    }

    /// The memcache client is blocking; every call is moved to the blocking pool.
    async fn on_node<T, F>(&self, node: usize, operation: F) -> Result<T, CacheError>
    where
        T: Send + 'static,
        F: FnOnce(&memcache::Client) -> Result<T, CacheError> + Send + 'static,
    {
        self.ensure_open()?;
        let nodes = self.nodes.clone();
        tokio::task::spawn_blocking(move || {
            let client = nodes[node].client()?;
            operation(&client)
        })
        .await
        .map_err(|e| CacheError::OperationError(format!("Memcache worker failed: {}", e)))?
    }

    async fn on_key<T, F>(&self, key: &str, operation: F) -> Result<T, CacheError>
    where
        T: Send + 'static,
        F: FnOnce(&memcache::Client) -> Result<T, CacheError> + Send + 'static,
    {
        let node = self.node_index(key)?;
        self.on_node(node, operation).await
    }

    pub(crate) fn stored(result: Result<(), MemcacheError>) -> Result<bool, CacheError> {
        match result {
            Ok(()) => Ok(true),
            Err(MemcacheError::CommandError(_)) => Ok(false),
            Err(e) => Err(CacheError::MemcacheError(e)),
        }
    }

    pub(crate) fn counter(result: Result<u64, MemcacheError>) -> Result<Option<u64>, CacheError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(MemcacheError::CommandError(_)) => Ok(None),
            Err(e) => Err(CacheError::MemcacheError(e)),
        }
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemcache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let owned = key.to_string();
        self.on_key(key, move |client| {
            client.get::<Vec<u8>>(&owned).map_err(CacheError::MemcacheError)
        })
        .await
    }

    async fn get_bulk(&self, keys: &[String]) -> Result<HashMap<String, Vec<u8>>, CacheError> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }
        let requests = self.ring.partition(keys).into_iter().map(|(node, node_keys)| {
            let owned = node_keys.into_iter().map(str::to_string).collect::<Vec<_>>();
            self.on_node(node, move |client| {
                let borrowed = owned.iter().map(String::as_str).collect::<Vec<_>>();
                client.gets::<Vec<u8>>(&borrowed).map_err(CacheError::MemcacheError)
            })
        });

        let mut merged = HashMap::with_capacity(keys.len());
        let mut first_error = None;
        let mut answered = 0usize;
        for outcome in join_all(requests).await {
            match outcome {
                Ok(found) => {
                    answered += 1;
                    merged.extend(found);
                }
                Err(e) => {
                    warn!("[Memcache] Bulk get failed on one node: {}", e);
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            Some(e) if answered == 0 => Err(e),
            _ => Ok(merged),
        }
    }

    async fn set(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError> {
        let owned = key.to_string();
        let payload = value.payload.clone();
        let expiration = value.expiration;
        let stored = self
            .on_key(key, move |client| {
                Self::stored(client.set(&owned, payload.as_slice(), expiration))
            })
            .await?;
        debug!("[Memcache] Set {} ({} bytes, exp={})", key, value.payload.len(), value.expiration);
        Ok(stored)
    }

    async fn add(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError> {
        let owned = key.to_string();
        let payload = value.payload.clone();
        let expiration = value.expiration;
        self.on_key(key, move |client| {
            Self::stored(client.add(&owned, payload.as_slice(), expiration))
        })
        .await
    }

    async fn replace(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError> {
        let owned = key.to_string();
        let payload = value.payload.clone();
        let expiration = value.expiration;
        self.on_key(key, move |client| {
            Self::stored(client.replace(&owned, payload.as_slice(), expiration))
        })
        .await
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let owned = key.to_string();
        let deleted = self
            .on_key(key, move |client| client.delete(&owned).map_err(CacheError::MemcacheError))
            .await?;
        debug!("[Memcache] Deleted {} ({})", key, deleted);
        Ok(deleted)
    }

    async fn increment(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError> {
        let owned = key.to_string();
        self.on_key(key, move |client| Self::counter(client.increment(&owned, amount)))
            .await
    }

    async fn decrement(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError> {
        let owned = key.to_string();
        self.on_key(key, move |client| Self::counter(client.decrement(&owned, amount)))
            .await
    }

    async fn flush(&self) -> Result<(), CacheError> {
        let requests = (0..self.nodes.len())
            .map(|node| self.on_node(node, |client| client.flush().map_err(CacheError::MemcacheError)));
        let mut result = Ok(());
        for outcome in join_all(requests).await {
            if let Err(e) = outcome {
                warn!("[Memcache] Flush failed on one node: {}", e);
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        debug!("[Memcache] Flushed {} nodes", self.nodes.len());
        result
    }

    fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::SeqCst) {
            return;
        }
        for node in self.nodes.iter() {
            node.disconnect();
        }
        info!("[Memcache] Pool {} shut down", self.describe());
    }

    fn describe(&self) -> String {
        let addresses = self.nodes.iter().map(|node| node.address.as_str()).collect::<Vec<_>>();
        format!("memcache[{}]", addresses.join(","))
    }
}
