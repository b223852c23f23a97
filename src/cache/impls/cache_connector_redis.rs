use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_redis::{CacheConnectorRedis, RedisNode};
use crate::cache::structs::cache_value::CacheValue;
use crate::cache::structs::ketama_ring::KetamaRing;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;
use async_trait::async_trait;
use futures_util::future::join_all;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::OnceCell;

// Memcached counter semantics: missing keys stay missing, decrements floor at zero.
static INCREMENT_SCRIPT: Lazy<redis::Script> = Lazy::new(|| {
    redis::Script::new(
        r"if redis.call('EXISTS', KEYS[1]) == 0 then return false end
return redis.call('INCRBY', KEYS[1], ARGV[1])",
    )
});

static DECREMENT_SCRIPT: Lazy<redis::Script> = Lazy::new(|| {
    redis::Script::new(
        r"local current = redis.call('GET', KEYS[1])
if not current then return false end
local next = tonumber(current) - tonumber(ARGV[1])
if next < 0 then next = 0 end
redis.call('SET', KEYS[1], next, 'KEEPTTL')
return next",
    )
});

// Reconnect attempts the manager makes after a dropped connection before a call fails.
const RECONNECT_RETRIES: usize = 3;

impl RedisNode {
    pub fn new(address: &str, config: &CacheConfig) -> Result<RedisNode, CacheError> {
        let url = format!("{}{}", CacheEngine::redis.url_scheme(), address);
        let client = redis::Client::open(url.as_str())
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client for {}: {}", address, e)))?;
        let manager_config = ConnectionManagerConfig::new()
            .set_connection_timeout(Some(Duration::from_millis(config.connect_timeout_millis)))
            .set_response_timeout(Some(Duration::from_millis(config.operation_timeout_millis)))
            .set_number_of_retries(RECONNECT_RETRIES)
            .set_max_delay(Duration::from_millis(config.reconnect_backoff_millis.max(1)));
        Ok(RedisNode {
            address: address.to_string(),
            client,
            manager_config,
            connection: OnceCell::new(),
        })
    }

    /// The manager is created on first use and re-dials on its own once a
    /// connection drops; a failed first dial is retried on the next call.
    pub async fn connection(&self) -> Result<ConnectionManager, CacheError> {
        let connection = self
            .connection
            .get_or_try_init(|| async {
                let connection = self
                    .client
                    .get_connection_manager_with_config(self.manager_config.clone())
                    .await
                    .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis at {}: {}", self.address, e)))?;
                info!("[Redis] Connected to {}", self.address);
                Ok::<_, CacheError>(connection)
            })
            .await?;
        Ok(connection.clone())
    }
}

impl CacheConnectorRedis {
    pub fn new(addresses: &[String], config: &CacheConfig) -> Result<Self, CacheError> {
        if addresses.is_empty() {
            return Err(CacheError::ConnectionError("Redis pool needs at least one address".to_string()));
        }
        let nodes = addresses
            .iter()
            .map(|address| RedisNode::new(address, config))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            nodes,
            ring: KetamaRing::new(addresses),
            shut_down: AtomicBool::new(false),
        })
    }

    async fn connection_for(&self, key: &str) -> Result<ConnectionManager, CacheError> {
        if self.shut_down.load(Ordering::SeqCst) {
            return Err(CacheError::ShutDown);
        }
        let node = self
            .ring
            .node_for(key)
            .ok_or_else(|| CacheError::OperationError("Redis pool has no nodes".to_string()))?;
        self.nodes[node].connection().await
    }

    pub(crate) fn set_command(key: &str, value: &CacheValue, condition: Option<&str>) -> redis::Cmd {
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value.payload.as_slice());
        if let Some(condition) = condition {
            cmd.arg(condition);
        }
        if value.expiration > 0 {
            cmd.arg("EX").arg(value.expiration);
        }
        cmd
    }

    async fn conditional_set(&self, key: &str, value: &CacheValue, condition: &str) -> Result<bool, CacheError> {
        let mut conn = self.connection_for(key).await?;
        let reply: Option<String> = Self::set_command(key, value, Some(condition))
            .query_async(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(reply.is_some())
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorRedis {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.connection_for(key).await?;
        redis::cmd("GET")
            .arg(key)
            .query_async::<Option<Vec<u8>>>(&mut conn)
            .await
            .map_err(CacheError::RedisError)
    }

    async fn get_bulk(&self, keys: &[String]) -> Result<HashMap<String, Vec<u8>>, CacheError> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }
        let requests = self.ring.partition(keys).into_iter().map(|(_, node_keys)| async move {
            let mut conn = self.connection_for(node_keys[0]).await?;
            let values: Vec<Option<Vec<u8>>> = redis::cmd("MGET")
                .arg(node_keys.as_slice())
                .query_async(&mut conn)
                .await
                .map_err(CacheError::RedisError)?;
            Ok::<_, CacheError>(
                node_keys
                    .into_iter()
                    .zip(values)
                    .filter_map(|(key, value)| value.map(|value| (key.to_string(), value)))
                    .collect::<Vec<_>>(),
            )
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
                    warn!("[Redis] Bulk get failed on one node: {}", e);
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
        let mut conn = self.connection_for(key).await?;
        Self::set_command(key, value, None)
            .query_async::<()>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Set {} ({} bytes, exp={})", key, value.payload.len(), value.expiration);
        Ok(true)
    }

    async fn add(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError> {
        self.conditional_set(key, value, "NX").await
    }

    async fn replace(&self, key: &str, value: &CacheValue) -> Result<bool, CacheError> {
        self.conditional_set(key, value, "XX").await
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.connection_for(key).await?;
        let removed: i64 = redis::cmd("DEL")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Deleted {} ({})", key, removed);
        Ok(removed > 0)
    }

    async fn increment(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError> {
        let mut conn = self.connection_for(key).await?;
        let value: Option<i64> = INCREMENT_SCRIPT
            .key(key)
            .arg(amount)
            .invoke_async(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(value.map(|value| value.max(0) as u64))
    }

    async fn decrement(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError> {
        let mut conn = self.connection_for(key).await?;
        let value: Option<i64> = DECREMENT_SCRIPT
            .key(key)
            .arg(amount)
            .invoke_async(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(value.map(|value| value.max(0) as u64))
    }

    async fn flush(&self) -> Result<(), CacheError> {
        if self.shut_down.load(Ordering::SeqCst) {
            return Err(CacheError::ShutDown);
        }
        let requests = self.nodes.iter().map(|node| async move {
            let mut conn = node.connection().await?;
            redis::cmd("FLUSHDB")
                .query_async::<()>(&mut conn)
                .await
                .map_err(CacheError::RedisError)
        });
        let mut result = Ok(());
        for outcome in join_all(requests).await {
            if let Err(e) = outcome {
                warn!("[Redis] Flush failed on one node: {}", e);
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }

    fn shutdown(&self) {
        if !self.shut_down.swap(true, Ordering::SeqCst) {
            info!("[Redis] Pool {} shut down", self.describe());
        }
    }

    fn describe(&self) -> String {
        let addresses = self.nodes.iter().map(|node| node.address.as_str()).collect::<Vec<_>>();
        format!("redis[{}]", addresses.join(","))
    }
}
