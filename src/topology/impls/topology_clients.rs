use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;
use crate::topology::enums::topology_layout::TopologyLayout;
use crate::topology::structs::server_topology::ServerTopology;
use crate::topology::structs::topology_clients::TopologyClients;
use log::info;
use std::fmt;
use std::sync::Arc;

impl fmt::Debug for TopologyClients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopologyClients")
            .field("read", &self.read.describe())
            .field("write", &self.write.describe())
            .field("backup", &self.backup.as_ref().map(|backup| backup.describe()))
            .finish()
    }
}

impl TopologyClients {
    pub fn connect(topology: &ServerTopology, config: &CacheConfig) -> Result<TopologyClients, CacheError> {
        let clients = match topology.layout {
            TopologyLayout::shared_pool => {
                let client = Self::build_pool(config, "primary", &topology.write_endpoints)?;
                let backup = topology
                    .backup_endpoints
                    .as_ref()
                    .map(|endpoints| Self::build_pool(config, "backup", endpoints))
                    .transpose()?;
                TopologyClients {
                    read: client.clone(),
                    write: client,
                    backup,
                }
            }
            TopologyLayout::read_write_split => TopologyClients {
                read: Self::build_pool(config, "read", &topology.read_endpoints)?,
                write: Self::build_pool(config, "write", &topology.write_endpoints)?,
                backup: None,
            },
        };
        info!("[Topology] Built {:?}", clients);
        Ok(clients)
    }

    pub fn build_pool(config: &CacheConfig, role: &str, addresses: &[String]) -> Result<Arc<dyn CacheBackend>, CacheError> {
        let client: Arc<dyn CacheBackend> = match config.engine {
            CacheEngine::memcache => Arc::new(CacheConnectorMemcache::new(addresses, config)?),
            CacheEngine::redis => Arc::new(CacheConnectorRedis::new(addresses, config)?),
            CacheEngine::memory => Arc::new(CacheConnectorMemory::new(role)),
        };
        Ok(client)
    }

    pub fn shares_read_write(&self) -> bool {
        Arc::ptr_eq(&self.read, &self.write)
    }

    /// Shuts every distinct client down once; a missing backup is fine.
    pub fn shutdown(&self) {
        self.read.shutdown();
        if !self.shares_read_write() {
            self.write.shutdown();
        }
        if let Some(backup) = &self.backup {
            backup.shutdown();
        }
    }
}
