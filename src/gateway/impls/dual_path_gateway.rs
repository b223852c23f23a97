use crate::cache::errors::CacheError;
use crate::cache::structs::cache_value::CacheValue;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::executor::executor::{run_bounded, run_with_deadline};
use crate::flags::structs::feature_flags::FeatureFlags;
use crate::flags::structs::flag_reader::FlagReader;
use crate::gateway::enums::mutation::Mutation;
use crate::gateway::enums::mutation_outcome::MutationOutcome;
use crate::gateway::structs::dual_path_gateway::DualPathGateway;
use crate::topology::structs::topology_clients::TopologyClients;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

impl DualPathGateway {
    pub fn new(clients: TopologyClients, flags: FlagReader, operation_timeout: Duration) -> DualPathGateway {
        DualPathGateway {
            clients,
            flags,
            operation_timeout,
        }
    }

    pub fn clients(&self) -> &TopologyClients {
        &self.clients
    }

    pub fn flags(&self) -> &FlagReader {
        &self.flags
    }

    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    fn backup_path(&self, flags: &FeatureFlags) -> Option<&Arc<dyn CacheBackend>> {
        if !flags.dual_read_write_enabled {
            return None;
        }
        self.clients.backup.as_ref()
    }

    /// Primary first; the backup is consulted only after a primary miss.
    pub async fn read(&self, key: &str) -> Option<Vec<u8>> {
        let flags = self.flags.current();
        let timeout = flags.get_timeout();
        if let Some(value) = run_bounded("get", timeout, self.clients.read.get(key)).await.flatten() {
            return Some(value);
        }
        let backup = self.backup_path(&flags)?;
        let value = run_bounded("backup get", timeout, backup.get(key)).await.flatten();
        if value.is_some() {
            debug!("[Gateway] {} served from backup", key);
        }
        value
    }

    pub async fn read_bulk(&self, keys: &[String]) -> HashMap<String, Vec<u8>> {
        if keys.is_empty() {
            return HashMap::new();
        }
        let flags = self.flags.current();
        let timeout = flags.get_timeout();
        let primary = run_bounded("get_bulk", timeout, self.clients.read.get_bulk(keys)).await.unwrap_or_default();
        if !primary.is_empty() {
            return primary;
        }
        let Some(backup) = self.backup_path(&flags) else {
            return primary;
        };
        match run_bounded("backup get_bulk", timeout, backup.get_bulk(keys)).await {
            Some(found) => {
                debug!("[Gateway] Bulk read of {} keys served {} from backup", keys.len(), found.len());
                found
            }
            None => primary,
        }
    }

    /// Applies `mutation` to the write client, then mirrors it to the backup.
    /// Only the write client's result is returned.
    pub async fn mutate(&self, mutation: Mutation) -> Result<MutationOutcome, CacheError> {
        let flags = self.flags.current();
        let outcome = run_with_deadline(mutation.name(), self.operation_timeout, mutation.apply(self.clients.write.as_ref())).await;
        if let Err(e) = &outcome {
            warn!("[Gateway] {} on {} failed: {}", mutation.name(), mutation.key().unwrap_or("*"), e);
        }

        if let Some(backup) = self.backup_path(&flags) {
            match run_bounded("backup mirror", flags.get_timeout(), mutation.apply(backup.as_ref())).await {
                Some(mirrored) => match &outcome {
                    Ok(primary) if *primary != mirrored => {
                        debug!("[Gateway] Backup diverged on {} {}: {:?} vs {:?}", mutation.name(), mutation.key().unwrap_or("*"), primary, mirrored);
                    }
                    _ => {}
                },
                None => warn!("[Gateway] Mirroring {} on {} to backup failed", mutation.name(), mutation.key().unwrap_or("*")),
            }
        }
        outcome
    }

    /// `add` on the write client and, when dual is on, the backup at the same
    /// time. The backup's answer only counts when the primary's is unknown.
    pub async fn acquire_lock(&self, lock_key: &str, token: &CacheValue) -> Option<bool> {
        let flags = self.flags.current();
        let timeout = flags.get_timeout();
        let primary = run_bounded("lock add", timeout, self.clients.write.add(lock_key, token));
        match self.backup_path(&flags) {
            None => primary.await,
            Some(backup) => {
                let mirrored = run_bounded("backup lock add", timeout, backup.add(lock_key, token));
                let (primary, mirrored) = tokio::join!(primary, mirrored);
                primary.or(mirrored)
            }
        }
    }

    pub fn shutdown(&self) {
        self.clients.shutdown();
    }
}
