use serde::{Deserialize, Serialize};

/// `shared_pool`: one client serves reads and writes, optional backup pool.
/// `read_write_split`: independent read and write clients, never a backup.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyLayout {
    shared_pool,
    read_write_split,
}
