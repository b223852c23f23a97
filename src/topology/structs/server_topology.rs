use crate::topology::enums::topology_layout::TopologyLayout;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerTopology {
    pub read_endpoints: Vec<String>,
    pub write_endpoints: Vec<String>,
    pub backup_endpoints: Option<Vec<String>>,
    pub layout: TopologyLayout,
}
