use crate::flags::structs::flag_reader::FlagReader;
use crate::topology::structs::topology_clients::TopologyClients;
use std::time::Duration;

#[derive(Debug)]
pub struct DualPathGateway {
    pub(crate) clients: TopologyClients,
    pub(crate) flags: FlagReader,
    pub(crate) operation_timeout: Duration,
}
