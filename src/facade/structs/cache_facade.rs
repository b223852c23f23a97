use crate::gateway::structs::dual_path_gateway::DualPathGateway;
use crate::stampede::structs::stampede_guard::StampedeGuard;
use crate::topology::structs::server_topology::ServerTopology;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

#[derive(Debug)]
pub struct CacheFacade {
    pub(crate) topology: Option<ServerTopology>,
    pub(crate) gateway: Arc<DualPathGateway>,
    pub(crate) guard: StampedeGuard,
    pub(crate) shut_down: AtomicBool,
}
