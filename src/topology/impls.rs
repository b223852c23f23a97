pub mod server_topology;
pub mod topology_clients;
