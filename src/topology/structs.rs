/// Parsed endpoint lists.
pub mod server_topology;

/// Backend clients built from a topology.
pub mod topology_clients;
