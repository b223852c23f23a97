pub mod topology_layout;
