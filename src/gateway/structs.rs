pub mod dual_path_gateway;
