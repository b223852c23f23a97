pub mod dual_path_gateway;
pub mod mutation;
pub mod mutation_outcome;
