pub mod mutation;
pub mod mutation_outcome;
