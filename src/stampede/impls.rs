pub mod read_outcome;
pub mod stampede_guard;
