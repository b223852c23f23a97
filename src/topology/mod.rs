//! Server topology parsing and client construction.
//!
//! The topology is a single string with two shapes:
//!
//! - no comma: `primary[|backup]`, one pool for reads and writes plus an
//!   optional backup pool (`"10.0.0.1:11211 10.0.0.2:11211|10.0.0.3:11211"`)
//! - with a comma: `write-pool read-pool` separated by one space, each pool a
//!   comma separated address list (`"10.0.0.1:11211,10.0.0.2:11211 10.0.0.3:11211"`)
//!
//! The presence of a comma anywhere in the raw string selects the shape.

pub mod enums;
pub mod impls;
pub mod structs;

#[cfg(test)]
mod tests;
