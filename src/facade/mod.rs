//! Public cache surface.
//!
//! [`structs::cache_facade::CacheFacade`] normalizes keys, routes reads and
//! mutations through the dual-path gateway and runs hot reads through the
//! stampede guard. One facade is shared by every caller, usually in an `Arc`.

pub mod impls;
pub mod structs;
