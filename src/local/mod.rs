//! Process-local fallback cache.
//!
//! Only the hot-key protocol uses it: hot hits are copied here and served
//! while another caller holds the recompute lock.

pub mod impls;
pub mod structs;
pub mod traits;
