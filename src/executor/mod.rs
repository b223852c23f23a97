//! Timeout-bounded backend access.
//!
//! Read paths use [`executor::run_bounded`], which turns any failure or
//! timeout into a miss. The authoritative write path uses
//! [`executor::run_with_deadline`], which surfaces them as errors.

#[allow(clippy::module_inception)]
pub mod executor;
