//! Shared helpers: logging set-up and value rendering for the CLI.

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
