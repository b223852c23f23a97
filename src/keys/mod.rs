//! Cache key normalization.
//!
//! Backend wire protocols reject whitespace and control characters in keys.
//! [`codec::normalize`] rewrites them into sentinel sequences and
//! [`codec::denormalize`] restores them; bulk reads use
//! [`structs::bulk_key_mapping::BulkKeyMapping`] to translate result keys back.

pub mod codec;

pub mod impls;
pub mod structs;

#[cfg(test)]
mod tests;
