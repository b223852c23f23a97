//! Primary/backup orchestration.
//!
//! Reads go to the read client and fall back to the backup pool on a miss.
//! Mutations go to the write client, whose result is authoritative, and are
//! then mirrored best-effort to the backup pool. The backup path is only
//! used while the `dual-read-write-enabled` flag is on and a backup exists.

pub mod enums;
pub mod impls;
pub mod structs;
