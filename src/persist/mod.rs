//! Persistence format. Storage itself belongs to the caller.

pub mod snapshot;

pub use snapshot::{GameSnapshot, SNAPSHOT_VERSION};
