//! Persistence store
//!
//! Whole-collection snapshot persistence: the complete id -> record map is
//! rewritten to a single JSON file after every successful mutation.

mod errors;
mod snapshot;

pub use errors::{StoreError, StoreResult};
pub use snapshot::SnapshotStore;
