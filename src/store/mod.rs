//! Store Module
//!
//! Handle over the embedded ordered transactional store (redb).
//!
//! ## Responsibilities
//! - Open the database once at startup, close it once at shutdown
//! - Point writes/deletes, each in its own write transaction
//! - Point reads and read snapshots for enumeration
//!
//! ## Layout
//! A single table maps opaque byte keys to opaque byte values. Ordering is
//! byte-wise ascending and owned by the store; nothing above this layer
//! re-sorts entries.
//!
//! ## Concurrency
//! redb serializes write transactions and gives every read transaction a
//! fixed snapshot, so the handle itself carries no locks.

mod handle;
mod snapshot;

pub use handle::Store;
pub use snapshot::Snapshot;

use redb::{ReadOnlyTable, TableDefinition};

/// The single table holding every entry
pub(crate) const ENTRIES: TableDefinition<&[u8], &[u8]> = TableDefinition::new("entries");

/// Read-only view of `ENTRIES` inside one read transaction
pub(crate) type EntryTable = ReadOnlyTable<&'static [u8], &'static [u8]>;
