//! Read snapshot
//!
//! A read transaction pinned together with its view of the entries table.

use bytes::Bytes;
use redb::{Database, ReadTransaction, ReadableTable};

use crate::error::Result;
use crate::scan::SnapshotEnumerator;

use super::{EntryTable, ENTRIES};

/// Fixed view of the key space as of the moment it was opened
///
/// Writes committed after `begin` are never visible through it. Any number
/// of enumerators may run over the same snapshot; each starts at the lowest
/// key.
pub struct Snapshot {
    table: EntryTable,

    // Declared after `table` so the table is dropped first.
    _txn: ReadTransaction,
}

impl Snapshot {
    pub(super) fn begin(db: &Database) -> Result<Self> {
        let txn = db.begin_read()?;
        let table = txn.open_table(ENTRIES)?;
        Ok(Self { table, _txn: txn })
    }

    /// Point lookup inside this snapshot
    pub fn get(&self, key: &[u8]) -> Result<Option<Bytes>> {
        let guard = self.table.get(key)?;
        Ok(guard.map(|value| Bytes::copy_from_slice(value.value())))
    }

    /// Start a forward cursor at the lowest key
    ///
    /// `prefetch` bounds how many entry handles are pulled from the store
    /// per batch.
    pub fn entries(&self, prefetch: usize) -> Result<SnapshotEnumerator<'_>> {
        let cursor = self.table.iter()?;
        Ok(SnapshotEnumerator::new(cursor, prefetch))
    }
}
