//! Scan Module
//!
//! Enumeration and pagination over a read snapshot.
//!
//! ## Pipeline
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   Snapshot   │───▶│  KeyFilter   │───▶│  Paginator   │
//! │  Enumerator  │    │  (optional)  │    │ count, fetch │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Entries travel through the pipeline as [`RawEntry`] handles that borrow
//! key and value from the store's pages. Only entries that land in the page
//! window are copied out into owned [`Entry`] values.

mod enumerator;
mod filter;
mod paginator;

pub use enumerator::SnapshotEnumerator;
pub use filter::{KeyFilter, Matches};
pub use paginator::{PageRequest, PageResult, Paginator};

use bytes::Bytes;
use redb::AccessGuard;

/// An owned key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: Bytes,
    pub value: Bytes,
}

impl Entry {
    pub fn new(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An entry still owned by the snapshot it was read from
pub struct RawEntry<'t> {
    key: AccessGuard<'t, &'static [u8]>,
    value: AccessGuard<'t, &'static [u8]>,
}

impl<'t> RawEntry<'t> {
    pub fn key(&self) -> &[u8] {
        self.key.value()
    }

    pub fn value(&self) -> &[u8] {
        self.value.value()
    }

    /// Copy key and value out of the store
    pub fn into_entry(self) -> Entry {
        Entry {
            key: Bytes::copy_from_slice(self.key()),
            value: Bytes::copy_from_slice(self.value()),
        }
    }
}
