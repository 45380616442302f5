//! Snapshot Enumerator
//!
//! Lazy forward iteration over every entry of one snapshot.

use std::collections::VecDeque;

use redb::Range;

use crate::error::Result;

use super::RawEntry;

/// Forward cursor over a snapshot, lowest key first
///
/// Entry handles are pulled from the store in batches of at most
/// `prefetch`; value bytes are never copied here. The cursor cannot be
/// rewound: a restart needs a new enumerator from the snapshot.
pub struct SnapshotEnumerator<'t> {
    cursor: Range<'t, &'static [u8], &'static [u8]>,

    /// Handles fetched but not yet yielded
    batch: VecDeque<Result<RawEntry<'t>>>,

    /// Max handles per batch
    prefetch: usize,

    /// Set once the cursor returned its last item (or an error)
    exhausted: bool,
}

impl<'t> SnapshotEnumerator<'t> {
    pub(crate) fn new(cursor: Range<'t, &'static [u8], &'static [u8]>, prefetch: usize) -> Self {
        let prefetch = prefetch.max(1);
        Self {
            cursor,
            batch: VecDeque::with_capacity(prefetch),
            prefetch,
            exhausted: false,
        }
    }

    fn refill(&mut self) {
        while self.batch.len() < self.prefetch {
            match self.cursor.next() {
                Some(Ok((key, value))) => self.batch.push_back(Ok(RawEntry { key, value })),
                Some(Err(e)) => {
                    // Nothing after a storage error is trustworthy.
                    self.batch.push_back(Err(e.into()));
                    self.exhausted = true;
                    break;
                }
                None => {
                    self.exhausted = true;
                    break;
                }
            }
        }
    }
}

impl<'t> Iterator for SnapshotEnumerator<'t> {
    type Item = Result<RawEntry<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.batch.is_empty() && !self.exhausted {
            self.refill();
        }
        self.batch.pop_front()
    }
}
