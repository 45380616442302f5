//! Predicate Filter
//!
//! Key-substring filtering on top of a snapshot enumerator.

use crate::error::{KvError, Result};

use super::{RawEntry, SnapshotEnumerator};

/// Matches keys containing a keyword as a contiguous byte substring
///
/// Case-sensitive. Keys need not be valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFilter {
    keyword: Vec<u8>,
}

impl KeyFilter {
    /// Build a filter; the keyword must not be empty
    pub fn new(keyword: impl Into<Vec<u8>>) -> Result<Self> {
        let keyword = keyword.into();
        if keyword.is_empty() {
            return Err(KvError::validation("Keyword is required"));
        }
        Ok(Self { keyword })
    }

    /// Does `key` contain the keyword?
    pub fn matches(&self, key: &[u8]) -> bool {
        key.windows(self.keyword.len())
            .any(|window| window == self.keyword.as_slice())
    }
}

/// Enumerator restricted to entries accepted by an optional [`KeyFilter`]
///
/// Only keys are inspected; rejected entries are dropped without their
/// values ever being read. Errors from the enumerator pass through.
pub struct Matches<'t, 'f> {
    entries: SnapshotEnumerator<'t>,
    filter: Option<&'f KeyFilter>,
}

impl<'t, 'f> Matches<'t, 'f> {
    pub fn new(entries: SnapshotEnumerator<'t>, filter: Option<&'f KeyFilter>) -> Self {
        Self { entries, filter }
    }
}

impl<'t, 'f> Iterator for Matches<'t, 'f> {
    type Item = Result<RawEntry<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(filter) = self.filter else {
            return self.entries.next();
        };

        self.entries.find(|item| match item {
            Ok(entry) => filter.matches(entry.key()),
            Err(_) => true,
        })
    }
}
