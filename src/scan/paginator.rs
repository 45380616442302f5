//! Paginator
//!
//! Offset pagination over an optionally filtered snapshot.
//!
//! ## Algorithm
//! 1. Count pass: walk every match, counting; values are never read.
//! 2. Fetch pass: walk a fresh enumerator, skip `offset` matches, then copy
//!    out up to `page_size` entries and stop.
//!
//! Both passes scan from the lowest key, so cost is linear in the size of
//! the key space on every call.

use crate::config::SnapshotConsistency;
use crate::error::Result;
use crate::store::{Snapshot, Store};

use super::{Entry, KeyFilter, Matches};

/// Normalized page coordinates (both 1-based and at least 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub const DEFAULT_PAGE: usize = 1;
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Zero for either value falls back to its default
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: if page == 0 { Self::DEFAULT_PAGE } else { page },
            page_size: if page_size == 0 {
                Self::DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    /// Lenient parse of raw query values
    ///
    /// Missing, non-numeric, negative, zero or overflowing input falls back
    /// to the defaults.
    pub fn parse(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self::new(parse_or_zero(page), parse_or_zero(page_size))
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of matches preceding this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

fn parse_or_zero(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.parse::<usize>().ok()).unwrap_or(0)
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_PAGE_SIZE)
    }
}

/// One page of entries plus the total number of matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub items: Vec<Entry>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl PageResult {
    /// True when the page is empty although matches exist
    pub fn is_past_end(&self) -> bool {
        self.items.is_empty() && self.total > 0
    }
}

/// Drives count and fetch passes against the store
pub struct Paginator<'s> {
    store: &'s Store,
    consistency: SnapshotConsistency,
    prefetch: usize,
}

impl<'s> Paginator<'s> {
    pub fn new(store: &'s Store, consistency: SnapshotConsistency, prefetch: usize) -> Self {
        Self {
            store,
            consistency,
            prefetch,
        }
    }

    /// Compute one page
    ///
    /// With `SingleSnapshot` both passes share one read transaction and
    /// `total` always agrees with `items`. With `IndependentSnapshots` each
    /// pass opens its own, so a write landing between them is visible to
    /// the fetch pass only.
    pub fn paginate(&self, request: PageRequest, filter: Option<&KeyFilter>) -> Result<PageResult> {
        let (total, items) = match self.consistency {
            SnapshotConsistency::SingleSnapshot => {
                let snapshot = self.store.snapshot()?;
                let total = self.count(&snapshot, filter)?;
                let items = self.fetch(&snapshot, filter, request)?;
                (total, items)
            }
            SnapshotConsistency::IndependentSnapshots => {
                let total = self.count(&self.store.snapshot()?, filter)?;
                let items = self.fetch(&self.store.snapshot()?, filter, request)?;
                (total, items)
            }
        };

        tracing::debug!(
            page = request.page(),
            page_size = request.page_size(),
            filtered = filter.is_some(),
            total,
            returned = items.len(),
            "page computed"
        );

        Ok(PageResult {
            items,
            page: request.page(),
            page_size: request.page_size(),
            total,
        })
    }

    /// Count pass
    fn count(&self, snapshot: &Snapshot, filter: Option<&KeyFilter>) -> Result<usize> {
        let mut total = 0;
        for item in Matches::new(snapshot.entries(self.prefetch)?, filter) {
            item?;
            total += 1;
        }
        Ok(total)
    }

    /// Fetch pass
    fn fetch(
        &self,
        snapshot: &Snapshot,
        filter: Option<&KeyFilter>,
        request: PageRequest,
    ) -> Result<Vec<Entry>> {
        let offset = request.offset();
        let limit = request.page_size();
        let mut items = Vec::with_capacity(limit.min(self.prefetch));
        let mut skipped = 0;

        for item in Matches::new(snapshot.entries(self.prefetch)?, filter) {
            let entry = item?;
            if skipped < offset {
                skipped += 1;
                continue;
            }

            items.push(entry.into_entry());
            if items.len() >= limit {
                break;
            }
        }

        Ok(items)
    }
}
