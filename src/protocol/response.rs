//! Response shapes
//!
//! JSON bodies for page results. Keys and values are opaque bytes; they are
//! rendered as UTF-8 with invalid sequences replaced.

use serde::Serialize;

use crate::scan::{Entry, PageResult};

/// A single entry in a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryBody {
    pub key: String,
    pub value: String,
}

impl From<&Entry> for EntryBody {
    fn from(entry: &Entry) -> Self {
        Self {
            key: String::from_utf8_lossy(&entry.key).into_owned(),
            value: String::from_utf8_lossy(&entry.value).into_owned(),
        }
    }
}

/// Page Result as sent over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageBody {
    pub items: Vec<EntryBody>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl From<&PageResult> for PageBody {
    fn from(page: &PageResult) -> Self {
        Self {
            items: page.items.iter().map(EntryBody::from).collect(),
            page: page.page,
            page_size: page.page_size,
            total: page.total,
        }
    }
}
