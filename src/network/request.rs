//! HTTP request types.

use axum::http::Uri;
use percent_encoding::percent_decode_str;
use serde::Deserialize;

use crate::error::{KvError, Result};
use crate::protocol::Command;
use crate::scan::PageRequest;

/// Decoded query string pairs, in request order.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `name`; later repeats are ignored.
fn first_value(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}

/// Key addressed by a `/<route>/<key>` path.
///
/// Everything after `prefix` is the key, slashes included. Percent escapes
/// decode to raw bytes, so keys need not be valid UTF-8.
pub fn path_key(uri: &Uri, prefix: &str) -> Vec<u8> {
    let rest = uri.path().strip_prefix(prefix).unwrap_or_default();
    percent_decode_str(rest).collect()
}

/// Query parameters for list requests.
///
/// Kept as raw strings so malformed numbers fall back to defaults instead
/// of rejecting the request.
#[derive(Debug, Default)]
pub struct PageParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PageParams {
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_value(pairs, "page"),
            page_size: first_value(pairs, "page_size"),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref(), self.page_size.as_deref())
    }
}

/// Query parameters for search requests.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl SearchParams {
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        Self {
            keyword: first_value(pairs, "keyword"),
            page: first_value(pairs, "page"),
            page_size: first_value(pairs, "page_size"),
        }
    }

    pub fn into_command(self) -> Result<Command> {
        let page = PageRequest::parse(self.page.as_deref(), self.page_size.as_deref());
        match self.keyword {
            Some(keyword) if !keyword.is_empty() => Ok(Command::Search {
                keyword: keyword.into_bytes(),
                page,
            }),
            _ => Err(KvError::validation("Keyword is required")),
        }
    }
}

/// Request body for set operations.
#[derive(Debug, Deserialize)]
pub struct SetBody {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl SetBody {
    /// Parse a JSON body
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map_err(|e| KvError::validation(format!("Invalid request body: {}", e)))
    }

    /// Both fields must be present; emptiness is checked by the store.
    pub fn into_command(self) -> Result<Command> {
        let key = self.key.ok_or_else(|| KvError::validation("Key is required"))?;
        let value = self
            .value
            .ok_or_else(|| KvError::validation("Value is required"))?;

        Ok(Command::Set {
            key: key.into_bytes(),
            value: value.into_bytes(),
        })
    }
}
