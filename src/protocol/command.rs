//! Command definitions
//!
//! Represents requests from clients and what the engine answers.

use bytes::Bytes;

use crate::scan::{PageRequest, PageResult};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Get,
    Set,
    Delete,
    List,
    Search,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Get => "get",
            CommandType::Set => "set",
            CommandType::Delete => "delete",
            CommandType::List => "list",
            CommandType::Search => "search",
        }
    }
}

/// A parsed command
#[derive(Debug, Clone)]
pub enum Command {
    /// Get a value by key
    Get { key: Vec<u8> },

    /// Insert or overwrite a key
    Set { key: Vec<u8>, value: Vec<u8> },

    /// Delete a key
    Delete { key: Vec<u8> },

    /// Page through every entry
    List { page: PageRequest },

    /// Page through entries whose key contains `keyword`
    Search { keyword: Vec<u8>, page: PageRequest },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Get { .. } => CommandType::Get,
            Command::Set { .. } => CommandType::Set,
            Command::Delete { .. } => CommandType::Delete,
            Command::List { .. } => CommandType::List,
            Command::Search { .. } => CommandType::Search,
        }
    }
}

/// Successful outcome of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Raw value bytes (GET)
    Value(Bytes),

    /// Key written (SET)
    Stored { key: Vec<u8> },

    /// Key removed or already absent (DELETE)
    Deleted { key: Vec<u8> },

    /// A page of entries (LIST, SEARCH)
    Page(PageResult),
}

impl Reply {
    /// Plain-text confirmation for write replies
    pub fn message(&self) -> Option<String> {
        match self {
            Reply::Stored { key } => Some(format!(
                "Key '{}' set successfully",
                String::from_utf8_lossy(key)
            )),
            Reply::Deleted { key } => Some(format!(
                "Key '{}' deleted successfully",
                String::from_utf8_lossy(key)
            )),
            Reply::Value(_) | Reply::Page(_) => None,
        }
    }
}
