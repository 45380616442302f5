//! Engine Module
//!
//! Executes commands against the store.
//!
//! ## Responsibilities
//! - Own the store handle between startup and shutdown
//! - Route point commands straight to store transactions
//! - Drive the paginator for LIST and SEARCH

use std::path::Path;

use bytes::Bytes;

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{Command, Reply};
use crate::scan::{KeyFilter, PageRequest, PageResult, Paginator};
use crate::store::Store;

/// The command executor shared by every request
///
/// ## Concurrency Model
///
/// - **Writes** (set/delete): one redb write transaction each; redb lets
///   only one run at a time across the process.
/// - **Reads** (get/list/search): each opens read transactions that run
///   concurrently with each other and with the in-flight writer.
///
/// The engine holds no mutable state of its own, so `Arc<Engine>` is all
/// callers need to share it.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Handle to the ordered transactional store
    store: Store,
}

impl Engine {
    /// Open or create an engine with the given config
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        let store = Store::open(&config)?;

        tracing::debug!(
            prefetch = config.prefetch_size,
            consistency = ?config.consistency,
            "engine ready"
        );

        Ok(Self { config, store })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Reply> {
        tracing::trace!(command = command.command_type().as_str(), "executing");

        match command {
            Command::Get { key } => self.get(&key).map(Reply::Value),
            Command::Set { key, value } => {
                self.set(&key, &value)?;
                Ok(Reply::Stored { key })
            }
            Command::Delete { key } => {
                self.delete(&key)?;
                Ok(Reply::Deleted { key })
            }
            Command::List { page } => self.list(page).map(Reply::Page),
            Command::Search { keyword, page } => self.search(&keyword, page).map(Reply::Page),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &[u8]) -> Result<Bytes> {
        self.store.get(key)
    }

    /// Put a key-value pair
    pub fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.store.set(key, value)
    }

    /// Delete a key
    pub fn delete(&self, key: &[u8]) -> Result<()> {
        self.store.delete(key)
    }

    /// One page of all entries, in key order
    pub fn list(&self, page: PageRequest) -> Result<PageResult> {
        self.paginator().paginate(page, None)
    }

    /// One page of entries whose key contains `keyword`
    pub fn search(&self, keyword: &[u8], page: PageRequest) -> Result<PageResult> {
        let filter = KeyFilter::new(keyword)?;
        self.paginator().paginate(page, Some(&filter))
    }

    fn paginator(&self) -> Paginator<'_> {
        Paginator::new(&self.store, self.config.consistency, self.config.prefetch_size)
    }

    /// Close the engine gracefully
    pub fn close(self) -> Result<()> {
        self.store.close()
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the store handle
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
