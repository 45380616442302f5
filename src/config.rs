//! Configuration for PageKV
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{KvError, Result};

/// Main configuration for a PageKV instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the database file
    /// Internal structure:
    ///   {data_dir}/
    ///     └── pagekv.redb
    pub data_dir: PathBuf,

    /// Where the store keeps its pages
    pub storage: StorageBackend,

    // -------------------------------------------------------------------------
    // Scan Configuration
    // -------------------------------------------------------------------------
    /// Number of entry handles the enumerator pulls from the store per batch
    pub prefetch_size: usize,

    /// Whether the count and fetch passes of a page share one snapshot
    pub consistency: SnapshotConsistency,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

/// Backing medium for the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Database file under `data_dir`
    Disk,

    /// Volatile in-process pages (tests, scratch servers)
    InMemory,
}

/// Snapshot policy for the paginator's two passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotConsistency {
    /// Count and fetch run inside one read transaction; `total` always
    /// agrees with the items returned.
    SingleSnapshot,

    /// Count and fetch each open their own read transaction. A write
    /// committed between the passes can make `total` and `items` disagree.
    IndependentSnapshots,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./pagekv_data"),
            storage: StorageBackend::Disk,
            prefetch_size: 100,
            consistency: SnapshotConsistency::SingleSnapshot,
            listen_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.prefetch_size == 0 {
            return Err(KvError::Config("prefetch_size must be at least 1".to_string()));
        }
        if self.listen_addr.is_empty() {
            return Err(KvError::Config("listen_addr must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the storage backend
    pub fn storage(mut self, storage: StorageBackend) -> Self {
        self.config.storage = storage;
        self
    }

    /// Shorthand for `storage(StorageBackend::InMemory)`
    pub fn in_memory(self) -> Self {
        self.storage(StorageBackend::InMemory)
    }

    /// Set the enumerator batch size
    pub fn prefetch_size(mut self, size: usize) -> Self {
        self.config.prefetch_size = size;
        self
    }

    /// Set the pagination snapshot policy
    pub fn consistency(mut self, consistency: SnapshotConsistency) -> Self {
        self.config.consistency = consistency;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
