//! Store handle
//!
//! Owns the redb `Database` for the lifetime of the process.

use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use redb::backends::InMemoryBackend;
use redb::Database;

use crate::config::{Config, StorageBackend};
use crate::error::{KvError, Result};

use super::{Snapshot, ENTRIES};

/// Handle to the ordered transactional store
///
/// Constructed once by `Engine::open` and shared by reference afterwards.
/// Every method takes `&self`; redb does its own transaction bookkeeping.
pub struct Store {
    db: Database,

    /// Database file, `None` for the in-memory backend
    path: Option<PathBuf>,
}

impl Store {
    const DB_FILENAME: &'static str = "pagekv.redb";

    /// Open or create the store described by `config`
    ///
    /// On startup:
    /// 1. Create the data directory (disk backend only)
    /// 2. Open/create the database file
    /// 3. Create the entries table so fresh databases can be read at once
    pub fn open(config: &Config) -> Result<Self> {
        let (db, path) = match config.storage {
            StorageBackend::Disk => {
                fs::create_dir_all(&config.data_dir)?;
                let path = config.data_dir.join(Self::DB_FILENAME);
                (Database::create(&path)?, Some(path))
            }
            StorageBackend::InMemory => (
                Database::builder().create_with_backend(InMemoryBackend::new())?,
                None,
            ),
        };

        let txn = db.begin_write()?;
        txn.open_table(ENTRIES)?;
        txn.commit()?;

        match &path {
            Some(p) => tracing::info!("Store opened at {}", p.display()),
            None => tracing::info!("Store opened in memory"),
        }

        Ok(Self { db, path })
    }

    /// Begin a read transaction and return its snapshot of the entries table
    pub fn snapshot(&self) -> Result<Snapshot> {
        Snapshot::begin(&self.db)
    }

    /// Read a value by key
    pub fn get(&self, key: &[u8]) -> Result<Bytes> {
        if key.is_empty() {
            return Err(KvError::validation("Key is required"));
        }

        self.snapshot()?.get(key)?.ok_or(KvError::KeyNotFound)
    }

    /// Insert or overwrite a key in one write transaction
    pub fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        if key.is_empty() || value.is_empty() {
            return Err(KvError::validation("Key and value are required"));
        }

        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(ENTRIES)?;
            table.insert(key, value)?;
        }
        txn.commit()?;

        tracing::trace!(key_len = key.len(), value_len = value.len(), "set committed");
        Ok(())
    }

    /// Remove a key in one write transaction
    ///
    /// Removing an absent key is not an error.
    pub fn delete(&self, key: &[u8]) -> Result<()> {
        if key.is_empty() {
            return Err(KvError::validation("Key is required"));
        }

        let txn = self.db.begin_write()?;
        let existed = {
            let mut table = txn.open_table(ENTRIES)?;
            let previous = table.remove(key)?;
            previous.is_some()
        };
        txn.commit()?;

        tracing::trace!(key_len = key.len(), existed, "delete committed");
        Ok(())
    }

    /// Close the store
    ///
    /// Dropping the database releases the file lock; any snapshot still
    /// alive keeps its own pages until it is dropped.
    pub fn close(self) -> Result<()> {
        let Self { db, path } = self;
        drop(db);

        match path {
            Some(p) => tracing::info!("Store closed at {}", p.display()),
            None => tracing::info!("Store closed"),
        }
        Ok(())
    }

    /// Database file path (`None` when in memory)
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
