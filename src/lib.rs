//! # PageKV
//!
//! An HTTP key-value service over an embedded ordered transactional store:
//! - Point set/get/delete, one store transaction each
//! - Offset-paginated listing of every entry in key order
//! - Key-substring search with the same pagination
//! - Snapshot-consistent page totals
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │              (axum, CORS + tracing layers)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                 │
//! │               (blocking worker per request)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Point ops   │          │  Paginator  │
//!   │ (write txn) │          │ count/fetch │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │ Enumerator → KeyFilter
//!          ▼                        ▼
//!   ┌───────────────────────────────────────┐
//!   │        Store (redb, one table)        │
//!   └───────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod scan;
pub mod protocol;
pub mod engine;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::{Config, SnapshotConsistency, StorageBackend};
pub use engine::Engine;
pub use scan::{Entry, PageRequest, PageResult};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of PageKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
