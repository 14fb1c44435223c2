//! # FileDB
//!
//! A minimal durable key-value store with:
//! - One file per record, keyed by string
//! - Atomic writes (temp file + rename) so readers never see partial records
//! - Checksummed record files
//! - Existence derived from reads, never from a separate index
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Store Initializer                         │
//! │          (resolve / create directory, open engine)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! │   create / read / update / delete / upsert  (write lock)     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ FileBackend │─────────▶│   Record    │
//!   │ (tmp+rename)│          │   codec     │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use filedb::store;
//!
//! let engine = store::initialize(None);
//! engine.create("greeting", "hello").unwrap();
//! assert_eq!(engine.read("greeting").unwrap(), "hello");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod storage;
pub mod command;
pub mod engine;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FileDbError, Result};
pub use config::{Config, SyncStrategy};
pub use command::Command;
pub use engine::Engine;
pub use store::{initialize, try_initialize};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FileDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
