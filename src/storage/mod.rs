//! Storage Module
//!
//! Persistent storage layer: one atomically written file per record.
//!
//! ## Responsibilities
//! - Map keys to file names (reversible, collision-free)
//! - Write records atomically (temp file + rename)
//! - Read and delete record files
//! - Clean up temp files left by interrupted writes
//!
//! ## Directory Layout
//! ```text
//! {data_dir}/
//!   └── {collection}/
//!         ├── {encoded-key}.rec                  (live record)
//!         └── .{encoded-key}.{pid}.{seq}.tmp     (in-flight write)
//! ```

mod file;
pub mod keys;
mod recovery;

use crate::error::Result;
use crate::record::Record;

pub use file::FileBackend;
pub use recovery::{recover_temp_files, RecoveryResult};

/// Durable record storage used by the engine
///
/// Implementations must make `write_record` atomic from a reader's point of
/// view: a concurrent `read_record` sees either the previous record or the
/// new one, never a partial write.
pub trait RecordBackend: Send + Sync {
    /// Durably write `record` under `key`, replacing any previous record
    fn write_record(&self, collection: &str, key: &str, record: &Record) -> Result<()>;

    /// Read the record stored under `key`
    ///
    /// Returns:
    /// - `Ok(Some(record))` — record found and decoded
    /// - `Ok(None)` — no record stored for `key`
    /// - `Err(Corruption)` — a file exists but can't be decoded
    fn read_record(&self, collection: &str, key: &str) -> Result<Option<Record>>;

    /// Remove the record stored under `key`
    ///
    /// Returns `false` if there was nothing to remove.
    fn delete_record(&self, collection: &str, key: &str) -> Result<bool>;
}
