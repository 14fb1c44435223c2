//! File Backend
//!
//! Stores each record as its own file and swaps new contents in with an
//! atomic rename.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::config::{Config, SyncStrategy};
use crate::error::{FileDbError, Result};
use crate::record::{self, Record};

use super::keys;
use super::recovery::{recover_temp_files, RecoveryResult};
use super::RecordBackend;

/// File-per-record backend rooted at `config.data_dir`
///
/// ## Write Path
/// 1. Encode the record
/// 2. Write it to a fresh temp file inside the collection directory
/// 3. fsync the temp file (`SyncStrategy::EveryWrite`)
/// 4. Rename the temp file over the record file
/// 5. fsync the collection directory (`SyncStrategy::EveryWrite`)
///
/// A crash at any point leaves either the old record or the new one.
pub struct FileBackend {
    /// Backend configuration (root directory, sync strategy)
    config: Config,

    /// Next temp file sequence number (atomic, lock-free)
    temp_seq: AtomicU64,
}

impl FileBackend {
    /// Bind a backend to an existing root directory
    ///
    /// Never creates the root; a missing root is `DirectoryNotFound`.
    pub fn open(config: Config) -> Result<Self> {
        if !config.data_dir.is_dir() {
            return Err(FileDbError::DirectoryNotFound(config.data_dir.clone()));
        }

        Ok(Self {
            config,
            temp_seq: AtomicU64::new(0),
        })
    }

    /// Prepare a collection for use
    ///
    /// Creates the collection directory under the root if it is missing and,
    /// when enabled, removes temp files left by interrupted writes.
    pub fn open_collection(&self, collection: &str) -> Result<RecoveryResult> {
        let dir = self.collection_dir(collection);

        match fs::create_dir(&dir) {
            Ok(()) => {
                debug!(dir = %dir.display(), "created collection directory");
                sync_dir(&self.config.data_dir, self.config.sync_strategy)?;
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e.into()),
        }

        if !self.config.cleanup_temp_files {
            return Ok(RecoveryResult::default());
        }

        let result = recover_temp_files(&dir)?;
        if result.temp_files_removed > 0 {
            warn!(
                collection,
                removed = result.temp_files_removed,
                "removed temp files left by interrupted writes"
            );
        }

        Ok(result)
    }

    /// Directory holding the records of `collection`
    pub fn collection_dir(&self, collection: &str) -> PathBuf {
        self.config.data_dir.join(collection)
    }

    /// Path of the record file for `key`
    pub fn record_path(&self, collection: &str, key: &str) -> PathBuf {
        self.collection_dir(collection)
            .join(keys::record_file_name(key))
    }

    /// Get the root directory
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn write_temp(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;

        file.write_all(bytes)?;

        if self.config.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }

        Ok(())
    }
}

impl RecordBackend for FileBackend {
    fn write_record(&self, collection: &str, key: &str, record: &Record) -> Result<()> {
        let bytes = crate::record::encode(record)?;

        let dir = self.collection_dir(collection);
        let seq = self.temp_seq.fetch_add(1, Ordering::Relaxed);
        let tmp_path = dir.join(keys::temp_file_name(seq));
        let final_path = dir.join(keys::record_file_name(key));

        if let Err(e) = self.write_temp(&tmp_path, &bytes) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        if let Err(e) = fs::rename(&tmp_path, &final_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        sync_dir(&dir, self.config.sync_strategy)?;

        Ok(())
    }

    fn read_record(&self, collection: &str, key: &str) -> Result<Option<Record>> {
        let bytes = match fs::read(self.record_path(collection, key)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        record::decode(&bytes).map(Some)
    }

    fn delete_record(&self, collection: &str, key: &str) -> Result<bool> {
        match fs::remove_file(self.record_path(collection, key)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.into()),
        }

        sync_dir(&self.collection_dir(collection), self.config.sync_strategy)?;

        Ok(true)
    }
}

/// fsync a directory so a rename or unlink inside it is durable
///
/// Under `EveryWrite` a failure is returned: the new file is visible but
/// not yet durable. Directories can't be opened for syncing outside unix,
/// so there it is a no-op.
fn sync_dir(dir: &Path, strategy: SyncStrategy) -> io::Result<()> {
    if strategy != SyncStrategy::EveryWrite {
        return Ok(());
    }

    #[cfg(unix)]
    File::open(dir)?.sync_all()?;

    #[cfg(not(unix))]
    let _ = dir;

    Ok(())
}
