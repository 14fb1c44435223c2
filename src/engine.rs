//! Engine Module
//!
//! The persistence engine: CRUD over string keys and string values.
//!
//! ## Responsibilities
//! - Reject empty keys before touching storage
//! - Enforce existence preconditions (create / update / delete)
//! - Serialize writers on the collection
//! - Derive existence from the read path, never from a separate index

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::command::Command;
use crate::config::Config;
use crate::error::{FileDbError, Result};
use crate::record::Record;
use crate::storage::{FileBackend, RecordBackend};

/// Name of the single collection all records live in
pub const COLLECTION: &str = "record";

/// The main persistence engine
///
/// ## Concurrency Model: Serialized Writers / Lock-Free Readers
///
/// - **Writes** (create/update/delete/upsert): Serialized by `write_lock`
///   - The existence check and the write happen under one guard, so
///     check-then-act can't race with another writer
///
/// - **Reads**: No lock
///   - The backend's atomic rename means a reader sees the old record or
///     the new one, never a partial write
///
/// Share an engine across threads with `Arc<Engine>`.
pub struct Engine<B: RecordBackend = FileBackend> {
    /// Record storage
    backend: B,

    /// Serializes write operations on the collection
    write_lock: Mutex<()>,
}

impl Engine<FileBackend> {
    /// Open an engine over an existing directory
    ///
    /// On startup:
    /// 1. Check the data directory exists (never created here)
    /// 2. Create the collection directory if missing
    /// 3. Remove temp files from interrupted writes
    /// 4. Ready to serve requests
    pub fn open(config: Config) -> Result<Self> {
        let backend = FileBackend::open(config)?;
        let recovery = backend.open_collection(COLLECTION)?;

        debug!(
            data_dir = %backend.data_dir().display(),
            records = recovery.records_found,
            temp_files_removed = recovery.temp_files_removed,
            "engine opened"
        );

        Ok(Self::with_backend(backend))
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        self.backend.data_dir()
    }

    /// Get the collection directory path (where record files are stored)
    pub fn collection_dir(&self) -> PathBuf {
        self.backend.collection_dir(COLLECTION)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        self.backend.config()
    }
}

impl<B: RecordBackend> Engine<B> {
    /// Build an engine over any backend
    ///
    /// The backend must already be able to serve the `record` collection.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers. Only `Read` yields a value.
    pub fn execute(&self, command: Command) -> Result<Option<String>> {
        match command {
            Command::Create { key, value } => {
                self.create(&key, &value)?;
                Ok(None)
            }
            Command::Read { key } => self.read(&key).map(Some),
            Command::Update { key, value } => {
                self.update(&key, &value)?;
                Ok(None)
            }
            Command::Delete { key } => {
                self.delete(&key)?;
                Ok(None)
            }
            Command::Upsert { key, value } => {
                self.upsert(&key, &value)?;
                Ok(None)
            }
        }
    }

    /// Store a new key/value pair
    ///
    /// Fails with `AlreadyExists` if the key is already readable.
    pub fn create(&self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        let _write_guard = self.write_lock.lock();

        if self.exists(key) {
            return Err(FileDbError::AlreadyExists(key.to_string()));
        }
        self.create_locked(key, value)
    }

    /// Read the value stored under `key`
    ///
    /// A missing record and an undecodable one are both `NotFound`.
    pub fn read(&self, key: &str) -> Result<String> {
        check_key(key)?;
        self.read_unchecked(key)
    }

    /// Overwrite the value of an existing key
    pub fn update(&self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        let _write_guard = self.write_lock.lock();

        if !self.exists(key) {
            return Err(FileDbError::NotFound(key.to_string()));
        }
        self.update_locked(key, value)
    }

    /// Remove an existing key
    pub fn delete(&self, key: &str) -> Result<()> {
        check_key(key)?;
        let _write_guard = self.write_lock.lock();

        if !self.exists(key) {
            return Err(FileDbError::NotFound(key.to_string()));
        }

        self.backend.delete_record(COLLECTION, key)?;
        trace!(key, "record deleted");
        Ok(())
    }

    /// Create the key if it is absent, otherwise update it
    ///
    /// The existence check and the write run under one lock, so concurrent
    /// upserts on the same key are last-write-wins.
    pub fn upsert(&self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        let _write_guard = self.write_lock.lock();

        if self.exists(key) {
            self.update_locked(key, value)
        } else {
            self.create_locked(key, value)
        }
    }

    /// Alias of [`Engine::upsert`]
    pub fn create_if_non_existent_else_update(&self, key: &str, value: &str) -> Result<()> {
        self.upsert(key, value)
    }

    /// Get the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// A key exists iff reading it succeeds
    fn exists(&self, key: &str) -> bool {
        self.read_unchecked(key).is_ok()
    }

    fn read_unchecked(&self, key: &str) -> Result<String> {
        match self.backend.read_record(COLLECTION, key) {
            Ok(Some(record)) => Ok(record.value),
            Ok(None) | Err(FileDbError::Corruption(_)) => {
                Err(FileDbError::NotFound(key.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    /// Called with `write_lock` held
    fn create_locked(&self, key: &str, value: &str) -> Result<()> {
        self.backend
            .write_record(COLLECTION, key, &Record::new(value))?;
        trace!(key, "record created");
        Ok(())
    }

    /// Called with `write_lock` held
    fn update_locked(&self, key: &str, value: &str) -> Result<()> {
        self.backend
            .write_record(COLLECTION, key, &Record::new(value))?;
        trace!(key, "record updated");
        Ok(())
    }
}

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(FileDbError::EmptyKey);
    }
    Ok(())
}
