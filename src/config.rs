//! Configuration for FileDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Conventional name of the storage directory when the caller doesn't pick one
pub const DEFAULT_DIR_NAME: &str = "file-db";

/// Main configuration for a FileDB instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all data files. Must exist before an engine is opened.
    /// Internal structure:
    ///   {data_dir}/
    ///     └── record/          (one file per record)
    pub data_dir: PathBuf,

    /// How hard each write pushes data to the device
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Recovery Configuration
    // -------------------------------------------------------------------------
    /// Remove temp files left behind by interrupted writes when opening
    pub cleanup_temp_files: bool,
}

/// Record write sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync the temp file before the rename and the directory after it (safest)
    EveryWrite,

    /// Rely on the OS to flush; rename is still atomic but may be lost on power failure
    OsBuffered,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DIR_NAME),
            sync_strategy: SyncStrategy::EveryWrite,
            cleanup_temp_files: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all storage)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the write sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Enable or disable temp file cleanup on open
    pub fn cleanup_temp_files(mut self, enabled: bool) -> Self {
        self.config.cleanup_temp_files = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
