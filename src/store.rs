//! Store Initializer
//!
//! Resolves the storage directory, creates it if needed, and opens an
//! engine over it. Meant to be called once at startup; the returned engine
//! is then handed to whatever needs it (usually as `Arc<Engine>`).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::config::{Config, DEFAULT_DIR_NAME};
use crate::engine::Engine;
use crate::error::Result;

/// `file-db` inside the current working directory
pub fn default_data_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(DEFAULT_DIR_NAME))
}

/// Open a store in `dir`, or in [`default_data_dir`] when `dir` is `None`
///
/// The directory and any missing parents are created.
pub fn try_initialize(dir: Option<&Path>) -> Result<Engine> {
    let data_dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => default_data_dir()?,
    };

    try_initialize_with(Config::builder().data_dir(data_dir).build())
}

/// Like [`try_initialize`] with a full config
pub fn try_initialize_with(config: Config) -> Result<Engine> {
    if !config.data_dir.exists() {
        fs::create_dir_all(&config.data_dir)?;
        info!(data_dir = %config.data_dir.display(), "created storage directory");
    }

    let engine = Engine::open(config)?;
    info!(data_dir = %engine.data_dir().display(), "store initialized");

    Ok(engine)
}

/// Open a store, terminating the process if that fails
///
/// Nothing can run without storage, so there is no error to return. Call
/// once, before any other operation.
pub fn initialize(dir: Option<&Path>) -> Engine {
    match try_initialize(dir) {
        Ok(engine) => engine,
        Err(e) => fatal(e),
    }
}

/// Like [`initialize`] with a full config
pub fn initialize_with(config: Config) -> Engine {
    match try_initialize_with(config) {
        Ok(engine) => engine,
        Err(e) => fatal(e),
    }
}

fn fatal(e: crate::error::FileDbError) -> ! {
    error!("Failed to initialize store: {}", e);
    std::process::exit(1);
}
