//! Temp File Recovery
//!
//! A crash between writing a temp file and renaming it leaves the temp file
//! behind. The record it was meant to replace is untouched, so recovery only
//! has to delete the leftovers.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

use super::keys;

/// Result of a recovery pass over one collection directory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecoveryResult {
    /// Number of leftover temp files deleted
    pub temp_files_removed: u64,

    /// Number of record files seen (not validated)
    pub records_found: u64,
}

/// Remove temp files from `dir`
///
/// Record files and unrelated files are left alone. A missing directory is
/// treated as empty.
pub fn recover_temp_files(dir: &Path) -> Result<RecoveryResult> {
    let mut result = RecoveryResult::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(result),
        Err(e) => return Err(e.into()),
    };

    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();

        if keys::is_temp_file_name(&name) {
            match fs::remove_file(entry.path()) {
                Ok(()) => {}
                // Raced with another cleanup
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            }
            debug!(file = %name, "removed stale temp file");
            result.temp_files_removed += 1;
        } else if keys::key_from_file_name(&name).is_some() {
            result.records_found += 1;
        }
    }

    Ok(result)
}
