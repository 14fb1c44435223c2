//! Record Module
//!
//! The unit of persistence: one key's value, stored as one file.
//!
//! ## Responsibilities
//! - Define the persisted `Record` shape
//! - Encode records with a checksummed header
//! - Reject truncated or garbled files on decode
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Header (14 bytes)                                            │
//! │ ┌───────────┬─────────────┬───────────┬───────────────────┐  │
//! │ │ Magic (4) │ Version (2) │ CRC32 (4) │ Payload Len (4)   │  │
//! │ └───────────┴─────────────┴───────────┴───────────────────┘  │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Payload (bincode-encoded Record)                             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All integers are little-endian. The CRC covers the payload only.

mod codec;

use serde::{Deserialize, Serialize};

pub use codec::{decode, encode};

// =============================================================================
// Shared Constants
// =============================================================================

/// Magic bytes identifying a FileDB record file
pub const MAGIC: &[u8; 4] = b"FDBR";

/// Current record format version
pub const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + CRC (4) + Len (4) = 14 bytes
pub const HEADER_SIZE: usize = 14;

/// A single persisted value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The stored string value (may be empty)
    pub value: String,
}

impl Record {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
