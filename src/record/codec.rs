//! Record codec
//!
//! Encoding and decoding of record files.

use crate::error::{FileDbError, Result};

use super::{Record, HEADER_SIZE, MAGIC, VERSION};

/// Encode a record into its on-disk bytes
///
/// Format: magic (4) + version (2) + crc (4) + payload_len (4) + payload
pub fn encode(record: &Record) -> Result<Vec<u8>> {
    let payload =
        bincode::serialize(record).map_err(|e| FileDbError::Serialization(e.to_string()))?;

    let payload_len = u32::try_from(payload.len()).map_err(|_| {
        FileDbError::Serialization(format!("Record too large: {} bytes", payload.len()))
    })?;
    let crc = crc32fast::hash(&payload);

    let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&VERSION.to_le_bytes());
    bytes.extend_from_slice(&crc.to_le_bytes());
    bytes.extend_from_slice(&payload_len.to_le_bytes());
    bytes.extend_from_slice(&payload);

    Ok(bytes)
}

/// Decode a record from the full contents of a record file
///
/// Any structural problem is reported as `Corruption`.
pub fn decode(bytes: &[u8]) -> Result<Record> {
    if bytes.len() < HEADER_SIZE {
        return Err(FileDbError::Corruption(format!(
            "Incomplete header: expected {} bytes, got {}",
            HEADER_SIZE,
            bytes.len()
        )));
    }

    if &bytes[0..4] != MAGIC {
        return Err(FileDbError::Corruption(format!(
            "Invalid record magic: expected FDBR, got {:?}",
            &bytes[0..4]
        )));
    }

    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != VERSION {
        return Err(FileDbError::Corruption(format!(
            "Unsupported record version: {}",
            version
        )));
    }

    let stored_crc = read_u32(bytes, 6);
    let payload_len = read_u32(bytes, 10) as usize;

    let payload = &bytes[HEADER_SIZE..];
    if payload.len() != payload_len {
        return Err(FileDbError::Corruption(format!(
            "Payload length mismatch: header says {}, file has {}",
            payload_len,
            payload.len()
        )));
    }

    let actual_crc = crc32fast::hash(payload);
    if actual_crc != stored_crc {
        return Err(FileDbError::Corruption(format!(
            "CRC mismatch: expected {:#010x}, got {:#010x}",
            stored_crc, actual_crc
        )));
    }

    bincode::deserialize(payload).map_err(|e| FileDbError::Corruption(e.to_string()))
}

/// Read a little-endian u32 at `offset` (caller guarantees bounds)
fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
