//! Tests for the record codec
//!
//! These tests verify:
//! - Header layout (magic, version, checksum, length)
//! - Decoding what was encoded
//! - Rejection of truncated, flipped, or foreign bytes

use filedb::record::{decode, encode, Record, HEADER_SIZE, MAGIC, VERSION};
use filedb::FileDbError;

// =============================================================================
// Encode Tests
// =============================================================================

#[test]
fn test_encode_header_layout() {
    let bytes = encode(&Record::new("hello")).unwrap();

    assert_eq!(&bytes[0..4], MAGIC);
    assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), VERSION);

    let crc = u32::from_le_bytes(bytes[6..10].try_into().unwrap());
    let len = u32::from_le_bytes(bytes[10..14].try_into().unwrap()) as usize;

    assert_eq!(len, bytes.len() - HEADER_SIZE);
    assert_eq!(crc, crc32fast::hash(&bytes[HEADER_SIZE..]));
}

#[test]
fn test_encode_decode_values() {
    let big = "z".repeat(64 * 1024);
    for value in ["", "v", "line1\nline2", "ünïcødé ✓", big.as_str()] {
        let record = Record::new(value);
        let decoded = decode(&encode(&record).unwrap()).unwrap();
        assert_eq!(decoded, record);
    }
}

// =============================================================================
// Decode Failure Tests
// =============================================================================

#[test]
fn test_decode_empty_input() {
    let result = decode(&[]);

    assert!(matches!(result, Err(FileDbError::Corruption(_))));
}

#[test]
fn test_decode_truncated_header() {
    let bytes = encode(&Record::new("value")).unwrap();

    let result = decode(&bytes[..HEADER_SIZE - 1]);

    assert!(matches!(result, Err(FileDbError::Corruption(_))));
}

#[test]
fn test_decode_truncated_payload() {
    let bytes = encode(&Record::new("value")).unwrap();

    for cut in HEADER_SIZE..bytes.len() {
        let result = decode(&bytes[..cut]);
        assert!(
            matches!(result, Err(FileDbError::Corruption(_))),
            "decode accepted a file truncated to {} bytes",
            cut
        );
    }
}

#[test]
fn test_decode_trailing_bytes() {
    let mut bytes = encode(&Record::new("value")).unwrap();
    bytes.push(0);

    assert!(matches!(decode(&bytes), Err(FileDbError::Corruption(_))));
}

#[test]
fn test_decode_flipped_payload_byte() {
    let mut bytes = encode(&Record::new("some value")).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;

    let result = decode(&bytes);

    match result {
        Err(FileDbError::Corruption(msg)) => assert!(msg.contains("CRC")),
        other => panic!("expected CRC corruption, got {:?}", other),
    }
}

#[test]
fn test_decode_wrong_magic() {
    let mut bytes = encode(&Record::new("value")).unwrap();
    bytes[0..4].copy_from_slice(b"ATKV");

    assert!(matches!(decode(&bytes), Err(FileDbError::Corruption(_))));
}

#[test]
fn test_decode_unsupported_version() {
    let mut bytes = encode(&Record::new("value")).unwrap();
    bytes[4..6].copy_from_slice(&(VERSION + 1).to_le_bytes());

    match decode(&bytes) {
        Err(FileDbError::Corruption(msg)) => assert!(msg.contains("version")),
        other => panic!("expected version error, got {:?}", other),
    }
}

#[test]
fn test_decode_valid_crc_bad_payload() {
    // Checksum matches, but the payload isn't a bincode Record
    let payload = [0xFFu8; 3];
    let mut bytes = Vec::new();
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&VERSION.to_le_bytes());
    bytes.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&payload);

    assert!(matches!(decode(&bytes), Err(FileDbError::Corruption(_))));
}
