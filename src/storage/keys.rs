//! Key ↔ file name mapping
//!
//! Keys are percent-encoded byte by byte: `[A-Za-z0-9_-]` pass through,
//! everything else (including `.`, `/` and `%`) becomes `%XX` with uppercase
//! hex. The encoding is canonical, so distinct keys always produce distinct
//! names and no encoded key can contain a path separator or a dot.

/// Extension of live record files
pub const RECORD_EXTENSION: &str = "rec";

/// Extension of in-flight temp files
pub const TEMP_EXTENSION: &str = "tmp";

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Encode a key into a file-name-safe string
pub fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for &byte in key.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX[(byte >> 4) as usize] as char);
            out.push(HEX[(byte & 0x0F) as usize] as char);
        }
    }
    out
}

/// Decode a string produced by [`encode_key`]
///
/// Returns `None` for anything `encode_key` could not have produced.
pub fn decode_key(encoded: &str) -> Option<String> {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = hex_value(*bytes.get(i + 1)?)?;
                let lo = hex_value(*bytes.get(i + 2)?)?;
                let byte = (hi << 4) | lo;
                // Non-canonical escape of a pass-through byte
                if is_unreserved(byte) {
                    return None;
                }
                out.push(byte);
                i += 3;
            }
            byte if is_unreserved(byte) => {
                out.push(byte);
                i += 1;
            }
            _ => return None,
        }
    }

    String::from_utf8(out).ok()
}

/// File name of the record stored under `key`
///
/// "user/42" → "user%2F42.rec"
pub fn record_file_name(key: &str) -> String {
    format!("{}.{}", encode_key(key), RECORD_EXTENSION)
}

/// Recover the key from a record file name
///
/// "user%2F42.rec" → Some("user/42")
pub fn key_from_file_name(name: &str) -> Option<String> {
    let encoded = name.strip_suffix(RECORD_EXTENSION)?.strip_suffix('.')?;
    if encoded.is_empty() {
        return None;
    }
    decode_key(encoded)
}

/// File name for an in-flight write
///
/// Independent of the key so it never outgrows the record file name it
/// replaces. Unique per process and sequence number; the leading dot keeps
/// it apart from record files.
///
/// seq 7 in pid 4242 → ".tmp.4242.7"
pub fn temp_file_name(seq: u64) -> String {
    format!(".{}.{}.{}", TEMP_EXTENSION, std::process::id(), seq)
}

/// Whether `name` looks like a file produced by [`temp_file_name`]
pub fn is_temp_file_name(name: &str) -> bool {
    name.starts_with(&format!(".{}.", TEMP_EXTENSION))
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
