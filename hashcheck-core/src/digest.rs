use crate::error::VerifyError;
use sha1::{Digest, Sha1};
use std::path::Path;

/// Length of a hex-encoded SHA-1 digest.
pub const HEX_LEN: usize = 40;

/// SHA-1 of `bytes` as lowercase hex.
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha1::digest(bytes))
}

/// Read the whole file and return its SHA-1 as lowercase hex.
/// The handle is dropped as soon as the bytes are in memory.
pub fn file_hash(path: &Path) -> Result<String, VerifyError> {
    let bytes = std::fs::read(path).map_err(|e| VerifyError::io(path, e))?;
    Ok(hash_bytes(&bytes))
}

/// Whether `s` has the shape of a lowercase hex SHA-1 digest.
pub fn is_hex_digest(s: &str) -> bool {
    s.len() == HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
