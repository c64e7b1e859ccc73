//! SHA-256 digests over canonical JSON. Hex digests are lowercase.

use serde::Serialize;

use crate::canonical_json::to_canonical_bytes;
use crate::IoResult;

/// Lowercase hex SHA-256 of raw bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    hex::encode(Sha256::digest(bytes))
}

/// SHA-256 of the canonical JSON form of `value`.
pub fn sha256_canonical<T: Serialize>(value: &T) -> IoResult<String> {
    Ok(sha256_hex(&to_canonical_bytes(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_digest() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn key_order_does_not_change_digest() {
        let a = sha256_canonical(&json!({"mode": "fee", "ratio": 50.0})).unwrap();
        let b = sha256_canonical(&json!({"ratio": 50.0, "mode": "fee"})).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
    }
}
