//! Content addressing for analyzed strings.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 content address of a string.
///
/// Hashes the UTF-8 bytes of `value` as-is and returns the lowercase hex
/// digest. This is the primary key of every stored record, so the digest
/// algorithm must not change.
#[must_use]
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_hash() {
        let h1 = content_hash("racecar");
        let h2 = content_hash("racecar");
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64); // SHA-256 hex length
    }

    #[test]
    fn known_digests() {
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            content_hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn case_changes_the_hash() {
        assert_ne!(content_hash("Racecar"), content_hash("racecar"));
    }
}
