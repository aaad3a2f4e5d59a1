//! BLAKE3 content digests for change detection

use blake3::{Hash, Hasher};

/// Calculate the BLAKE3 digest of in-memory content
pub fn hash_bytes(content: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(content);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_bytes_deterministic() {
        assert_eq!(hash_bytes(b"locale data"), hash_bytes(b"locale data"));
    }

    #[test]
    fn test_hash_bytes_differs_for_different_content() {
        assert_ne!(hash_bytes(b"fr"), hash_bytes(b"de"));
    }

    #[test]
    fn test_hash_empty_content() {
        assert_eq!(hash_bytes(b""), blake3::hash(b""));
    }
}
