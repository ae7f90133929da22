/// Deterministic cryptographic hash over byte strings.
///
/// Used for evidence-chain blocks and for content fingerprinting.
pub trait ContentHasher: Send + Sync {
    /// Hash `bytes` and return the digest as lowercase hex.
    fn hash_hex(&self, bytes: &[u8]) -> String;
}

/// The default hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl ContentHasher for Blake3Hasher {
    fn hash_hex(&self, bytes: &[u8]) -> String {
        blake3::hash(bytes).to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake3_hash_is_deterministic() {
        let hasher = Blake3Hasher;
        assert_eq!(hasher.hash_hex(b"content"), hasher.hash_hex(b"content"));
        assert_ne!(hasher.hash_hex(b"content"), hasher.hash_hex(b"content!"));
    }
}
