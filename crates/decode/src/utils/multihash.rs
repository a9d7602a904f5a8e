use arc19_common::DecodeError;
use multihash::Multihash;

/// Maximum digest size the wrapped multihash can carry, in bytes. Matches the
/// default multihash code table.
pub const MAX_DIGEST_SIZE: usize = 64;

/// Multihash registry: hash-function name to (multicodec code, digest length).
///
/// The encoder never computes a hash itself. ARC-19 treats the reserve
/// address bytes as an already-computed digest, so only the code and length
/// prefix are added here.
const HASH_REGISTRY: &[(&str, u64, usize)] = &[
    ("sha1", 0x11, 20),
    ("sha2-256", 0x12, 32),
    ("sha2-512", 0x13, 64),
    ("sha3-512", 0x14, 64),
    ("sha3-384", 0x15, 48),
    ("sha3-256", 0x16, 32),
    ("sha3-224", 0x17, 28),
    ("keccak-256", 0x1b, 32),
    ("blake3", 0x1e, 32),
    ("blake2b-256", 0xb220, 32),
];

/// Looks up a hash function's multicodec code and digest length by name.
pub fn hash_by_name(name: &str) -> Option<(u64, usize)> {
    HASH_REGISTRY.iter().find(|(n, _, _)| *n == name).map(|&(_, code, len)| (code, len))
}

/// Wraps an already-computed digest with the code and length prefix of the
/// named hash function.
///
/// Fails with [`DecodeError::UnsupportedHash`] for names outside the registry
/// and [`DecodeError::DigestLength`] when the digest length does not match
/// the hash function. The digest is never truncated or padded.
pub fn wrap_digest(hash_type: &str, digest: &[u8]) -> Result<Multihash<MAX_DIGEST_SIZE>, DecodeError> {
    let (code, expected) = hash_by_name(hash_type)
        .ok_or_else(|| DecodeError::UnsupportedHash(hash_type.to_string()))?;

    if digest.len() != expected {
        return Err(DecodeError::DigestLength {
            hash_type: hash_type.to_string(),
            expected,
            actual: digest.len(),
        });
    }

    // every registry digest length fits MAX_DIGEST_SIZE, so wrap cannot fail
    // on length; map the residual error instead of unwrapping anyway
    Multihash::wrap(code, digest).map_err(|_| DecodeError::DigestLength {
        hash_type: hash_type.to_string(),
        expected,
        actual: digest.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_sha2_256_digest() {
        let digest = [0xabu8; 32];
        let multihash = wrap_digest("sha2-256", &digest).unwrap();
        assert_eq!(multihash.code(), 0x12);
        assert_eq!(multihash.size(), 32);
        assert_eq!(multihash.digest(), &digest[..]);
    }

    #[test]
    fn digest_round_trips_for_every_registry_entry() {
        for &(name, code, len) in HASH_REGISTRY {
            let digest = vec![0x5au8; len];
            let multihash = wrap_digest(name, &digest).unwrap();
            assert_eq!(multihash.code(), code, "code mismatch for {name}");
            assert_eq!(multihash.size() as usize, len, "length mismatch for {name}");
            assert_eq!(multihash.digest(), &digest[..], "digest mismatch for {name}");
        }
    }

    #[test]
    fn encodes_varint_prefix() {
        // blake2b-256 has a multi-byte code (0xb220), exercising the varint
        let multihash = wrap_digest("blake2b-256", &[0u8; 32]).unwrap();
        let bytes = multihash.to_bytes();
        // varint(0xb220) = [0xa0, 0xe4, 0x02], then length 32
        assert_eq!(&bytes[..4], &[0xa0, 0xe4, 0x02, 0x20]);
    }

    #[test]
    fn unknown_hash_name_is_rejected() {
        match wrap_digest("md5", &[0u8; 16]) {
            Err(DecodeError::UnsupportedHash(name)) => assert_eq!(name, "md5"),
            other => panic!("expected UnsupportedHash, got {other:?}"),
        }
    }

    #[test]
    fn digest_length_mismatch_is_fatal() {
        // a 32-byte reserve key can never stand in for a sha2-512 digest
        match wrap_digest("sha2-512", &[0u8; 32]) {
            Err(DecodeError::DigestLength { expected: 64, actual: 32, .. }) => {}
            other => panic!("expected DigestLength, got {other:?}"),
        }
    }
}
