use thiserror::Error;

/// Errors produced while resolving an ARC-19 asset URL.
///
/// Every variant is terminal for the call that produced it: no stage retries
/// internally. Callers branch on the variant, not on the message.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The indexer request failed (transport error or non-success status).
    #[error("failed to look up asset {asset_id}: {reason}")]
    AssetLookup {
        /// The asset that was being looked up.
        asset_id: u64,
        /// Transport or HTTP failure description.
        reason: String,
    },

    /// The asset exists but does not carry the parameters ARC-19 requires.
    #[error("asset {asset_id} is missing required parameter `{field}`")]
    MissingAssetParams {
        /// The asset that was being looked up.
        asset_id: u64,
        /// Name of the absent parameter (`url` or `reserve`).
        field: &'static str,
    },

    /// The asset URL does not match the ARC-19 template grammar.
    #[error("url `{0}` does not match the ARC-19 template format")]
    Format(String),

    /// The reserve address is not a valid Algorand address.
    #[error("failed to decode reserve address `{address}`: {reason}")]
    AddressDecode {
        /// The address that failed to decode.
        address: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The template names a hash function missing from the multihash registry.
    #[error("unsupported hash type `{0}`")]
    UnsupportedHash(String),

    /// The decoded reserve bytes do not match the digest length of the named
    /// hash function. Never truncated or padded.
    #[error("digest length mismatch for `{hash_type}`: expected {expected} bytes, got {actual}")]
    DigestLength {
        /// The hash function named by the template.
        hash_type: String,
        /// Digest length the hash function produces.
        expected: usize,
        /// Length of the bytes actually supplied.
        actual: usize,
    },

    /// The template names a codec missing from the codec registry.
    #[error("unsupported codec `{0}`")]
    UnsupportedCodec(String),

    /// A version-0 CID was requested with a codec or hash type other than
    /// `dag-pb` + `sha2-256`.
    #[error("invalid CIDv0: {0}")]
    InvalidCidV0(String),

    /// The template requests a CID version other than 0 or 1.
    #[error("unsupported CID version {0}")]
    UnsupportedCidVersion(u64),

    /// The gateway fetch failed (transport error, timeout, or non-success
    /// status).
    #[error("failed to fetch metadata from `{url}`: {reason}")]
    MetadataFetch {
        /// The gateway URL that was requested.
        url: String,
        /// Transport or HTTP failure description.
        reason: String,
    },
}
