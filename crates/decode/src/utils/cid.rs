use arc19_common::DecodeError;
use cid::Cid;
use multibase::Base;
use multihash::Multihash;

use crate::{ParsedTemplate, MAX_DIGEST_SIZE};

/// Codec name required for version-0 CIDs.
const CIDV0_CODEC: &str = "dag-pb";

/// Hash-function name required for version-0 CIDs.
const CIDV0_HASH: &str = "sha2-256";

/// Multicodec content-type registry: codec name to code.
const CODEC_REGISTRY: &[(&str, u64)] = &[
    ("raw", 0x55),
    ("dag-pb", 0x70),
    ("dag-cbor", 0x71),
    ("libp2p-key", 0x72),
    ("git-raw", 0x78),
    ("dag-json", 0x0129),
];

/// Looks up a codec's multicodec code by name.
pub fn codec_by_name(name: &str) -> Option<u64> {
    CODEC_REGISTRY.iter().find(|(n, _)| *n == name).map(|&(_, code)| code)
}

/// Builds a CID from a parsed template and an encoded multihash, enforcing
/// the version-specific codec and hash constraints.
///
/// Version 0 requires `dag-pb` + `sha2-256` and fails with
/// [`DecodeError::InvalidCidV0`] on any deviation; there is no coercion.
/// Version 1 accepts any codec in the registry. Other versions fail with
/// [`DecodeError::UnsupportedCidVersion`].
pub fn build_cid(
    template: &ParsedTemplate,
    multihash: Multihash<MAX_DIGEST_SIZE>,
) -> Result<Cid, DecodeError> {
    match template.version {
        0 => {
            if template.codec != CIDV0_CODEC {
                return Err(DecodeError::InvalidCidV0(format!(
                    "codec must be `{CIDV0_CODEC}`, got `{}`",
                    template.codec
                )));
            }
            if template.hash_type != CIDV0_HASH {
                return Err(DecodeError::InvalidCidV0(format!(
                    "hash type must be `{CIDV0_HASH}`, got `{}`",
                    template.hash_type
                )));
            }
            Cid::new_v0(multihash).map_err(|e| DecodeError::InvalidCidV0(e.to_string()))
        }
        1 => {
            let codec = codec_by_name(&template.codec)
                .ok_or_else(|| DecodeError::UnsupportedCodec(template.codec.clone()))?;
            Ok(Cid::new_v1(codec, multihash))
        }
        version => Err(DecodeError::UnsupportedCidVersion(version)),
    }
}

/// Canonical string form of a CID.
///
/// Version 0 renders as bare base58btc with no multibase prefix. Version 1
/// is pinned to multibase base32-lowercase, so the textual form does not
/// depend on a library default.
pub fn cid_to_string(cid: &Cid) -> String {
    match cid.version() {
        cid::Version::V0 => cid.to_string(),
        cid::Version::V1 => {
            cid.to_string_of_base(Base::Base32Lower).unwrap_or_else(|_| cid.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap_digest;

    // public key of the ARC-19 specification's documented example reserve
    const RESERVE_PUBLIC_KEY: [u8; 32] = [
        0x21, 0x21, 0x8b, 0x18, 0xc1, 0x3c, 0x46, 0x06, 0x4c, 0x95, 0x1b, 0xea, 0xe9, 0x0e, 0xb7,
        0xd9, 0xd3, 0x04, 0x1b, 0xca, 0xf2, 0x2a, 0xd8, 0xee, 0x37, 0x3e, 0x1c, 0x7a, 0xfb, 0x99,
        0xb0, 0x08,
    ];

    fn template(version: u64, codec: &str, hash_type: &str) -> ParsedTemplate {
        ParsedTemplate {
            version,
            codec: codec.to_string(),
            hash_type: hash_type.to_string(),
        }
    }

    #[test]
    fn builds_documented_v0_cid() {
        let multihash = wrap_digest("sha2-256", &RESERVE_PUBLIC_KEY).unwrap();
        let cid = build_cid(&template(0, "dag-pb", "sha2-256"), multihash).unwrap();
        assert_eq!(cid_to_string(&cid), "QmQZyq4b89RfaUw8GESPd2re4hJqB8bnm4kVHNtyQrHnnK");
    }

    #[test]
    fn builds_v1_cid_in_base32_lowercase() {
        let multihash = wrap_digest("sha2-256", &RESERVE_PUBLIC_KEY).unwrap();

        let raw = build_cid(&template(1, "raw", "sha2-256"), multihash).unwrap();
        assert_eq!(
            cid_to_string(&raw),
            "bafkreibbegfrrqj4iydezfi35luq5n6z2mcbxsxsflmo4nz6dr5pxgnqba"
        );

        let dag_pb = build_cid(&template(1, "dag-pb", "sha2-256"), multihash).unwrap();
        assert_eq!(
            cid_to_string(&dag_pb),
            "bafybeibbegfrrqj4iydezfi35luq5n6z2mcbxsxsflmo4nz6dr5pxgnqba"
        );
    }

    #[test]
    fn v0_rejects_wrong_codec() {
        let multihash = wrap_digest("sha2-256", &RESERVE_PUBLIC_KEY).unwrap();
        assert!(matches!(
            build_cid(&template(0, "raw", "sha2-256"), multihash),
            Err(DecodeError::InvalidCidV0(_))
        ));
    }

    #[test]
    fn v0_rejects_wrong_hash_type() {
        let multihash = wrap_digest("sha3-256", &RESERVE_PUBLIC_KEY).unwrap();
        assert!(matches!(
            build_cid(&template(0, "dag-pb", "sha3-256"), multihash),
            Err(DecodeError::InvalidCidV0(_))
        ));
    }

    #[test]
    fn v1_rejects_unknown_codec() {
        let multihash = wrap_digest("sha2-256", &RESERVE_PUBLIC_KEY).unwrap();
        match build_cid(&template(1, "not-a-codec", "sha2-256"), multihash) {
            Err(DecodeError::UnsupportedCodec(name)) => assert_eq!(name, "not-a-codec"),
            other => panic!("expected UnsupportedCodec, got {other:?}"),
        }
    }

    #[test]
    fn other_versions_are_rejected() {
        let multihash = wrap_digest("sha2-256", &RESERVE_PUBLIC_KEY).unwrap();
        for version in [2, 7, u64::MAX] {
            assert!(matches!(
                build_cid(&template(version, "dag-pb", "sha2-256"), multihash),
                Err(DecodeError::UnsupportedCidVersion(v)) if v == version
            ));
        }
    }
}
