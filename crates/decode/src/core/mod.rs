use arc19_common::DecodeError;
use cid::Cid;
use eyre::Result;
use tracing::{debug, info};

use crate::{build_cid, cid_to_string, decode_reserve_address, wrap_digest, DecodeArgs, ParsedTemplate};

/// A CID derived from an ARC-19 template and reserve address, together with
/// the template it came from.
#[derive(Debug, Clone)]
pub struct DerivedCid {
    /// The parsed template the CID was derived from.
    pub template: ParsedTemplate,
    /// The derived CID.
    pub cid: Cid,
}

impl DerivedCid {
    /// Canonical string form of the derived CID.
    pub fn to_cid_string(&self) -> String {
        cid_to_string(&self.cid)
    }
}

/// Derives a CID from a templated asset URL and reserve address.
///
/// This is the pure ARC-19 transformation: no network access, no logging.
/// The reserve address bytes are treated as an already-computed digest,
/// wrapped into a multihash, and combined with the template's version and
/// codec into a CID. Each stage's failure aborts the pipeline with the
/// corresponding [`DecodeError`] variant.
pub fn derive_cid(url: &str, reserve: &str) -> Result<DerivedCid, DecodeError> {
    let template = ParsedTemplate::parse(url)?;
    let public_key = decode_reserve_address(reserve)?;
    let multihash = wrap_digest(&template.hash_type, &public_key)?;
    let cid = build_cid(&template, multihash)?;

    Ok(DerivedCid { template, cid })
}

/// The `decode` subcommand. Derives a CID from a templated asset URL and
/// reserve address without touching the network, and prints the gateway URL
/// the metadata would resolve to.
pub fn decode(args: DecodeArgs) -> Result<()> {
    let derived = derive_cid(&args.url, &args.reserve)?;
    let cid = derived.to_cid_string();

    debug!(
        "parsed template: version {}, codec {}, hash type {}",
        derived.template.version, derived.template.codec, derived.template.hash_type
    );
    info!("cid: {}", cid);
    info!("metadata url: {}/{}", args.ipfs_gateway_url.trim_end_matches('/'), cid);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVE: &str = "EEQYWGGBHRDAMTEVDPVOSDVX3HJQIG6K6IVNR3RXHYOHV64ZWAEISS4CTI";

    #[test]
    fn derives_documented_cid_end_to_end() {
        let derived =
            derive_cid("template-ipfs://{ipfscid:0:dag-pb:reserve:sha2-256}", RESERVE).unwrap();
        assert_eq!(
            derived.to_cid_string(),
            "QmQZyq4b89RfaUw8GESPd2re4hJqB8bnm4kVHNtyQrHnnK"
        );
        assert_eq!(derived.template.version, 0);
    }

    #[test]
    fn derives_v1_cid_end_to_end() {
        let derived =
            derive_cid("template-ipfs://{ipfscid:1:raw:reserve:sha2-256}", RESERVE).unwrap();
        assert_eq!(
            derived.to_cid_string(),
            "bafkreibbegfrrqj4iydezfi35luq5n6z2mcbxsxsflmo4nz6dr5pxgnqba"
        );
    }

    #[test]
    fn template_errors_surface_before_address_decoding() {
        // the address is also invalid here; the template must fail first
        match derive_cid("not-a-template", "not-an-address") {
            Err(DecodeError::Format(url)) => assert_eq!(url, "not-a-template"),
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn address_errors_surface_before_hash_lookup() {
        // the hash type is unsupported too; the address must fail first
        match derive_cid("template-ipfs://{ipfscid:0:dag-pb:reserve:md5}", "bad") {
            Err(DecodeError::AddressDecode { .. }) => {}
            other => panic!("expected AddressDecode error, got {other:?}"),
        }
    }
}
