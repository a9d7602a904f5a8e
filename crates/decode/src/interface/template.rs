use std::{fmt, sync::LazyLock};

use arc19_common::DecodeError;
use regex::Regex;

/// The ARC-19 template grammar:
/// `template-ipfs://{ipfscid:<version>:<codec>:reserve:<hashtype>}` where
/// `<version>` is one or more digits and `<codec>` / `<hashtype>` are
/// lowercase alphanumeric-with-hyphens tokens.
static TEMPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^template-ipfs://\{ipfscid:(\d+):([a-z0-9-]+):reserve:([a-z0-9-]+)\}$")
        .expect("template grammar is a valid regex")
});

/// A parsed ARC-19 URL template: CID version, codec name, and hash-function
/// name. Immutable once constructed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParsedTemplate {
    /// CID version requested by the template.
    pub version: u64,
    /// Multicodec content-type name, verbatim from the template.
    pub codec: String,
    /// Multihash hash-function name, verbatim from the template.
    pub hash_type: String,
}

impl ParsedTemplate {
    /// Parses a templated asset URL against the ARC-19 grammar.
    ///
    /// Fails with [`DecodeError::Format`] if the URL does not match. No
    /// normalization is applied beyond what the grammar enforces.
    pub fn parse(url: &str) -> Result<Self, DecodeError> {
        let captures =
            TEMPLATE_RE.captures(url).ok_or_else(|| DecodeError::Format(url.to_string()))?;

        // all digits by the grammar, but may still overflow u64
        let version =
            captures[1].parse::<u64>().map_err(|_| DecodeError::Format(url.to_string()))?;

        Ok(Self { version, codec: captures[2].to_string(), hash_type: captures[3].to_string() })
    }
}

impl fmt::Display for ParsedTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "template-ipfs://{{ipfscid:{}:{}:reserve:{}}}",
            self.version, self.codec, self.hash_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_documented_template() {
        let url = "template-ipfs://{ipfscid:0:dag-pb:reserve:sha2-256}";
        let template = ParsedTemplate::parse(url).unwrap();
        assert_eq!(template.version, 0);
        assert_eq!(template.codec, "dag-pb");
        assert_eq!(template.hash_type, "sha2-256");
    }

    #[test]
    fn parses_multi_digit_version() {
        let template =
            ParsedTemplate::parse("template-ipfs://{ipfscid:12:raw:reserve:sha2-256}").unwrap();
        assert_eq!(template.version, 12);
    }

    #[test]
    fn display_round_trips() {
        for url in [
            "template-ipfs://{ipfscid:0:dag-pb:reserve:sha2-256}",
            "template-ipfs://{ipfscid:1:raw:reserve:sha2-256}",
            "template-ipfs://{ipfscid:1:dag-cbor:reserve:blake2b-256}",
        ] {
            assert_eq!(ParsedTemplate::parse(url).unwrap().to_string(), url);
        }
    }

    #[test]
    fn rejects_malformed_templates() {
        for url in [
            // missing the reserve segment
            "template-ipfs://{ipfscid:0:dag-pb:sha2-256}",
            // wrong scheme
            "ipfs://{ipfscid:0:dag-pb:reserve:sha2-256}",
            // uppercase codec
            "template-ipfs://{ipfscid:0:DAG-PB:reserve:sha2-256}",
            // missing braces
            "template-ipfs://ipfscid:0:dag-pb:reserve:sha2-256",
            // trailing garbage
            "template-ipfs://{ipfscid:0:dag-pb:reserve:sha2-256}x",
            // non-numeric version
            "template-ipfs://{ipfscid:x:dag-pb:reserve:sha2-256}",
            // empty
            "",
        ] {
            match ParsedTemplate::parse(url) {
                Err(DecodeError::Format(bad)) => assert_eq!(bad, url),
                other => panic!("expected Format error for {url:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn version_overflow_is_a_format_error() {
        let url = "template-ipfs://{ipfscid:99999999999999999999:raw:reserve:sha2-256}";
        assert!(matches!(ParsedTemplate::parse(url), Err(DecodeError::Format(_))));
    }
}
