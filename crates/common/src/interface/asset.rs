use serde::Deserialize;

use crate::DecodeError;

/// The on-chain parameters ARC-19 needs from an asset: the templated URL and
/// the reserve address carrying the content digest.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AssetParams {
    /// The asset's immutable `url` field, expected to hold an ARC-19 template.
    pub url: String,
    /// The asset's reserve address, repurposed as an encoded content digest.
    pub reserve: String,
}

/// Response envelope for the indexer's `GET /v2/assets/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct AssetLookupResponse {
    pub(crate) asset: Asset,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Asset {
    pub(crate) index: u64,
    pub(crate) params: RawAssetParams,
}

/// Asset params as returned by the indexer. Both fields are optional on
/// chain; ARC-19 requires both.
#[derive(Debug, Deserialize)]
pub(crate) struct RawAssetParams {
    pub(crate) url: Option<String>,
    pub(crate) reserve: Option<String>,
}

impl RawAssetParams {
    pub(crate) fn into_params(self, asset_id: u64) -> Result<AssetParams, DecodeError> {
        let url =
            self.url.ok_or(DecodeError::MissingAssetParams { asset_id, field: "url" })?;
        let reserve =
            self.reserve.ok_or(DecodeError::MissingAssetParams { asset_id, field: "reserve" })?;
        Ok(AssetParams { url, reserve })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOKUP_FIXTURE: &str = r#"{
        "asset": {
            "index": 812520710,
            "params": {
                "creator": "ARCXWKFPF6VP4TY3LG7SXBZVCCHFDWHVNSQEIHRKVHGBIHRQQWIM7MZNPI",
                "decimals": 0,
                "name": "Zip",
                "reserve": "EEQYWGGBHRDAMTEVDPVOSDVX3HJQIG6K6IVNR3RXHYOHV64ZWAEISS4CTI",
                "total": 1,
                "url": "template-ipfs://{ipfscid:0:dag-pb:reserve:sha2-256}"
            }
        }
    }"#;

    #[test]
    fn deserializes_indexer_response() {
        let response: AssetLookupResponse = serde_json::from_str(LOOKUP_FIXTURE).unwrap();
        assert_eq!(response.asset.index, 812520710);

        let params = response.asset.params.into_params(812520710).unwrap();
        assert_eq!(params.url, "template-ipfs://{ipfscid:0:dag-pb:reserve:sha2-256}");
        assert_eq!(
            params.reserve,
            "EEQYWGGBHRDAMTEVDPVOSDVX3HJQIG6K6IVNR3RXHYOHV64ZWAEISS4CTI"
        );
    }

    #[test]
    fn missing_url_is_fatal() {
        let raw = RawAssetParams { url: None, reserve: Some("RESERVE".to_string()) };
        match raw.into_params(42) {
            Err(DecodeError::MissingAssetParams { asset_id: 42, field: "url" }) => {}
            other => panic!("expected MissingAssetParams for url, got {other:?}"),
        }
    }

    #[test]
    fn missing_reserve_is_fatal() {
        let raw = RawAssetParams { url: Some("template-ipfs://...".to_string()), reserve: None };
        match raw.into_params(42) {
            Err(DecodeError::MissingAssetParams { asset_id: 42, field: "reserve" }) => {}
            other => panic!("expected MissingAssetParams for reserve, got {other:?}"),
        }
    }
}
