use tracing::debug;

use crate::{AssetLookupResponse, AssetParams, DecodeError};

/// Algorand indexer API client
#[derive(Clone, Debug)]
pub struct IndexerClient {
    /// Client that executes HTTP requests
    client: reqwest::Client,
    /// The base URL of the indexer API
    base_url: String,
}

impl IndexerClient {
    /// Creates a new indexer client for the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Looks up an asset by ID and extracts the parameters ARC-19 requires.
    ///
    /// Fails with [`DecodeError::AssetLookup`] on transport or HTTP errors,
    /// and with [`DecodeError::MissingAssetParams`] if the asset lacks a
    /// `url` or `reserve` field.
    pub async fn lookup_asset(&self, asset_id: u64) -> Result<AssetParams, DecodeError> {
        let url = format!("{}/v2/assets/{}", self.base_url, asset_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DecodeError::AssetLookup { asset_id, reason: e.to_string() })?;

        if !response.status().is_success() {
            return Err(DecodeError::AssetLookup {
                asset_id,
                reason: format!("indexer returned status {}", response.status()),
            });
        }

        let lookup = response
            .json::<AssetLookupResponse>()
            .await
            .map_err(|e| DecodeError::AssetLookup { asset_id, reason: e.to_string() })?;
        debug!("indexer returned asset {}", lookup.asset.index);

        lookup.asset.params.into_params(asset_id)
    }
}
