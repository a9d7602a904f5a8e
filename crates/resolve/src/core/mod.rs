use std::time::Duration;

use arc19_common::{indexer::IndexerClient, DecodeError, DecodeResult};
use arc19_decode::derive_cid;
use eyre::Result;
use tracing::{debug, info, warn};

use crate::{
    image::extract_image_url,
    ipfs::{fetch_metadata, gateway_url},
    ResolveArgs,
};

/// Resolves an ARC-19 asset to its metadata URL, metadata document, and image
/// URL.
///
/// Runs the full pipeline: indexer lookup, CID derivation, bounded gateway
/// fetch, image extraction. Silent by design: all observable output is in the
/// returned [`DecodeResult`] or the error, so callers decide how to present
/// each stage.
pub async fn resolve_asset(args: &ResolveArgs) -> Result<DecodeResult, DecodeError> {
    let indexer_url =
        args.indexer_url.clone().unwrap_or_else(|| args.network.indexer_url().to_string());

    let params = IndexerClient::new(&indexer_url).lookup_asset(args.asset_id).await?;
    let derived = derive_cid(&params.url, &params.reserve)?;
    let cid = derived.to_cid_string();

    let metadata_url = gateway_url(&args.ipfs_gateway_url, &cid, args.image_params.as_deref());
    let (metadata, degraded) =
        fetch_metadata(&metadata_url, Duration::from_secs(args.timeout)).await?;
    let image_url = extract_image_url(&metadata, &args.ipfs_gateway_url, args.image_params.as_deref());

    Ok(DecodeResult { asset_id: args.asset_id, cid, metadata_url, image_url, metadata, degraded })
}

/// The `resolve` subcommand. Looks up an asset on the configured network,
/// derives its CID, fetches the metadata from the IPFS gateway, and prints
/// the result.
pub async fn resolve(args: ResolveArgs) -> Result<()> {
    info!("resolving asset {} on {}", args.asset_id, args.network);
    let result = resolve_asset(&args).await?;

    debug!("derived cid: {}", result.cid);
    if result.degraded {
        warn!("gateway response was not JSON; metadata wrapped as plain content");
    }

    info!("metadata url: {}", result.metadata_url);
    info!("metadata: {}", serde_json::to_string_pretty(&result.metadata)?);
    match &result.image_url {
        Some(image_url) => info!("image url: {}", image_url),
        None => info!("no resolvable image reference in metadata"),
    }

    Ok(())
}
