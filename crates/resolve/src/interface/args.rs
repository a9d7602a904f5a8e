use arc19_common::{Network, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_IPFS_GATEWAY_URL};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(about = "Resolve an ARC-19 asset to its IPFS metadata and image URL.")]
pub struct ResolveArgs {
    /// The ID of the asset to resolve.
    pub asset_id: u64,

    /// The network the asset lives on.
    #[clap(short, long, value_enum, default_value_t = Network::Mainnet)]
    pub network: Network,

    /// Override the indexer base URL implied by the network.
    #[clap(long, required = false)]
    pub indexer_url: Option<String>,

    /// The base URL of the IPFS gateway to resolve CIDs through.
    #[clap(short = 'g', long, default_value = DEFAULT_IPFS_GATEWAY_URL)]
    pub ipfs_gateway_url: String,

    /// Fixed query-string suffix appended to gateway URLs, e.g.
    /// `?optimizer=image&width=1152&quality=70`.
    #[clap(long, required = false)]
    pub image_params: Option<String>,

    /// Bound on the metadata fetch, in seconds.
    #[clap(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    pub timeout: u64,
}
