use arc19_common::DEFAULT_IPFS_GATEWAY_URL;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(about = "Derive the IPFS CID encoded by an ARC-19 template URL and reserve address.")]
pub struct DecodeArgs {
    /// The templated asset URL, e.g.
    /// `template-ipfs://{ipfscid:0:dag-pb:reserve:sha2-256}`.
    pub url: String,

    /// The asset's reserve address.
    pub reserve: String,

    /// The base URL of the IPFS gateway used to build the metadata URL.
    #[clap(short = 'g', long, default_value = DEFAULT_IPFS_GATEWAY_URL)]
    pub ipfs_gateway_url: String,
}
