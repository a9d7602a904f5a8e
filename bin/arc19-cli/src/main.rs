//! arc19 CLI: decode ARC-19 templated asset URLs into IPFS CIDs and resolve
//! the metadata they point to.

pub(crate) mod args;

use arc19_config::Configuration;
use args::{Arguments, Subcommands};
use clap::Parser;
use eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // parse command line arguments
    let args = Arguments::parse();

    // init tracing
    let _ = args.logs.init_tracing();

    // load config
    let config = Configuration::load()?;

    match args.sub {
        Subcommands::Config(subargs) => arc19_config::config(subargs)?,
        Subcommands::Decode(mut subargs) => {
            if let Some(gateway_url) = config.ipfs_gateway_url {
                subargs.ipfs_gateway_url = gateway_url;
            }

            arc19_decode::decode(subargs)?
        }
        Subcommands::Resolve(mut subargs) => {
            if let Some(network) = config.network {
                subargs.network = network.parse().map_err(|e: String| eyre::eyre!(e))?;
            }
            if let Some(indexer_url) = config.indexer_url {
                subargs.indexer_url = Some(indexer_url);
            }
            if let Some(gateway_url) = config.ipfs_gateway_url {
                subargs.ipfs_gateway_url = gateway_url;
            }
            if let Some(image_params) = config.image_params {
                subargs.image_params = Some(image_params);
            }
            if let Some(timeout) = config.fetch_timeout_secs {
                subargs.timeout = timeout;
            }

            arc19_resolve::resolve(subargs).await?
        }
    };

    Ok(())
}
