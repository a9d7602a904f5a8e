use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Indexer base URL for MainNet.
pub const MAINNET_INDEXER_URL: &str = "https://mainnet-idx.4160.nodely.dev";

/// Indexer base URL for TestNet.
pub const TESTNET_INDEXER_URL: &str = "https://testnet-idx.4160.nodely.dev";

/// Default IPFS gateway used to resolve CIDs.
pub const DEFAULT_IPFS_GATEWAY_URL: &str = "https://ipfs.algonode.dev/ipfs";

/// Default bound on the metadata fetch, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// The Algorand network an asset lives on. Each network implies a distinct
/// indexer base URL.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Algorand MainNet
    Mainnet,
    /// Algorand TestNet
    Testnet,
}

impl Network {
    /// Returns the indexer base URL for this network.
    pub fn indexer_url(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_INDEXER_URL,
            Network::Testnet => TESTNET_INDEXER_URL,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(format!("unknown network: {s}")),
        }
    }
}
