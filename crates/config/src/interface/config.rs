#![allow(deprecated)]
use std::{env::home_dir, io::Write};

use crate::constants::{GREEN_ANSI_COLOR, PURPLE_ANSI_COLOR, RESET_ANSI_COLOR};
use eyre::{eyre, OptionExt, Result};
use serde::{Deserialize, Serialize};

/// The [`Configuration`] struct represents the configuration of the CLI.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct Configuration {
    /// The network to resolve assets on (`mainnet` or `testnet`).
    pub network: Option<String>,

    /// Override for the indexer base URL implied by the network.
    pub indexer_url: Option<String>,

    /// The base URL of the IPFS gateway to resolve CIDs through.
    pub ipfs_gateway_url: Option<String>,

    /// Fixed query-string suffix appended to gateway URLs, e.g.
    /// `?optimizer=image&width=1152&quality=70`.
    pub image_params: Option<String>,

    /// Bound on the metadata fetch, in seconds.
    pub fetch_timeout_secs: Option<u64>,
}

#[allow(deprecated)]
impl Configuration {
    /// Returns the current configuration.
    pub fn load() -> Result<Self> {
        let mut config_path = home_dir().ok_or_eyre("failed to get home directory")?;
        config_path.push(".arc19");
        config_path.push("config.json");

        let config = if config_path.exists() {
            let config = std::fs::read_to_string(config_path)?;
            serde_json::from_str::<Configuration>(&config)?
        } else {
            Configuration::default()
        };

        // now load from env, env should override config values
        let env_config = Self::load_from_env()?;
        let config = Configuration {
            network: env_config.network.or(config.network),
            indexer_url: env_config.indexer_url.or(config.indexer_url),
            ipfs_gateway_url: env_config.ipfs_gateway_url.or(config.ipfs_gateway_url),
            image_params: env_config.image_params.or(config.image_params),
            fetch_timeout_secs: env_config.fetch_timeout_secs.or(config.fetch_timeout_secs),
        };

        Ok(config)
    }

    /// Loads configuration from `ARC19_`-prefixed environment variables with
    /// envy.
    fn load_from_env() -> Result<Self> {
        envy::prefixed("ARC19_").from_env::<Configuration>().map_err(Into::into)
    }

    /// Saves the configuration to disk.
    fn save(&self) -> Result<()> {
        let mut config_path = home_dir().ok_or_eyre("failed to get home directory")?;
        config_path.push(".arc19");

        // build the directory if it doesn't exist
        if !config_path.exists() {
            std::fs::create_dir_all(&config_path)?;
        }

        config_path.push("config.json");
        let config = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, config)?;

        Ok(())
    }

    /// Set a value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "network" => self.network = Some(value.to_string()),
            "indexer_url" => self.indexer_url = Some(value.to_string()),
            "ipfs_gateway_url" => self.ipfs_gateway_url = Some(value.to_string()),
            "image_params" => self.image_params = Some(value.to_string()),
            "fetch_timeout_secs" => {
                self.fetch_timeout_secs = Some(
                    value.parse().map_err(|_| eyre!("fetch_timeout_secs must be an integer"))?,
                )
            }
            _ => return Err(eyre!("invalid key '{}'", key)),
        };

        self.save()?;

        Ok(())
    }

    /// Starts blocking interactive mode for configuration.
    pub fn from_interactive() -> Result<Self> {
        let mut config = Configuration::load().unwrap_or_default();
        let input = &mut String::new();

        println!(
            "{PURPLE_ANSI_COLOR}Welcome to the arc19 CLI configuration wizard!{RESET_ANSI_COLOR}\n\nI'll help walk you through configuring the CLI. If you wish to use an existing configuration value, just press enter.\nYou can exit this wizard at any time by pressing `Ctrl+C`.\n",
        );

        // network
        print!(
            "{GREEN_ANSI_COLOR}1.{RESET_ANSI_COLOR} Set the network, mainnet or testnet (default: {:?}): ",
            config.network
        );
        std::io::stdout().flush()?;
        std::io::stdin().read_line(input)?;
        if !input.trim().is_empty() {
            config.network = Some(input.trim().to_string());
            input.clear();
        }

        // indexer_url
        print!(
            "{GREEN_ANSI_COLOR}2.{RESET_ANSI_COLOR} Set a new indexer base URL (default: {:?}): ",
            config.indexer_url
        );
        std::io::stdout().flush()?;
        std::io::stdin().read_line(input)?;
        if !input.trim().is_empty() {
            config.indexer_url = Some(input.trim().to_string());
            input.clear();
        }

        // ipfs_gateway_url
        print!(
            "{GREEN_ANSI_COLOR}3.{RESET_ANSI_COLOR} Set a new IPFS gateway URL (default: {:?}): ",
            config.ipfs_gateway_url
        );
        std::io::stdout().flush()?;
        std::io::stdin().read_line(input)?;
        if !input.trim().is_empty() {
            config.ipfs_gateway_url = Some(input.trim().to_string());
            input.clear();
        }

        // image_params
        print!(
            "{GREEN_ANSI_COLOR}4.{RESET_ANSI_COLOR} Set a gateway image-optimization query suffix (default: {:?}): ",
            config.image_params
        );
        std::io::stdout().flush()?;
        std::io::stdin().read_line(input)?;
        if !input.trim().is_empty() {
            config.image_params = Some(input.trim().to_string());
            input.clear();
        }

        // fetch_timeout_secs
        print!(
            "{GREEN_ANSI_COLOR}5.{RESET_ANSI_COLOR} Set the metadata fetch timeout in seconds (default: {:?}): ",
            config.fetch_timeout_secs
        );
        std::io::stdout().flush()?;
        std::io::stdin().read_line(input)?;
        if !input.trim().is_empty() {
            config.fetch_timeout_secs = Some(
                input
                    .trim()
                    .parse()
                    .map_err(|_| eyre!("fetch_timeout_secs must be an integer"))?,
            );
            input.clear();
        }

        println!(
            "\n{GREEN_ANSI_COLOR}Configuration set!{RESET_ANSI_COLOR}\n{}",
            serde_json::to_string_pretty(&config)?
        );

        config.save()?;

        Ok(config)
    }
}
