/// Command line arguments for the `config` subcommand
mod args;
/// The persisted CLI configuration
mod config;

pub use args::*;
pub use config::*;
