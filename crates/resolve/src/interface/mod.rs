/// Command line arguments for the `resolve` subcommand
mod args;

pub use args::*;
