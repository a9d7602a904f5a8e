/// Command line arguments for the `decode` subcommand
mod args;
/// The ARC-19 template grammar
mod template;

pub use args::*;
pub use template::*;
