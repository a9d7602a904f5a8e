/// Image reference extraction from metadata
pub(crate) mod image;
/// IPFS gateway utilities used by the `resolve` subcommand
pub(crate) mod ipfs;
