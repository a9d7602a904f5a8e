//! ARC-19 CID derivation: template parsing, reserve address decoding,
//! multihash encoding, and CID construction. Pure except for the `decode`
//! subcommand entry point.

mod core;
mod interface;
mod utils;

pub use core::*;
pub use interface::*;
pub use utils::*;
