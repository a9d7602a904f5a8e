/// Reserve address decoding
mod address;
/// CID construction and the codec registry
mod cid;
/// Multihash encoding and the hash-function registry
mod multihash;

pub use self::address::*;
pub use self::cid::*;
pub use self::multihash::*;
