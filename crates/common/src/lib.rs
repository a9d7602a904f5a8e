//! Common types shared across the arc19 workspace crates.

mod interface;
mod utils;

pub use interface::*;
pub use utils::*;
