/// Asset parameter types
mod asset;
/// The decode error taxonomy
mod error;
/// Network selection and built-in endpoints
mod network;
/// The final decode result
mod result;

pub use asset::*;
pub use error::*;
pub use network::*;
pub use result::*;
