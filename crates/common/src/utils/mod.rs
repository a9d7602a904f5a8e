/// Algorand indexer client
pub mod indexer;
