use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The output of a successful resolve: where the metadata lives, the metadata
/// document itself, and the image reference if one could be resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeResult {
    /// The asset this result was resolved for.
    pub asset_id: u64,
    /// Canonical string form of the derived CID.
    pub cid: String,
    /// Gateway URL the metadata was fetched from.
    pub metadata_url: String,
    /// Resolved image URL, if the metadata carried a resolvable reference.
    /// Absence is a valid outcome, not an error.
    pub image_url: Option<String>,
    /// The metadata document returned by the gateway.
    pub metadata: Value,
    /// True when the gateway body was not valid JSON and was wrapped as a
    /// fallback record instead of failing outright.
    pub degraded: bool,
}
