use serde_json::Value;

use crate::ipfs::gateway_url;

/// Pseudo-scheme used by metadata image references.
const IPFS_SCHEME: &str = "ipfs://";

/// Extracts a resolvable image URL from a metadata document.
///
/// Checks the `image` field, then `image_url`. `ipfs://` references are
/// resolved through the gateway (with image params, when set); `https://`
/// URLs pass through unchanged; anything else yields `None`, which is a
/// valid outcome rather than an error.
pub(crate) fn extract_image_url(
    metadata: &Value,
    base_gateway_url: &str,
    image_params: Option<&str>,
) -> Option<String> {
    let image = ["image", "image_url"]
        .into_iter()
        .find_map(|field| metadata.get(field).and_then(Value::as_str))?;

    if let Some(path) = image.strip_prefix(IPFS_SCHEME) {
        Some(gateway_url(base_gateway_url, path, image_params))
    } else if image.starts_with("https://") {
        Some(image.to_string())
    } else {
        None
    }
}
