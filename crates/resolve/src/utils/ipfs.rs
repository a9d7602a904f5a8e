use std::time::Duration;

use arc19_common::DecodeError;
use serde_json::Value;

/// Builds a gateway URL for a CID or CID-relative path, appending the
/// optional image-optimization query suffix.
pub(crate) fn gateway_url(base_gateway_url: &str, path: &str, image_params: Option<&str>) -> String {
    format!(
        "{}/{}{}",
        base_gateway_url.trim_end_matches('/'),
        path,
        image_params.unwrap_or_default()
    )
}

/// Fetches the metadata document behind a gateway URL with a bounded timeout.
///
/// Returns the parsed JSON and a degraded flag: a body that is not valid JSON
/// is wrapped as a fallback record with a warning marker instead of failing
/// outright, to tolerate non-conforming gateways. Transport errors, timeouts,
/// and non-success statuses fail with [`DecodeError::MetadataFetch`].
pub(crate) async fn fetch_metadata(
    url: &str,
    timeout: Duration,
) -> Result<(Value, bool), DecodeError> {
    let fail = |reason: String| DecodeError::MetadataFetch { url: url.to_string(), reason };

    let client =
        reqwest::Client::builder().timeout(timeout).build().map_err(|e| fail(e.to_string()))?;

    let response = client.get(url).send().await.map_err(|e| fail(e.to_string()))?;
    if !response.status().is_success() {
        return Err(fail(format!("gateway returned status {}", response.status())));
    }

    let body = response.text().await.map_err(|e| fail(e.to_string()))?;
    Ok(interpret_body(&body))
}

/// Interprets a gateway response body as metadata. Valid JSON passes through;
/// anything else is wrapped as a fallback record with a warning marker.
pub(crate) fn interpret_body(body: &str) -> (Value, bool) {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => (value, false),
        Err(_) => (
            serde_json::json!({
                "content": body,
                "warning": "content from gateway is not JSON",
            }),
            true,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_gateway_url() {
        assert_eq!(
            gateway_url("https://ipfs.algonode.dev/ipfs", "QmFoo", None),
            "https://ipfs.algonode.dev/ipfs/QmFoo"
        );
        // trailing slashes on the base are trimmed
        assert_eq!(
            gateway_url("https://ipfs.algonode.dev/ipfs/", "QmFoo", None),
            "https://ipfs.algonode.dev/ipfs/QmFoo"
        );
    }

    #[test]
    fn appends_image_params() {
        assert_eq!(
            gateway_url("https://gw/ipfs", "QmFoo", Some("?optimizer=image&width=1152")),
            "https://gw/ipfs/QmFoo?optimizer=image&width=1152"
        );
    }

    #[test]
    fn json_body_passes_through() {
        let (value, degraded) = interpret_body(r#"{"name": "Zip", "image": "ipfs://abc"}"#);
        assert!(!degraded);
        assert_eq!(value["name"], "Zip");
    }

    #[test]
    fn non_json_body_is_wrapped_with_warning() {
        let (value, degraded) = interpret_body("<html>not json</html>");
        assert!(degraded);
        assert_eq!(value["content"], "<html>not json</html>");
        assert!(value["warning"].as_str().unwrap().contains("not JSON"));
    }
}
