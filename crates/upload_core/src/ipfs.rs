//! Network-aware transform from content-addressed URIs to fetchable URLs.

use url::Url;

#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub network: String,
    pub ipfs_gateway: Url,
}

impl NetworkConfig {
    pub fn new(network: impl Into<String>, ipfs_gateway: Url) -> Self {
        Self {
            network: network.into(),
            ipfs_gateway,
        }
    }
}

/// Map `ipfs://<cid>` to a URL fetchable through the configured gateway.
/// Anything else (http(s), data URLs) passes through unchanged.
pub fn uri_to_gateway_url(config: &NetworkConfig, uri: &str) -> String {
    match uri.strip_prefix("ipfs://") {
        Some(cid) => {
            let base = config.ipfs_gateway.as_str().trim_end_matches('/');
            format!("{base}/ipfs/{cid}")
        }
        None => uri.to_string(),
    }
}
