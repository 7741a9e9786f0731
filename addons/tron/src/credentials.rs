use weft_addon_kit::types::diagnostics::Diagnostic;

use crate::constants::{
    CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON, MAINNET_API_URL, NILE_API_URL, SHASTA_API_URL,
};
use crate::requests::OperationRequest;

/// The networks the hosted credential form offers, plus a custom escape
/// hatch for self-hosted nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TronNetwork {
    Mainnet,
    Shasta,
    Nile,
    Custom(String),
}

impl TronNetwork {
    pub fn from_name(name: &str, custom_full_node: Option<&str>) -> Result<Self, Diagnostic> {
        match name {
            "mainnet" => Ok(TronNetwork::Mainnet),
            "shasta" => Ok(TronNetwork::Shasta),
            "nile" => Ok(TronNetwork::Nile),
            "custom" => match custom_full_node {
                Some(url) if !url.is_empty() => Ok(TronNetwork::Custom(url.to_string())),
                _ => Err(diagnosed_error!("custom network requires a full node URL")),
            },
            other => Err(diagnosed_error!("Unknown network: {}", other)),
        }
    }

    pub fn full_node_url(&self) -> &str {
        match self {
            TronNetwork::Mainnet => MAINNET_API_URL,
            TronNetwork::Shasta => SHASTA_API_URL,
            TronNetwork::Nile => NILE_API_URL,
            TronNetwork::Custom(url) => url,
        }
    }
}

/// Resolved once per batch, immutable for its duration. The API key is
/// optional upstream; an absent key is sent as an empty header value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TronApiCredentials {
    base_url: String,
    api_key: Option<String>,
}

impl TronApiCredentials {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url: String = base_url.into();
        TronApiCredentials { base_url: base_url.trim_end_matches('/').to_string(), api_key }
    }

    pub fn for_network(network: &TronNetwork, api_key: Option<String>) -> Self {
        TronApiCredentials::new(network.full_node_url(), api_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }

    /// The probe the credential form fires to validate a configuration:
    /// a bare current-block lookup against the node API.
    pub fn probe_request(&self) -> OperationRequest {
        let mut request =
            OperationRequest::post(format!("{}/wallet/getnowblock", self.base_url))
                .authenticated(self);
        request
            .headers
            .insert(CONTENT_TYPE_HEADER.to_string(), CONTENT_TYPE_JSON.to_string());
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("mainnet", "https://api.trongrid.io")]
    #[test_case("shasta", "https://api.shasta.trongrid.io")]
    #[test_case("nile", "https://nile.trongrid.io")]
    fn named_networks_resolve_to_their_full_node(name: &str, url: &str) {
        let network = TronNetwork::from_name(name, None).unwrap();
        assert_eq!(network.full_node_url(), url);
    }

    #[test]
    fn unknown_network_names_are_rejected() {
        let err = TronNetwork::from_name("ropsten", None).unwrap_err();
        assert_eq!(err.message, "Unknown network: ropsten");
    }

    #[test]
    fn custom_network_requires_a_url() {
        assert!(TronNetwork::from_name("custom", None).is_err());
        let network = TronNetwork::from_name("custom", Some("http://127.0.0.1:9090")).unwrap();
        assert_eq!(network.full_node_url(), "http://127.0.0.1:9090");
    }

    #[test]
    fn trailing_slashes_are_trimmed_from_the_base_url() {
        let credentials = TronApiCredentials::new("https://api.trongrid.io/", None);
        assert_eq!(credentials.base_url(), "https://api.trongrid.io");
    }

    #[test]
    fn probe_targets_the_current_block_endpoint() {
        let credentials =
            TronApiCredentials::for_network(&TronNetwork::Shasta, Some("k".to_string()));
        let probe = credentials.probe_request();
        assert_eq!(probe.url, "https://api.shasta.trongrid.io/wallet/getnowblock");
        assert_eq!(probe.headers.get(CONTENT_TYPE_HEADER).map(String::as_str), Some("application/json"));
    }
}
