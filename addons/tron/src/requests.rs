use weft_addon_kit::indexmap::IndexMap;
use weft_addon_kit::reqwest::Method;
use serde_json::Value as JsonValue;

use crate::constants::{API_KEY_HEADER, CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON};
use crate::credentials::TronApiCredentials;

/// The two body families the upstream surface requires (see DESIGN.md):
/// most operations hand the transport a structured payload to serialize,
/// a minority serialize the payload themselves and ship the exact string.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Json(JsonValue),
    Raw(String),
}

/// A fully-formed outbound request, built once per item and consumed exactly
/// once by the transport. Pure data: no client handle, no I/O.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationRequest {
    pub method: Method,
    pub url: String,
    pub headers: IndexMap<String, String>,
    pub query: IndexMap<String, String>,
    pub body: Option<RequestBody>,
}

impl OperationRequest {
    pub fn get(url: impl Into<String>) -> Self {
        OperationRequest {
            method: Method::GET,
            url: url.into(),
            headers: IndexMap::new(),
            query: IndexMap::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        OperationRequest { method: Method::POST, ..OperationRequest::get(url) }
    }

    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.insert(key.to_string(), value.into());
        self
    }

    pub fn with_json_body(mut self, payload: JsonValue) -> Self {
        self.body = Some(RequestBody::Json(payload));
        self
    }

    pub fn with_raw_body(mut self, payload: String) -> Self {
        self.body = Some(RequestBody::Raw(payload));
        self
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Attaches the headers every upstream call carries: the API key header
    /// (always, even when the key is empty) and, for body-bearing requests,
    /// the JSON content type.
    pub fn authenticated(mut self, credentials: &TronApiCredentials) -> Self {
        self.headers.insert(API_KEY_HEADER.to_string(), credentials.api_key().to_string());
        if self.has_body() {
            self.headers.insert(CONTENT_TYPE_HEADER.to_string(), CONTENT_TYPE_JSON.to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credentials() -> TronApiCredentials {
        TronApiCredentials::new("https://api.trongrid.io", Some("k".to_string()))
    }

    #[test]
    fn authenticated_get_carries_only_the_api_key() {
        let request = OperationRequest::get("https://api.trongrid.io/v1/accounts/T1")
            .authenticated(&credentials());
        assert_eq!(request.headers.get(API_KEY_HEADER).map(String::as_str), Some("k"));
        assert!(!request.headers.contains_key(CONTENT_TYPE_HEADER));
    }

    #[test]
    fn body_bearing_requests_add_the_json_content_type() {
        let request = OperationRequest::post("https://api.trongrid.io/wallet/getaccount")
            .with_json_body(json!({ "address": "T1" }))
            .authenticated(&credentials());
        assert_eq!(
            request.headers.get(CONTENT_TYPE_HEADER).map(String::as_str),
            Some(CONTENT_TYPE_JSON)
        );
    }

    #[test]
    fn missing_api_key_still_sends_an_empty_header() {
        let credentials = TronApiCredentials::new("https://api.trongrid.io", None);
        let request = OperationRequest::get("https://api.trongrid.io/wallet/getnowblock")
            .authenticated(&credentials);
        assert_eq!(request.headers.get(API_KEY_HEADER).map(String::as_str), Some(""));
    }
}
