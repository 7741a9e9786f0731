use thiserror::Error;
use weft_addon_kit::futures::future::BoxFuture;
use weft_addon_kit::reqwest::{Client, Method};
use serde_json::Value as JsonValue;

use crate::requests::{OperationRequest, RequestBody};

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("{0}")]
    Message(String),
    #[error("error status code {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Executes fully-built operation requests. The item processor depends only
/// on this seam, which keeps transport policy (timeouts, retries) with the
/// host and lets tests substitute a scripted runner.
pub trait OperationRunner: Send + Sync {
    fn run<'a>(&'a self, request: OperationRequest) -> BoxFuture<'a, Result<JsonValue, RpcError>>;
}

pub struct TronRpc {
    pub client: Client,
}

impl TronRpc {
    pub fn new() -> Self {
        Self { client: Client::builder().build().unwrap() }
    }

    pub async fn execute(&self, request: OperationRequest) -> Result<JsonValue, RpcError> {
        let OperationRequest { method, url, headers, query, body } = request;

        let mut builder = match method {
            Method::GET => self.client.get(&url),
            Method::POST => self.client.post(&url),
            other => self.client.request(other, &url),
        };
        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }
        if !query.is_empty() {
            let pairs: Vec<(&String, &String)> = query.iter().collect();
            builder = builder.query(&pairs);
        }
        builder = match body {
            Some(RequestBody::Json(payload)) => builder.json(&payload),
            Some(RequestBody::Raw(payload)) => builder.body(payload),
            None => builder,
        };

        let res = builder.send().await.map_err(|e| RpcError::Message(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(RpcError::Status { status: status.as_u16(), body });
        }

        // Both body families come back as JSON text on the wire; parsing here
        // keeps the pre-serialized family's string responses from leaking to
        // callers (one interface, per the upstream surface's split).
        let text = res.text().await.map_err(|e| RpcError::Message(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| RpcError::MalformedResponse(e.to_string()))
    }
}

impl Default for TronRpc {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationRunner for TronRpc {
    fn run<'a>(&'a self, request: OperationRequest) -> BoxFuture<'a, Result<JsonValue, RpcError>> {
        Box::pin(self.execute(request))
    }
}
