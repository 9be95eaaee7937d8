//! Backend service client.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

use viewer_core::ports::ServicePort;
use viewer_types::{Result, ViewerError};

/// JSON-over-HTTP client for the configuration and data services
#[derive(Default)]
pub struct GlooServiceClient;

impl GlooServiceClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl ServicePort for GlooServiceClient {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ViewerError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ViewerError::Transport(format!(
                "HTTP {} {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ViewerError::Transport(format!("unreadable reply: {}", e)))
    }
}
