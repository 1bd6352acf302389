use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::debug;

use crate::backend::ChatBackend;
use crate::config::ChatConfig;
use crate::errors::ChatError;
use crate::models::{ChatRequest, ChatResponse};

/// [`ChatBackend`] that POSTs JSON to the configured chat endpoint.
#[derive(Clone)]
pub struct HttpChatBackend {
    client: Client,
    endpoint: String,
}

impl HttpChatBackend {
    pub fn new(config: &ChatConfig) -> Result<Self, ChatError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.request_timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        let client = builder
            .build()
            .map_err(|e| ChatError::transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, endpoint: config.endpoint() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatBackend for HttpChatBackend {
    async fn chat(&self, message: &str) -> Result<Vec<String>, ChatError> {
        debug!("POST {} ({} chars)", self.endpoint, message.chars().count());

        let resp = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&ChatRequest::new(message))
            .send()
            .await
            .map_err(|e| {
                debug!("Chat request to {} failed: {e}", self.endpoint);
                ChatError::transport(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChatError::Status { status: status.as_u16() });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ChatError::transport(format!("Failed to read response body: {e}")))?;

        serde_json::from_slice::<ChatResponse>(&body)
            .map(|parsed| parsed.messages)
            .map_err(|e| ChatError::malformed(e.to_string()))
    }
}
