//! HTTP transport used to deliver request bodies.
//!
//! The dispatcher only needs "POST these JSON bytes to this URL and give me
//! the response body". That seam is the [`Transport`] trait; the default
//! implementation wraps a `reqwest` client whose timeout and user agent
//! come from [`ClientConfig`](crate::ClientConfig).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::WebhookResult;

/// Delivers one JSON request and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `body` to `url` with `Content-Type: application/json`.
    async fn post_json(&self, url: &str, body: Vec<u8>) -> WebhookResult<Vec<u8>>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a transport with the given request timeout and user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> WebhookResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> WebhookResult<Vec<u8>> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        // The robot API reports failures in the body; decode it either way.
        if !status.is_success() {
            warn!(status = %status, "Webhook returned non-success HTTP status");
        }

        let bytes = response.bytes().await?;
        debug!(status = %status, len = bytes.len(), "Webhook response received");

        Ok(bytes.to_vec())
    }
}
