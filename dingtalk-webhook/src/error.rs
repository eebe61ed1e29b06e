//! Error types for the webhook client.

use thiserror::Error;

/// Result type for webhook operations.
pub type WebhookResult<T> = Result<T, WebhookError>;

/// Errors that can occur while configuring a client or sending a message.
///
/// A response whose `errcode` is non-zero is not an error here; it comes
/// back as an ordinary [`SendResult`](crate::SendResult).
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Endpoint does not use the `http` or `https` scheme.
    #[error(r#"dingtalk webhook address must begin with "http://" or "https://""#)]
    InvalidWebhookAddress,

    /// Secret does not carry the provider's `SEC` prefix.
    #[error(r#"dingtalk webhook secret must begin with "SEC""#)]
    InvalidWebhookSecret,

    /// Other invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Message could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Transport failure (connect, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not a well-formed result envelope.
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl WebhookError {
    /// Returns true if the error was raised while constructing a client.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidWebhookAddress | Self::InvalidWebhookSecret | Self::Config(_)
        )
    }

    /// Returns true if the request never produced a response body.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}
