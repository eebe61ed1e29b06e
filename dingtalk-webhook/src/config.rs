//! Client configuration and its construction-time validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{WebhookError, WebhookResult};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Prefix every robot signing secret carries.
pub const SECRET_PREFIX: &str = "SEC";

/// Settings for a [`Client`](crate::Client).
///
/// Deserializes from partial input; missing fields take their defaults.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Full webhook URL including `access_token`.
    pub webhook_address: String,
    /// Signing secret. `None` or empty disables signing.
    pub secret: Option<String>,
    /// Transport request timeout.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            webhook_address: String::new(),
            secret: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Config for `webhook_address` with an optional secret and defaults
    /// for everything else.
    pub fn new(webhook_address: impl Into<String>, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        Self {
            webhook_address: webhook_address.into(),
            secret: (!secret.is_empty()).then_some(secret),
            ..Default::default()
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("webhook_address", &self.webhook_address)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// `dingtalk-webhook/<version>`.
#[must_use]
pub fn default_user_agent() -> String {
    format!("dingtalk-webhook/{}", env!("CARGO_PKG_VERSION"))
}

/// Rejects endpoints that are not plain or TLS HTTP.
pub fn validate_webhook_address(address: &str) -> WebhookResult<()> {
    if address.starts_with("http://") || address.starts_with("https://") {
        Ok(())
    } else {
        Err(WebhookError::InvalidWebhookAddress)
    }
}

/// Normalizes a secret: empty means signing is off, anything else must
/// carry the `SEC` prefix.
pub fn validate_secret(secret: Option<String>) -> WebhookResult<Option<String>> {
    match secret {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) if s.starts_with(SECRET_PREFIX) => Ok(Some(s)),
        Some(_) => Err(WebhookError::InvalidWebhookSecret),
    }
}
