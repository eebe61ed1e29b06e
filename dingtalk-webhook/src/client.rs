//! The robot client: validated configuration plus one method per message
//! type.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{validate_secret, validate_webhook_address, ClientConfig};
use crate::dispatch::dispatch;
use crate::error::{WebhookError, WebhookResult};
use crate::message::{ActionCardButton, ButtonOrientation, FeedCardLink, MessageDocument};
use crate::response::SendResult;
use crate::transport::{HttpTransport, Transport};

/// Client for one robot webhook.
///
/// Endpoint and secret are checked once, in the constructor, and never
/// change afterwards. The client holds no mutable state, so one instance
/// (or its clones) can serve any number of concurrent sends.
#[derive(Clone)]
pub struct Client {
    webhook_address: String,
    secret: Option<String>,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client with default transport settings.
    ///
    /// An empty `secret` disables signing.
    ///
    /// # Errors
    ///
    /// [`WebhookError::InvalidWebhookAddress`] if the address is not
    /// `http://` or `https://`, [`WebhookError::InvalidWebhookSecret`] if a
    /// non-empty secret lacks the `SEC` prefix.
    pub fn new(
        webhook_address: impl Into<String>,
        secret: impl Into<String>,
    ) -> WebhookResult<Self> {
        Self::from_config(ClientConfig::new(webhook_address, secret))
    }

    /// Creates a client from a full configuration.
    pub fn from_config(config: ClientConfig) -> WebhookResult<Self> {
        validate_webhook_address(&config.webhook_address)?;
        let secret = validate_secret(config.secret)?;
        if config.timeout_secs == 0 {
            return Err(WebhookError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        let transport = HttpTransport::new(
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )?;

        Ok(Self {
            webhook_address: config.webhook_address,
            secret,
            transport: Arc::new(transport),
        })
    }

    /// Creates a client that sends through a caller-provided transport.
    pub fn with_transport(
        webhook_address: impl Into<String>,
        secret: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> WebhookResult<Self> {
        let webhook_address = webhook_address.into();
        validate_webhook_address(&webhook_address)?;
        let secret = validate_secret(Some(secret.into()))?;

        Ok(Self {
            webhook_address,
            secret,
            transport,
        })
    }

    /// The configured webhook URL.
    #[must_use]
    pub fn webhook_address(&self) -> &str {
        &self.webhook_address
    }

    /// Returns true if requests carry `timestamp` and `sign` parameters.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        self.secret.is_some()
    }

    /// Sends a prebuilt document.
    pub async fn send(&self, document: &MessageDocument) -> WebhookResult<SendResult> {
        dispatch(
            self.transport.as_ref(),
            &self.webhook_address,
            self.secret.as_deref(),
            document,
        )
        .await
    }

    /// Sends a plain text message.
    pub async fn text(
        &self,
        content: impl Into<String>,
        at_mobiles: Vec<String>,
        is_at_all: bool,
    ) -> WebhookResult<SendResult> {
        self.send(&MessageDocument::text(content, at_mobiles, is_at_all))
            .await
    }

    /// Sends a markdown message.
    pub async fn markdown(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
        at_mobiles: Vec<String>,
        is_at_all: bool,
    ) -> WebhookResult<SendResult> {
        self.send(&MessageDocument::markdown(title, text, at_mobiles, is_at_all))
            .await
    }

    /// Sends a hyperlink card.
    pub async fn link(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
        message_url: impl Into<String>,
        pic_url: impl Into<String>,
    ) -> WebhookResult<SendResult> {
        self.send(&MessageDocument::link(title, text, message_url, pic_url))
            .await
    }

    /// Sends an action card with independently linked buttons.
    pub async fn action_card(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
        orientation: ButtonOrientation,
        buttons: &[ActionCardButton],
    ) -> WebhookResult<SendResult> {
        self.send(&MessageDocument::action_card(title, text, orientation, buttons))
            .await
    }

    /// Sends a feed card.
    pub async fn feed_card(&self, links: &[FeedCardLink]) -> WebhookResult<SendResult> {
        self.send(&MessageDocument::feed_card(links)).await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("webhook_address", &self.webhook_address)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}
