//! Client for DingTalk group robot webhooks.
//!
//! This crate handles:
//! - Building the five robot message types (text, markdown, link, action
//!   card, feed card) in the provider's wire format
//! - Signing requests with HMAC-SHA256 when the robot has a secret
//! - Posting messages and decoding the `{ errcode, errmsg }` response
//!
//! # Error model
//!
//! Invalid configuration is rejected when the [`Client`] is built, never at
//! send time. Serialization, transport, and decode failures surface as
//! distinct [`WebhookError`] variants. A non-zero `errcode` from the
//! provider is not an error: it comes back as a [`SendResult`] and the
//! caller decides what it means. Nothing is retried.
//!
//! # Limitations
//!
//! Mentions by user id (`atUserIds`) are not exposed; only mentions by
//! mobile number and "mention everyone" are supported.

mod client;
mod config;
mod dispatch;
mod error;
mod message;
mod response;
mod signer;
mod transport;

pub use client::Client;
pub use config::{
    default_user_agent, validate_secret, validate_webhook_address, ClientConfig,
    DEFAULT_TIMEOUT_SECS, SECRET_PREFIX,
};
pub use dispatch::{dispatch, signed_url};
pub use error::{WebhookError, WebhookResult};
pub use message::{
    external_link, ActionCardButton, ActionCardButtonBody, ActionCardContent, At,
    ButtonOrientation, FeedCardContent, FeedCardLink, FeedCardLinkBody, LinkContent,
    MarkdownContent, MessageDocument, OpenMode, TextContent,
};
pub use response::{decode_response, SendResult};
pub use signer::{sign, sign_at, SignaturePair};
pub use transport::{HttpTransport, Transport};
