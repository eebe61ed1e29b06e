//! Decoding of the robot API's response envelope.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::error::{WebhookError, WebhookResult};

/// The provider's answer to a send request: `{ errcode?, errmsg? }`.
///
/// An absent or zero `errcode` means the message was accepted. A non-zero
/// code (bad token, rate limited, keyword mismatch, ...) is still a
/// successfully decoded result; callers choose what to do with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errcode: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errmsg: Option<String>,
}

impl SendResult {
    /// Returns true if the provider accepted the message.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code() == 0
    }

    /// The error code, with an absent code read as zero.
    #[must_use]
    pub fn code(&self) -> i64 {
        self.errcode.unwrap_or(0)
    }

    /// The error message, empty when absent.
    #[must_use]
    pub fn message(&self) -> &str {
        self.errmsg.as_deref().unwrap_or("")
    }
}

/// Decodes a response body. Anything that is not a result envelope is a
/// [`WebhookError::Decode`].
///
/// Only a JSON object is an envelope; the derived `Deserialize` would also
/// take a sequence and map it by position.
pub fn decode_response(body: &[u8]) -> WebhookResult<SendResult> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(WebhookError::Decode)?;
    if !value.is_object() {
        return Err(WebhookError::Decode(serde_json::Error::custom(
            "expected a JSON object",
        )));
    }
    serde_json::from_value(value).map_err(WebhookError::Decode)
}
