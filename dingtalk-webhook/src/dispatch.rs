//! One send cycle: serialize, sign, post, decode.

use tracing::debug;

use crate::error::WebhookResult;
use crate::message::MessageDocument;
use crate::response::{decode_response, SendResult};
use crate::signer::{self, SignaturePair};
use crate::transport::Transport;

/// Appends the signature parameters to `endpoint`.
///
/// The `sign` value is already percent-encoded and is appended as-is.
#[must_use]
pub fn signed_url(endpoint: &str, signature: &SignaturePair) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{separator}{}", signature.query_string())
}

/// Sends `document` to `endpoint`, signing the URL when `secret` is set.
///
/// Serialization, transport, and decode failures are returned as distinct
/// errors. A decoded non-zero `errcode` is returned as `Ok`.
pub async fn dispatch(
    transport: &dyn Transport,
    endpoint: &str,
    secret: Option<&str>,
    document: &MessageDocument,
) -> WebhookResult<SendResult> {
    let body = document.to_vec()?;

    let url = match secret {
        Some(secret) => signed_url(endpoint, &signer::sign(secret)),
        None => endpoint.to_string(),
    };

    debug!(
        msgtype = document.msg_type(),
        signed = secret.is_some(),
        bytes = body.len(),
        "Dispatching webhook message"
    );

    let response = transport.post_json(&url, body).await?;
    let result = decode_response(&response)?;

    if !result.is_success() {
        debug!(
            errcode = result.code(),
            errmsg = result.message(),
            "Webhook rejected message"
        );
    }

    Ok(result)
}
