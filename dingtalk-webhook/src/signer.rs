//! Request signing for robots using the "additional signature" setting.
//!
//! The provider checks two query parameters on every request:
//! - `timestamp`: milliseconds since the Unix epoch
//! - `sign`: `urlencode(base64(HMAC-SHA256(secret, "{timestamp}\n{secret}")))`
//!
//! The secret itself never leaves the process. The provider rejects
//! timestamps outside its tolerance window, so a pair is generated per
//! request and never reused.

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// A `(timestamp, sign)` pair for a single outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignaturePair {
    timestamp: String,
    sign: String,
}

impl SignaturePair {
    /// Decimal milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Percent-encoded base64 signature, ready to place in a URL.
    #[must_use]
    pub fn sign(&self) -> &str {
        &self.sign
    }

    /// Renders `timestamp=...&sign=...` without re-encoding the signature.
    #[must_use]
    pub fn query_string(&self) -> String {
        format!("timestamp={}&sign={}", self.timestamp, self.sign)
    }
}

/// Signs with the current wall-clock time.
///
/// Two calls within the same millisecond yield the same pair; the provider
/// accepts that.
#[must_use]
pub fn sign(secret: &str) -> SignaturePair {
    sign_at(secret, chrono::Utc::now().timestamp_millis())
}

/// Signs with an explicit timestamp in milliseconds.
#[must_use]
pub fn sign_at(secret: &str, timestamp_ms: i64) -> SignaturePair {
    let timestamp = timestamp_ms.to_string();
    let digest = hmac_sha256(secret.as_bytes(), format!("{timestamp}\n{secret}").as_bytes());
    let sign = urlencoding::encode(&STANDARD.encode(digest)).into_owned();

    SignaturePair { timestamp, sign }
}

fn hmac_sha256(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = match HmacSha256::new_from_slice(key) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC key can be of any size, as per crate documentation"),
    };
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}
