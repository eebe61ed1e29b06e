use base64::{engine::general_purpose::STANDARD, Engine};
use dingtalk_webhook::{sign, sign_at, signed_url};
use hmac::{Hmac, Mac};
use sha2::Sha256;

const SECRET: &str = "SEC0123456789abcdef";

fn expected_signature(secret: &str, timestamp: &str) -> Vec<u8> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(format!("{timestamp}\n{secret}").as_bytes());
    mac.finalize().into_bytes().to_vec()
}

// ── sign ─────────────────────────────────────────────────────────

#[test]
fn timestamp_is_current_millis() {
    let before = chrono::Utc::now().timestamp_millis();
    let pair = sign(SECRET);
    let after = chrono::Utc::now().timestamp_millis();

    let ts: i64 = pair.timestamp().parse().unwrap();
    assert!(ts >= before && ts <= after, "{ts} not in [{before}, {after}]");
    assert!(pair.timestamp().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn signature_is_percent_encoded_base64() {
    let pair = sign(SECRET);
    let decoded = urlencoding::decode(pair.sign()).unwrap();
    let digest = STANDARD.decode(decoded.as_bytes()).unwrap();
    assert_eq!(digest.len(), 32);
    assert!(!pair.sign().contains('+'));
    assert!(!pair.sign().contains('/'));
    assert!(!pair.sign().contains('='));
}

#[test]
fn signature_matches_hmac_over_timestamp_and_secret() {
    let pair = sign(SECRET);
    let decoded = urlencoding::decode(pair.sign()).unwrap();
    let digest = STANDARD.decode(decoded.as_bytes()).unwrap();
    assert_eq!(digest, expected_signature(SECRET, pair.timestamp()));
}

// ── sign_at ──────────────────────────────────────────────────────

#[test]
fn sign_at_is_deterministic() {
    let a = sign_at(SECRET, 1_700_000_000_000);
    let b = sign_at(SECRET, 1_700_000_000_000);
    assert_eq!(a, b);
    assert_eq!(a.timestamp(), "1700000000000");
}

#[test]
fn sign_at_known_vector() {
    let pair = sign_at(SECRET, 1_700_000_000_000);
    let expected = STANDARD.encode(expected_signature(SECRET, "1700000000000"));
    assert_eq!(pair.sign(), urlencoding::encode(&expected));
}

#[test]
fn different_timestamps_different_signatures() {
    let a = sign_at(SECRET, 1_000);
    let b = sign_at(SECRET, 1_001);
    assert_ne!(a.sign(), b.sign());
}

#[test]
fn different_secrets_different_signatures() {
    let a = sign_at("SECaaaa", 1_000);
    let b = sign_at("SECaaab", 1_000);
    assert_ne!(a.sign(), b.sign());
}

#[test]
fn query_string_format() {
    let pair = sign_at(SECRET, 42);
    assert_eq!(
        pair.query_string(),
        format!("timestamp=42&sign={}", pair.sign())
    );
}

// ── signed_url ───────────────────────────────────────────────────

#[test]
fn signed_url_extends_existing_query() {
    let pair = sign_at(SECRET, 42);
    let url = signed_url("https://oapi.dingtalk.com/robot/send?access_token=abc", &pair);
    assert_eq!(
        url,
        format!(
            "https://oapi.dingtalk.com/robot/send?access_token=abc&timestamp=42&sign={}",
            pair.sign()
        )
    );
}

#[test]
fn signed_url_starts_query_when_absent() {
    let pair = sign_at(SECRET, 42);
    let url = signed_url("https://example.com/hook", &pair);
    assert!(url.starts_with("https://example.com/hook?timestamp=42&sign="));
}

#[test]
fn signed_url_does_not_double_encode() {
    let pair = sign_at(SECRET, 42);
    let url = signed_url("https://example.com/hook", &pair);
    assert!(!url.contains("%25"));
}
