//! Shared test helpers for webhook client tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dingtalk_webhook::{Client, Transport, WebhookResult};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_SECRET: &str = "SEC0123456789abcdef";
pub const ROBOT_PATH: &str = "/robot/send";

/// Webhook URL on `server`, with an access token like the real ones.
pub fn robot_url(server: &MockServer) -> String {
    format!("{}{ROBOT_PATH}?access_token=test-token", server.uri())
}

/// Starts a server that answers every POST with `body`.
pub async fn robot_server(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ROBOT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(&server)
        .await;
    server
}

/// The JSON body of the only request `server` received.
pub async fn only_request_body(server: &MockServer) -> serde_json::Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    serde_json::from_slice(&requests[0].body).unwrap()
}

/// A transport that records what it was asked to send and answers with a
/// canned body.
#[derive(Default)]
pub struct RecordingTransport {
    pub response: Vec<u8>,
    pub sent: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingTransport {
    pub fn answering(body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: body.as_bytes().to_vec(),
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn urls(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|(u, _)| u.clone()).collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> WebhookResult<Vec<u8>> {
        self.sent.lock().unwrap().push((url.to_string(), body));
        Ok(self.response.clone())
    }
}

/// A client over a recording transport.
pub fn recording_client(secret: &str, body: &str) -> (Client, Arc<RecordingTransport>) {
    let transport = RecordingTransport::answering(body);
    let client = Client::with_transport(
        "https://oapi.dingtalk.com/robot/send?access_token=abc",
        secret,
        transport.clone(),
    )
    .unwrap();
    (client, transport)
}
