use powersocket_client::SocketClient;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub fn setup_test_client(mock_server_uri: &str) -> SocketClient {
    SocketClient::builder()
        .base_url(mock_server_uri)
        .build()
        .expect("Failed to build SocketClient")
}

/// Mounts a `GET <endpoint>` mock answering 200 with `body`, expected once.
#[allow(dead_code)]
pub async fn mount_json(mock_server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(mock_server)
        .await;
}

/// Mounts a `GET <endpoint>` mock answering with a raw status and body.
#[allow(dead_code)]
pub async fn mount_raw(mock_server: &MockServer, endpoint: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(mock_server)
        .await;
}
