// tests/blikk_api/common.rs
//! Shared helpers: a mock Blikk server and a way to drive the blocking client
//! from async tests.

use blikk::Client;
use wiremock::{MockServer, Request};

pub const TOKEN: &str = "fake-token";

/// Builds a client pointed at the mock server.
///
/// Must be called inside [`blocking`]: the reqwest blocking client cannot be
/// created or dropped on an async worker thread.
pub fn client_for(uri: &str) -> Client {
    Client::builder(TOKEN)
        .base_url(format!("{}/", uri))
        .build()
        .expect("client should build for mock server")
}

/// Runs blocking client code off the async runtime.
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
}

/// Query parameters of a recorded request, in order.
pub fn query_of(request: &Request) -> Vec<(String, String)> {
    request.url.query_pairs().into_owned().collect()
}

pub fn query_value(request: &Request, name: &str) -> Option<String> {
    query_of(request)
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}
