// tests/blikk_api/rate_limiting.rs
//! 429 handling: wait as instructed, then retry the same request.

use super::common::{blocking, client_for, query_value, received};
use blikk::{ListOptions, User, UserSummary};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn retries_after_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/Admin/Users/1"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/Admin/Users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .mount(&server)
        .await;

    let uri = server.uri();
    let (user, elapsed) = blocking(move || {
        let started = Instant::now();
        let user = client_for(&uri).get::<User>("1");
        (user, started.elapsed())
    })
    .await;

    assert_eq!(user.unwrap().id, 1);
    assert_eq!(received(&server).await.len(), 2);
    assert!(elapsed >= Duration::from_secs(1), "waited {:?}", elapsed);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_retry_after_waits_default_interval() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1, "totalPages": 1, "items": [{"id": 5}]
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    let users = blocking(move || client_for(&uri).list::<UserSummary>(ListOptions::new()))
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    let requests = received(&server).await;
    assert_eq!(requests.len(), 2);
    // The retry is the identical request.
    assert_eq!(requests[0].url, requests[1].url);
    assert_eq!(query_value(&requests[1], "page").as_deref(), Some("1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn keeps_retrying_while_throttled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(5)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .mount(&server)
        .await;

    let uri = server.uri();
    let user = blocking(move || client_for(&uri).get::<User>("9"))
        .await
        .unwrap();

    assert_eq!(user.id, 9);
    assert_eq!(received(&server).await.len(), 6);
}
