// tests/blikk_api/retrieval.rs
//! Single-resource fetches.

use super::common::{blocking, client_for, received};
use blikk::{get, BlikkError, User};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_DETAIL: &str = include_str!("../fixtures/blikk/user_detail.json");

#[tokio::test]
async fn fetches_user_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/Admin/Users/123"))
        .and(header("Authorization", "Bearer fake-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(USER_DETAIL))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let user = blocking(move || get::<User>(&client_for(&uri), "123"))
        .await
        .unwrap();

    assert_eq!(user.id, 123);
    assert_eq!(user.full_name(), "Specific Person");
    assert_eq!(user.start_date.to_string(), "2020-02-01");
    assert!(user.end_date.is_zero());
    assert_eq!(
        user.address.as_ref().and_then(|a| a.city.as_deref()),
        Some("Stockholm")
    );
    assert!(user.time_bank_enabled);
    assert_eq!(user.tags, vec!["foreman"]);
}

#[tokio::test]
async fn fetch_sends_no_pagination_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/Admin/Users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id": 7}"#))
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || client_for(&uri).get::<User>("7"))
        .await
        .unwrap();

    let requests = received(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id": 1, "firstName": "Test""#))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = blocking(move || client_for(&uri).get::<User>("1"))
        .await
        .unwrap_err();

    assert!(matches!(err, BlikkError::Decode { resource: "User", .. }));
    assert!(err.to_string().contains("failed to decode User response"));
}

#[tokio::test]
async fn not_found_is_reported_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("User 404 was not found"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = blocking(move || client_for(&uri).get::<User>("404"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("User 404 was not found"));
}

#[tokio::test]
async fn connection_failure_is_not_retried() {
    // Nothing listens on the discard port.
    let err = blocking(|| {
        blikk::Client::builder("fake-token")
            .base_url("http://127.0.0.1:9/")
            .build()
            .unwrap()
            .get::<User>("1")
    })
    .await
    .unwrap_err();

    assert!(matches!(err, BlikkError::Transport(_)));
}
