use kong_access::{ErrorKind, KongError, LoadBalancingAlgorithm};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::support::{self, FORM_CONTENT_TYPE};

#[tokio::test]
async fn existing_upstream_is_set_up() {
    let (server, client) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/upstreams/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::upstream_json("billing")))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.is_upstream_set_up("billing").await.unwrap());
}

#[tokio::test]
async fn missing_upstream_is_not_an_error() {
    let (server, client) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/upstreams/foo"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not found" })))
        .mount(&server)
        .await;

    assert!(!client.is_upstream_set_up("foo").await.unwrap());
}

#[tokio::test]
async fn existence_check_rejects_server_errors() {
    let (server, client) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/upstreams/billing"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = client.is_upstream_set_up("billing").await.unwrap_err();
    assert!(matches!(error, KongError::UnexpectedHttpCode { status: 500, .. }));
}

#[tokio::test]
async fn read_upstream_decodes_configuration() {
    let (server, client) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/upstreams/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::upstream_json("billing")))
        .mount(&server)
        .await;

    let upstream = client.read_upstream_configuration("billing").await.unwrap();
    assert_eq!(upstream.name, "billing");
    assert_eq!(upstream.algorithm, LoadBalancingAlgorithm::RoundRobin);
    assert_eq!(upstream.slots, 10000);
    assert_eq!(upstream.healthchecks.active.http_path, "/ping");
    assert_eq!(upstream.healthchecks.active.healthy.http_statuses, vec![204]);
    assert!(upstream.tags.is_empty());
}

#[tokio::test]
async fn read_missing_upstream_fails() {
    let (server, client) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/upstreams/foo"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = client.read_upstream_configuration("foo").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ResourceNotFound);
}

#[tokio::test]
async fn read_upstream_with_unknown_algorithm_is_a_decode_error() {
    let (server, client) = support::start().await;
    let mut body = support::upstream_json("billing");
    body["algorithm"] = json!("random");
    Mock::given(method("GET"))
        .and(path("/upstreams/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let error = client.read_upstream_configuration("billing").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn create_upstream_sends_health_check_defaults() {
    let (server, client) = support::start().await;
    Mock::given(method("POST"))
        .and(path("/upstreams"))
        .and(header("content-type", FORM_CONTENT_TYPE))
        .and(body_string_contains("name=billing"))
        .and(body_string_contains("healthchecks.active.http_path=%2Fping"))
        .and(body_string_contains("healthchecks.active.healthy.http_statuses=204"))
        .and(body_string_contains("healthchecks.active.unhealthy.interval=1"))
        .respond_with(ResponseTemplate::new(201).set_body_json(support::upstream_json("billing")))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.create_upstream("billing").await.unwrap());
}

#[tokio::test]
async fn create_existing_upstream_conflicts() {
    let (server, client) = support::start().await;
    Mock::given(method("POST"))
        .and(path("/upstreams"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({ "message": "UNIQUE violation detected on '{name=\"billing\"}'" })),
        )
        .mount(&server)
        .await;

    let error = client.create_upstream("billing").await.unwrap_err();
    assert!(matches!(error, KongError::ResourceExists { ref name, .. } if name == "billing"));
}

#[tokio::test]
async fn create_upstream_requires_201() {
    let (server, client) = support::start().await;
    Mock::given(method("POST"))
        .and(path("/upstreams"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let error = client.create_upstream("billing").await.unwrap_err();
    assert!(matches!(error, KongError::UnexpectedHttpCode { status: 200, .. }));
}

#[tokio::test]
async fn create_upstream_bad_request_carries_message() {
    let (server, client) = support::start().await;
    Mock::given(method("POST"))
        .and(path("/upstreams"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "schema violation (name: invalid value)" })),
        )
        .mount(&server)
        .await;

    let error = client.create_upstream("bad name").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::BadRequest);
    assert!(error.to_string().contains("schema violation"));
}
