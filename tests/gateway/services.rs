use kong_access::{ErrorKind, KongError};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::support::{self, FORM_CONTENT_TYPE};

#[tokio::test]
async fn service_existence() {
    let (server, client) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/services/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::service_json("billing", "billing-up")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(client.is_service_set_up("billing").await.unwrap());
    assert!(!client.is_service_set_up("ghost").await.unwrap());
}

#[tokio::test]
async fn read_missing_service_fails() {
    let (server, client) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/services/foo"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = client.read_service_configuration("foo").await.unwrap_err();
    assert!(matches!(error, KongError::ResourceNotFound { ref resource, ref name } if resource == "service" && name == "foo"));
}

#[tokio::test]
async fn create_then_read_service() {
    let (server, client) = support::start().await;
    Mock::given(method("POST"))
        .and(path("/services"))
        .and(header("content-type", FORM_CONTENT_TYPE))
        .and(body_string("name=svc&host=up"))
        .respond_with(ResponseTemplate::new(201).set_body_json(support::service_json("svc", "up")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/svc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::service_json("svc", "up")))
        .mount(&server)
        .await;

    assert!(client.create_service("svc", "up").await.unwrap());

    let service = client.read_service_configuration("svc").await.unwrap();
    assert_eq!(service.host, "up");
    assert_eq!(service.name.as_deref(), Some("svc"));
    assert_eq!(service.port, 80);
    assert!(service.enabled);
    assert!(service.ca_certificates.is_empty());
}

#[tokio::test]
async fn service_upstream_link() {
    let (server, client) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/services/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::service_json("billing", "billing-up")))
        .mount(&server)
        .await;

    assert!(client.service_has_upstream("billing", "billing-up").await.unwrap());
    assert!(!client.service_has_upstream("billing", "other-up").await.unwrap());
}

#[tokio::test]
async fn update_service_host_is_verified() {
    let (server, client) = support::start().await;
    Mock::given(method("PATCH"))
        .and(path("/services/svc"))
        .and(header("content-type", FORM_CONTENT_TYPE))
        .and(body_string("host=new-up"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::service_json("svc", "new-up")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/svc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::service_json("svc", "new-up")))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.update_service_host("svc", "new-up").await.unwrap());
}

#[tokio::test]
async fn unchanged_host_after_update_is_not_modified() {
    let (server, client) = support::start().await;
    Mock::given(method("PATCH"))
        .and(path("/services/svc"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/svc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::service_json("svc", "old-up")))
        .mount(&server)
        .await;

    let error = client.update_service_host("svc", "new-up").await.unwrap_err();
    assert!(matches!(error, KongError::ResourceNotModified { ref name, .. } if name == "svc"));
}

#[tokio::test]
async fn update_missing_service_fails_without_verification() {
    let (server, client) = support::start().await;
    Mock::given(method("PATCH"))
        .and(path("/services/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = client.update_service_host("ghost", "up").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ResourceNotFound);
    assert_eq!(support::request_count(&server).await, 1);
}

#[tokio::test]
async fn rejected_update_fails_without_verification() {
    let (server, client) = support::start().await;
    Mock::given(method("PATCH"))
        .and(path("/services/svc"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"message":"schema violation (host: invalid value)"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let error = client.update_service_host("svc", "not a host").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::BadRequest);
    assert!(matches!(error, KongError::BadRequest { ref message, .. } if message.contains("schema violation")));
    assert_eq!(support::request_count(&server).await, 1);
}

#[tokio::test]
async fn rejected_read_is_bad_request() {
    let (server, client) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/services/svc"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"message":"bad request"}"#))
        .mount(&server)
        .await;

    let error = client.read_service_configuration("svc").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::BadRequest);
}

#[tokio::test]
async fn service_names_are_percent_encoded() {
    let (server, client) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/services/team%2Fbilling"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::service_json("team/billing", "up")))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.is_service_set_up("team/billing").await.unwrap());
}
