use std::collections::BTreeMap;
use std::time::Duration;

use kong_access::{ClientConfig, ErrorKind, KongClient, KongError};
use proptest::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::support;

#[tokio::test]
async fn unconfigured_client_rejects_every_operation() {
    let client = KongClient::new(ClientConfig::default()).unwrap();

    let errors = vec![
        client.is_upstream_set_up("billing").await.unwrap_err(),
        client.read_upstream_targets("billing").await.unwrap_err(),
        client.create_upstream_target("billing", "10.0.0.5:8000").await.unwrap_err(),
        client.delete_upstream_target("billing", "10.0.0.5:8000").await.unwrap_err(),
        client.read_service_configuration("billing").await.unwrap_err(),
        client.update_service_host("billing", "up").await.unwrap_err(),
        client.create_route("billing", "/billing").await.unwrap_err(),
        client.add_service_plugin("billing", "cors", &BTreeMap::new()).await.unwrap_err(),
    ];

    for error in errors {
        assert_eq!(error.kind(), ErrorKind::ConnectionNotConfigured);
    }
}

#[tokio::test]
async fn connection_check_precedes_parameter_check() {
    let client = KongClient::new(ClientConfig::default()).unwrap();

    let error = client.is_service_set_up("").await.unwrap_err();
    assert!(matches!(error, KongError::ConnectionNotConfigured));
}

#[tokio::test]
async fn blank_parameters_never_reach_the_gateway() {
    let (server, client) = support::start().await;

    let errors = vec![
        client.is_upstream_set_up("").await.unwrap_err(),
        client.create_upstream("   ").await.unwrap_err(),
        client.is_address_in_upstream_target_list("", "billing").await.unwrap_err(),
        client.is_address_in_upstream_target_list("10.0.0.5:8000", "").await.unwrap_err(),
        client.delete_upstream_target("billing", "\t").await.unwrap_err(),
        client.create_service("billing", "").await.unwrap_err(),
        client.service_has_upstream("", "up").await.unwrap_err(),
        client.update_service_host("billing", " ").await.unwrap_err(),
        client.service_has_route_with_path_set_up("billing", "").await.unwrap_err(),
        client.create_route("", "/billing").await.unwrap_err(),
        client.service_has_plugin("billing", "").await.unwrap_err(),
        client.add_service_plugin("billing", "", &BTreeMap::new()).await.unwrap_err(),
    ];

    for error in errors {
        assert_eq!(error.kind(), ErrorKind::EmptyParameter);
    }
    assert_eq!(support::request_count(&server).await, 0);
}

#[tokio::test]
async fn reconfiguring_one_client_leaves_clones_alone() {
    let (first, client) = support::start().await;
    let second = wiremock::MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/upstreams/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::upstream_json("billing")))
        .mount(&first)
        .await;
    Mock::given(method("GET"))
        .and(path("/upstreams/billing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&second)
        .await;

    let mut moved = client.clone();
    moved
        .configure(&second.address().ip().to_string(), u32::from(second.address().port()), false)
        .unwrap();

    assert!(client.is_upstream_set_up("billing").await.unwrap());
    assert!(!moved.is_upstream_set_up("billing").await.unwrap());
}

#[tokio::test]
async fn unreachable_gateway_is_a_transport_error() {
    let mut client = KongClient::new(ClientConfig {
        timeout: Some(Duration::from_secs(2)),
        verbose: false,
    })
    .unwrap();
    client.configure("127.0.0.1", 1, false).unwrap();

    let error = client.is_upstream_set_up("billing").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Transport);
}

proptest! {
    #[test]
    fn configure_accepts_only_valid_ports(port in 0u32..200_000) {
        let mut client = KongClient::new(ClientConfig::default()).unwrap();
        let result = client.configure("localhost", port, false);

        if (1..=65535).contains(&port) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(client.base_url().unwrap(), format!("http://localhost:{}", port));
        } else {
            prop_assert!(matches!(result, Err(KongError::InvalidPort { port: p }) if p == port), "port {} accepted", port);
            prop_assert!(!client.is_configured());
        }
    }

    #[test]
    fn tls_selects_https(port in 1u32..=65535, use_tls in any::<bool>()) {
        let client = KongClient::connect("kong.internal", port, use_tls).unwrap();
        let scheme = if use_tls { "https" } else { "http" };
        prop_assert_eq!(client.base_url().unwrap(), format!("{}://kong.internal:{}", scheme, port));
    }
}
