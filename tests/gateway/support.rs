//! Shared fixtures for gateway tests

use kong_access::KongClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Start a mock admin API and a client pointed at it
pub async fn start() -> (MockServer, KongClient) {
    let server = MockServer::start().await;
    let address = server.address();
    let client = KongClient::connect(&address.ip().to_string(), u32::from(address.port()), false)
        .expect("mock server address is valid");
    (server, client)
}

/// Number of requests the mock server has seen
pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map(|requests| requests.len()).unwrap_or_default()
}

pub fn upstream_json(name: &str) -> Value {
    json!({
        "id": "4f1a0c5e-6d0c-4f55-9a2c-0d8c1f1b2e3a",
        "created_at": 1700000000,
        "name": name,
        "algorithm": "round-robin",
        "hash_on": "none",
        "hash_fallback": "none",
        "hash_on_cookie_path": "/",
        "slots": 10000,
        "healthchecks": {
            "active": {
                "type": "http",
                "http_path": "/ping",
                "timeout": 2,
                "concurrency": 2,
                "healthy": { "interval": 1, "http_statuses": [204], "successes": 0 },
                "unhealthy": { "interval": 1, "http_statuses": [429, 500, 503], "tcp_failures": 0, "timeouts": 0, "http_failures": 0 }
            },
            "passive": {
                "type": "http",
                "healthy": { "http_statuses": [200, 201], "successes": 0 },
                "unhealthy": { "http_statuses": [500, 503], "tcp_failures": 0, "timeouts": 0, "http_failures": 0 }
            }
        },
        "tags": null,
        "host_header": null,
        "client_certificate": null
    })
}

pub fn target_json(address: &str) -> Value {
    json!({
        "id": "b2c1f9a0-1f0e-4c33-8f0e-5a5f2a6d7e11",
        "created_at": 1700000001.5,
        "upstream": { "id": "4f1a0c5e-6d0c-4f55-9a2c-0d8c1f1b2e3a" },
        "target": address,
        "weight": 100,
        "tags": null
    })
}

pub fn service_json(name: &str, host: &str) -> Value {
    json!({
        "id": "9748f662-7711-4a90-8186-dc02f10eb0f5",
        "name": name,
        "created_at": 1700000002,
        "updated_at": 1700000002,
        "protocol": "http",
        "host": host,
        "port": 80,
        "path": null,
        "retries": 5,
        "connect_timeout": 60000,
        "write_timeout": 60000,
        "read_timeout": 60000,
        "tls_verify": null,
        "tls_verify_depth": null,
        "ca_certificates": null,
        "client_certificate": null,
        "enabled": true,
        "tags": null
    })
}

pub fn route_json(path: &str) -> Value {
    json!({
        "id": "d35165e2-d03e-461a-bdeb-dad0a112abfe",
        "name": null,
        "protocols": ["http"],
        "methods": null,
        "hosts": null,
        "paths": [path],
        "headers": null,
        "regex_priority": 0,
        "strip_path": true,
        "path_handling": "v0",
        "preserve_host": false,
        "request_buffering": false,
        "response_buffering": false,
        "service": { "id": "9748f662-7711-4a90-8186-dc02f10eb0f5" },
        "tags": null
    })
}

pub fn plugin_json(name: &str) -> Value {
    json!({
        "id": "ce44eef5-41ed-47f6-baab-f725cecf98c7",
        "name": name,
        "created_at": 1700000003,
        "route": null,
        "service": { "id": "9748f662-7711-4a90-8186-dc02f10eb0f5" },
        "consumer": null,
        "config": { "minute": 20, "policy": "local" },
        "protocols": ["http", "https"],
        "enabled": true,
        "tags": null
    })
}

/// Wrap entries in a collection page
pub fn page(entries: Vec<Value>) -> Value {
    json!({ "data": entries, "next": null })
}
