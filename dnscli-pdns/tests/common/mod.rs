//! Shared test helpers

#![allow(dead_code)]

use std::time::Duration;

use dnscli_pdns::{ClientConfig, PdnsClient};
use mockito::ServerGuard;

pub const API_PREFIX: &str = "/api/v1/servers/localhost";

/// Client pointed at a mock server.
pub fn client_for(server: &ServerGuard) -> PdnsClient {
    client_with(server, None)
}

/// Client pointed at a mock server, sending `api_key` when given.
pub fn client_with(server: &ServerGuard, api_key: Option<&str>) -> PdnsClient {
    let config = ClientConfig {
        base_url: server.url(),
        api_key: api_key.map(str::to_string),
        tls: None,
        timeout: Duration::from_secs(5),
    };
    PdnsClient::new(&config).expect("client should build without TLS")
}

/// Full path of an API resource.
pub fn path(resource: &str) -> String {
    format!("{API_PREFIX}{resource}")
}

/// PowerDNS error body.
pub fn error_body(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
