//! Shared PowerDNS HTTP client

mod http;

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::api::{ForwardZonesClient, SearchClient, ServersClient, ZonesClient};
use crate::error::{PdnsError, Result};
use crate::traits::ErrorMapper;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8081";
/// Default request timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
/// Upper bound for the connect timeout (seconds).
const MAX_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Every resource lives under this server.
const API_PREFIX: &str = "/api/v1/servers/localhost";

/// Client certificate settings for mutual TLS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    /// CA bundle used to verify the server, in addition to the system roots.
    pub ca_cert: Option<PathBuf>,
    /// PEM client certificate.
    pub cert: PathBuf,
    /// PEM (PKCS#8) private key.
    pub key: PathBuf,
}

/// Connection settings, fixed for the lifetime of a [`PdnsClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Sent as `X-API-Key` when set.
    pub api_key: Option<String>,
    pub tls: Option<TlsConfig>,
    /// Per-request timeout. `Duration::ZERO` disables it.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            tls: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Handle to one PowerDNS server.
///
/// Cloning is cheap; the per-resource clients each hold a clone.
#[derive(Debug, Clone)]
pub struct PdnsClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
}

impl PdnsClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        // Zero means no timeout
        if !config.timeout.is_zero() {
            let connect_timeout = config
                .timeout
                .min(Duration::from_secs(MAX_CONNECT_TIMEOUT_SECS));
            builder = builder
                .connect_timeout(connect_timeout)
                .timeout(config.timeout);
        }

        if let Some(tls) = &config.tls {
            builder = apply_tls(builder, tls)?;
        }

        let client = builder.build().map_err(|e| PdnsError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn zones(&self) -> ZonesClient {
        ZonesClient::new(self.clone())
    }

    pub fn forward_zones(&self) -> ForwardZonesClient {
        ForwardZonesClient::new(self.clone())
    }

    pub fn search(&self) -> SearchClient {
        SearchClient::new(self.clone())
    }

    pub fn servers(&self) -> ServersClient {
        ServersClient::new(self.clone())
    }

    /// Absolute URL for a path below the server prefix.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }
}

impl ErrorMapper for PdnsClient {}

// ============ TLS ============

fn tls_error(path: &Path, detail: impl ToString) -> PdnsError {
    PdnsError::Tls {
        path: path.display().to_string(),
        detail: detail.to_string(),
    }
}

fn read_pem(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| tls_error(path, e))
}

#[cfg(any(feature = "native-tls", feature = "rustls"))]
fn apply_tls(mut builder: ClientBuilder, tls: &TlsConfig) -> Result<ClientBuilder> {
    use reqwest::Certificate;

    #[cfg(feature = "rustls")]
    {
        builder = builder.use_rustls_tls();
    }

    if let Some(ca_path) = &tls.ca_cert {
        let pem = read_pem(ca_path)?;
        let ca = Certificate::from_pem(&pem).map_err(|e| tls_error(ca_path, e))?;
        builder = builder.add_root_certificate(ca);
    }

    let cert = read_pem(&tls.cert)?;
    let key = read_pem(&tls.key)?;
    let identity = load_identity(&cert, &key).map_err(|e| tls_error(&tls.cert, e))?;

    Ok(builder.identity(identity))
}

#[cfg(not(any(feature = "native-tls", feature = "rustls")))]
fn apply_tls(_builder: ClientBuilder, tls: &TlsConfig) -> Result<ClientBuilder> {
    Err(tls_error(
        &tls.cert,
        "built without a TLS backend (enable `native-tls` or `rustls`)",
    ))
}

#[cfg(feature = "rustls")]
fn load_identity(cert: &[u8], key: &[u8]) -> reqwest::Result<reqwest::Identity> {
    let mut pem = key.to_vec();
    pem.push(b'\n');
    pem.extend_from_slice(cert);
    reqwest::Identity::from_pem(&pem)
}

#[cfg(all(feature = "native-tls", not(feature = "rustls")))]
fn load_identity(cert: &[u8], key: &[u8]) -> reqwest::Result<reqwest::Identity> {
    reqwest::Identity::from_pkcs8_pem(cert, key)
}
