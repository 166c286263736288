//! # dnscli-pdns
//!
//! A small typed client for the
//! [PowerDNS Authoritative HTTP API](https://doc.powerdns.com/authoritative/http-api/).
//!
//! One client exists per API sub-resource, all sharing a single
//! [`PdnsClient`] connection handle:
//!
//! | Client | Trait | Resource |
//! |--------|-------|----------|
//! | [`ZonesClient`] | [`ZonesApi`] | `/zones`, record-set PATCH |
//! | [`ForwardZonesClient`] | [`ForwardZonesApi`] | `/forward-zones` |
//! | [`SearchClient`] | [`SearchApi`] | `/search-data` |
//! | [`ServersClient`] | [`ServerApi`] | server information |
//!
//! Every call issues exactly one HTTP request. Nothing is retried.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dnscli_pdns::{ClientConfig, PdnsClient, RecordSetRequest, ZonesApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PdnsClient::new(&ClientConfig::default())?;
//!
//!     let request = RecordSetRequest {
//!         zone: "example.com".to_string(),
//!         name: "host".to_string(),
//!         record_type: "A".to_string(),
//!         ttl: 1800,
//!         content: "10.0.0.1, 10.0.0.2".to_string(),
//!         set_ptr: true,
//!     };
//!     let built = request.build_replace()?;
//!     client.zones().add_record_set(&built.zone, &built.rrset).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Names
//!
//! PowerDNS expects canonical names (trailing dot). Use [`canonicalize`] on the
//! way in and [`de_canonicalize`] for display.

mod api;
mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use error::{PdnsError, Result};

pub use client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, PdnsClient, TlsConfig};

pub use api::{ForwardZonesClient, SearchClient, ServersClient, ZonesClient};

pub use traits::{ForwardZonesApi, SearchApi, ServerApi, ZonesApi};

pub use types::{
    ChangeType, Comment, ForwardZone, NewZone, ObjectType, Record, RecordSetRequest,
    ResourceRecordSet, SearchResult, SearchResults, ServerInfo, Zone, ZoneKind, ZoneRecordSet,
    canonicalize, de_canonicalize, is_valid_domain,
};
