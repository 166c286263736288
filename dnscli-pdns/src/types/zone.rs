//! Zone and forwarding-zone resources

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PdnsError;
use crate::types::record::ResourceRecordSet;

/// How PowerDNS serves a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoneKind {
    #[default]
    Native,
    Master,
    Slave,
    Producer,
    Consumer,
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Native => "Native",
            Self::Master => "Master",
            Self::Slave => "Slave",
            Self::Producer => "Producer",
            Self::Consumer => "Consumer",
        };
        f.write_str(s)
    }
}

impl FromStr for ZoneKind {
    type Err = PdnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "master" => Ok(Self::Master),
            "slave" => Ok(Self::Slave),
            "producer" => Ok(Self::Producer),
            "consumer" => Ok(Self::Consumer),
            _ => Err(PdnsError::InvalidParameter {
                param: "kind".to_string(),
                detail: format!("unknown zone kind '{s}'"),
            }),
        }
    }
}

/// Zone as returned by `/zones` and `/zones/{zone}`.
///
/// `rrsets` is only filled in by the single-zone endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: ZoneKind,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub serial: u32,
    #[serde(default)]
    pub notified_serial: u32,
    #[serde(default)]
    pub edited_serial: u32,
    #[serde(default)]
    pub masters: Vec<String>,
    #[serde(default)]
    pub dnssec: bool,
    #[serde(default)]
    pub account: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrsets: Option<Vec<ResourceRecordSet>>,
    /// Fields this client does not model (`soa_edit_api`, `nsec3param`, ...),
    /// kept so JSON output mirrors the API.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /zones`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewZone {
    pub name: String,
    pub kind: ZoneKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nameservers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub masters: Vec<String>,
}

/// A zone whose queries are forwarded to other name servers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardZone {
    pub name: String,
    #[serde(default)]
    pub nameservers: Vec<String>,
}
