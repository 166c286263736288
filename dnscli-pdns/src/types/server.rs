//! Server information resource

use serde::{Deserialize, Serialize};

/// Response of `GET /api/v1/servers/localhost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(rename = "type", default)]
    pub object_type: String,
    pub id: String,
    #[serde(default)]
    pub daemon_type: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub config_url: String,
    #[serde(default)]
    pub zones_url: String,
}
