use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{PdnsError, Result};
use crate::types::{ForwardZone, NewZone, ObjectType, ResourceRecordSet, SearchResults, ServerInfo, Zone};

// ============ Error mapping (internal) ============

/// Non-2xx API response (internal use).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    pub status: u16,
    /// `error` field of the PowerDNS error body, or the raw body.
    pub message: String,
}

/// PowerDNS error body: `{"error": "...", "errors": [...]}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

impl RawApiError {
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.trim().is_empty() => format!("HTTP {status}"),
            Err(_) => body.trim().to_string(),
        };
        Self { status, message }
    }
}

/// Extra information used while mapping errors (internal use).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Zone or resource the request addressed.
    pub resource: Option<String>,
}

impl ErrorContext {
    pub fn resource(resource: impl Into<String>) -> Self {
        Self {
            resource: Some(resource.into()),
        }
    }
}

/// Maps raw API errors onto `PdnsError` (internal use).
pub(crate) trait ErrorMapper {
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> PdnsError {
        let resource = || context.resource.clone().unwrap_or_else(|| "<unknown>".to_string());
        match raw.status {
            401 | 403 => PdnsError::Unauthorized {
                raw_message: raw.message,
            },
            404 => PdnsError::NotFound {
                resource: resource(),
                raw_message: raw.message,
            },
            409 => PdnsError::Conflict {
                resource: resource(),
                raw_message: raw.message,
            },
            422 => PdnsError::InvalidParameter {
                param: resource(),
                detail: raw.message,
            },
            status => PdnsError::Api {
                status,
                message: raw.message,
            },
        }
    }
}

// ============ API traits ============

/// Authoritative zones and their record sets.
#[async_trait]
pub trait ZonesApi: Send + Sync {
    /// List all zones (without record sets).
    async fn list(&self) -> Result<Vec<Zone>>;

    /// Fetch one zone including its record sets.
    async fn get(&self, zone: &str) -> Result<Zone>;

    /// Create a zone.
    async fn create(&self, zone: &NewZone) -> Result<Zone>;

    /// Delete a zone.
    async fn delete(&self, zone: &str) -> Result<()>;

    /// Replace a record set (`changetype = REPLACE`).
    async fn add_record_set(&self, zone: &str, rrset: &ResourceRecordSet) -> Result<()>;

    /// Remove a record set (`changetype = DELETE`).
    async fn delete_record_set(&self, zone: &str, rrset: &ResourceRecordSet) -> Result<()>;
}

/// Forwarding zones.
#[async_trait]
pub trait ForwardZonesApi: Send + Sync {
    async fn list(&self) -> Result<Vec<ForwardZone>>;

    async fn add(&self, zone: &ForwardZone) -> Result<()>;

    /// Delete a forwarding zone by its canonical name.
    async fn delete_by_name(&self, name: &str) -> Result<()>;
}

/// Full-text search over the backend.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Search the data inside PowerDNS, returning at most `max` results.
    async fn search(&self, query: &str, max: u32, object_type: ObjectType) -> Result<SearchResults>;
}

/// Server information.
#[async_trait]
pub trait ServerApi: Send + Sync {
    async fn info(&self) -> Result<ServerInfo>;
}
