//! `/forward-zones` client

use async_trait::async_trait;

use crate::client::PdnsClient;
use crate::error::Result;
use crate::traits::{ErrorContext, ForwardZonesApi};
use crate::types::ForwardZone;

/// Forwarding zones client
#[derive(Debug, Clone)]
pub struct ForwardZonesClient {
    http: PdnsClient,
}

impl ForwardZonesClient {
    pub fn new(http: PdnsClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ForwardZonesApi for ForwardZonesClient {
    async fn list(&self) -> Result<Vec<ForwardZone>> {
        self.http.get("/forward-zones", ErrorContext::default()).await
    }

    async fn add(&self, zone: &ForwardZone) -> Result<()> {
        self.http
            .post_void(
                "/forward-zones",
                zone,
                ErrorContext::resource(zone.name.as_str()),
            )
            .await
    }

    async fn delete_by_name(&self, name: &str) -> Result<()> {
        self.http
            .delete(
                &format!("/forward-zones/{}", urlencoding::encode(name)),
                ErrorContext::resource(name),
            )
            .await
    }
}
