//! `/zones` client

use async_trait::async_trait;

use crate::client::PdnsClient;
use crate::error::Result;
use crate::traits::{ErrorContext, ZonesApi};
use crate::types::record::RecordSetPatch;
use crate::types::{NewZone, ResourceRecordSet, Zone};

/// Zones client
#[derive(Debug, Clone)]
pub struct ZonesClient {
    http: PdnsClient,
}

impl ZonesClient {
    pub fn new(http: PdnsClient) -> Self {
        Self { http }
    }

    fn zone_path(zone: &str) -> String {
        format!("/zones/{}", urlencoding::encode(zone))
    }

    async fn patch_record_set(&self, zone: &str, rrset: &ResourceRecordSet) -> Result<()> {
        let body = RecordSetPatch { rrsets: [rrset] };
        self.http
            .patch(&Self::zone_path(zone), &body, ErrorContext::resource(zone))
            .await
    }
}

#[async_trait]
impl ZonesApi for ZonesClient {
    async fn list(&self) -> Result<Vec<Zone>> {
        self.http.get("/zones", ErrorContext::default()).await
    }

    async fn get(&self, zone: &str) -> Result<Zone> {
        self.http
            .get(&Self::zone_path(zone), ErrorContext::resource(zone))
            .await
    }

    async fn create(&self, zone: &NewZone) -> Result<Zone> {
        self.http
            .post("/zones", zone, ErrorContext::resource(zone.name.as_str()))
            .await
    }

    async fn delete(&self, zone: &str) -> Result<()> {
        self.http
            .delete(&Self::zone_path(zone), ErrorContext::resource(zone))
            .await
    }

    async fn add_record_set(&self, zone: &str, rrset: &ResourceRecordSet) -> Result<()> {
        self.patch_record_set(zone, rrset).await
    }

    async fn delete_record_set(&self, zone: &str, rrset: &ResourceRecordSet) -> Result<()> {
        self.patch_record_set(zone, rrset).await
    }
}
