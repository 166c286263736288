//! In-memory API implementations for command handler tests

use std::collections::BTreeMap;

use async_trait::async_trait;
use dnscli_pdns::{
    ForwardZone, ForwardZonesApi, NewZone, ObjectType, PdnsError, ResourceRecordSet, Result,
    SearchApi, SearchResult, SearchResults, ServerApi, ServerInfo, Zone, ZoneKind, ZonesApi,
    canonicalize,
};
use tokio::sync::RwLock;

fn not_found(resource: &str) -> PdnsError {
    PdnsError::NotFound {
        resource: resource.to_string(),
        raw_message: "Not Found".to_string(),
    }
}

pub fn zone(name: &str) -> Zone {
    Zone {
        id: canonicalize(name),
        name: canonicalize(name),
        kind: ZoneKind::Native,
        url: String::new(),
        serial: 1,
        notified_serial: 0,
        edited_serial: 1,
        masters: Vec::new(),
        dnssec: false,
        account: String::new(),
        rrsets: Some(Vec::new()),
        extra: serde_json::Map::new(),
    }
}

// ===== MockZonesApi =====

/// Zones keyed by canonical name, plus every record-set PATCH received.
#[derive(Default)]
pub struct MockZonesApi {
    zones: RwLock<BTreeMap<String, Zone>>,
    patches: RwLock<Vec<(String, ResourceRecordSet)>>,
}

impl MockZonesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zones(names: &[&str]) -> Self {
        Self::from_zones(names.iter().map(|name| zone(name)).collect())
    }

    pub fn from_zones(zones: Vec<Zone>) -> Self {
        let zones = zones.into_iter().map(|z| (z.name.clone(), z)).collect();
        Self {
            zones: RwLock::new(zones),
            patches: RwLock::new(Vec::new()),
        }
    }

    pub async fn patches(&self) -> Vec<(String, ResourceRecordSet)> {
        self.patches.read().await.clone()
    }

    pub async fn zone_names(&self) -> Vec<String> {
        self.zones.read().await.keys().cloned().collect()
    }

    async fn record_patch(&self, zone: &str, rrset: &ResourceRecordSet) -> Result<()> {
        if !self.zones.read().await.contains_key(&canonicalize(zone)) {
            return Err(not_found(zone));
        }
        self.patches
            .write()
            .await
            .push((zone.to_string(), rrset.clone()));
        Ok(())
    }
}

#[async_trait]
impl ZonesApi for MockZonesApi {
    async fn list(&self) -> Result<Vec<Zone>> {
        Ok(self
            .zones
            .read()
            .await
            .values()
            .map(|z| Zone {
                rrsets: None,
                ..z.clone()
            })
            .collect())
    }

    async fn get(&self, zone: &str) -> Result<Zone> {
        self.zones
            .read()
            .await
            .get(zone)
            .cloned()
            .ok_or_else(|| not_found(zone))
    }

    async fn create(&self, new_zone: &NewZone) -> Result<Zone> {
        let mut zones = self.zones.write().await;
        if zones.contains_key(&new_zone.name) {
            return Err(PdnsError::Conflict {
                resource: new_zone.name.clone(),
                raw_message: "Conflict".to_string(),
            });
        }
        let created = Zone {
            kind: new_zone.kind,
            masters: new_zone.masters.clone(),
            ..zone(&new_zone.name)
        };
        zones.insert(new_zone.name.clone(), created.clone());
        Ok(created)
    }

    async fn delete(&self, zone: &str) -> Result<()> {
        self.zones
            .write()
            .await
            .remove(zone)
            .map(|_| ())
            .ok_or_else(|| not_found(zone))
    }

    async fn add_record_set(&self, zone: &str, rrset: &ResourceRecordSet) -> Result<()> {
        self.record_patch(zone, rrset).await
    }

    async fn delete_record_set(&self, zone: &str, rrset: &ResourceRecordSet) -> Result<()> {
        self.record_patch(zone, rrset).await
    }
}

// ===== MockForwardZonesApi =====

pub struct MockForwardZonesApi {
    zones: RwLock<Vec<ForwardZone>>,
}

impl MockForwardZonesApi {
    pub fn with_zones(zones: Vec<ForwardZone>) -> Self {
        Self {
            zones: RwLock::new(zones),
        }
    }

    pub async fn names(&self) -> Vec<String> {
        self.zones
            .read()
            .await
            .iter()
            .map(|z| z.name.clone())
            .collect()
    }
}

#[async_trait]
impl ForwardZonesApi for MockForwardZonesApi {
    async fn list(&self) -> Result<Vec<ForwardZone>> {
        Ok(self.zones.read().await.clone())
    }

    async fn add(&self, zone: &ForwardZone) -> Result<()> {
        self.zones.write().await.push(zone.clone());
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<()> {
        let mut zones = self.zones.write().await;
        let before = zones.len();
        zones.retain(|z| z.name != name);
        if zones.len() == before {
            return Err(not_found(name));
        }
        Ok(())
    }
}

// ===== MockSearchApi =====

/// Returns canned results and remembers the queries it was asked.
pub struct MockSearchApi {
    results: SearchResults,
    queries: RwLock<Vec<(String, u32, ObjectType)>>,
}

impl MockSearchApi {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results: SearchResults(results),
            queries: RwLock::new(Vec::new()),
        }
    }

    pub async fn queries(&self) -> Vec<(String, u32, ObjectType)> {
        self.queries.read().await.clone()
    }
}

#[async_trait]
impl SearchApi for MockSearchApi {
    async fn search(&self, query: &str, max: u32, object_type: ObjectType) -> Result<SearchResults> {
        self.queries
            .write()
            .await
            .push((query.to_string(), max, object_type));
        let limit = usize::try_from(max).unwrap_or(usize::MAX);
        Ok(SearchResults(
            self.results.iter().take(limit).cloned().collect(),
        ))
    }
}

// ===== MockServerApi =====

pub struct MockServerApi {
    pub info: ServerInfo,
}

#[async_trait]
impl ServerApi for MockServerApi {
    async fn info(&self) -> Result<ServerInfo> {
        Ok(self.info.clone())
    }
}
