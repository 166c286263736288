//! Resource record sets and the builder that assembles them from CLI input

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PdnsError, Result};
use crate::types::name::{canonicalize, de_canonicalize};

/// Record types whose owner name and zone are sent in canonical form.
const NAME_BEARING_TYPES: &[&str] = &["A", "AAAA", "NS", "CNAME", "DNAME"];

/// Record types whose content is itself a domain name.
const NAME_CONTENT_TYPES: &[&str] = &["CNAME", "NS"];

/// Name that addresses the zone apex.
const APEX: &str = "@";

// ============ Wire types ============

/// Change applied to a record set in a zone PATCH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    Replace,
    Delete,
}

/// A single value within a record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub content: String,
    #[serde(default)]
    pub disabled: bool,
    /// Ask the server to create the matching PTR record (A/AAAA only).
    #[serde(rename = "set-ptr", default, skip_serializing_if = "is_false")]
    pub set_ptr: bool,
    /// Fields this client does not model, kept so JSON output mirrors the API.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

/// Comment attached to a record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub modified_at: u64,
}

/// All records sharing one name and type within a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecordSet {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changetype: Option<ChangeType>,
    #[serde(default)]
    pub records: Vec<Record>,
    /// Absent in PATCH bodies, where an empty list would wipe existing comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// PATCH body for `/zones/{zone}`.
#[derive(Debug, Serialize)]
pub(crate) struct RecordSetPatch<'a> {
    pub rrsets: [&'a ResourceRecordSet; 1],
}

// ============ Builder ============

/// Operator input for a record-set change.
///
/// `name` is relative to `zone` (`host`, not `host.example.com`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSetRequest {
    pub zone: String,
    pub name: String,
    pub record_type: String,
    pub ttl: u32,
    /// Comma separated list of values.
    pub content: String,
    pub set_ptr: bool,
}

/// A record set ready to be sent, together with the zone it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecordSet {
    /// Zone id to address in the URL.
    pub zone: String,
    pub rrset: ResourceRecordSet,
}

impl RecordSetRequest {
    /// Builds a `REPLACE` record set.
    ///
    /// The set replaces every existing record with the same name and type;
    /// values are not merged with what the server already has.
    pub fn build_replace(&self) -> Result<ZoneRecordSet> {
        let (zone, name, record_type) = qualify(&self.zone, &self.name, &self.record_type)?;
        let records = split_content(&self.content, &record_type)
            .into_iter()
            .map(|content| Record {
                content,
                disabled: false,
                set_ptr: self.set_ptr,
                extra: Map::new(),
            })
            .collect::<Vec<_>>();

        if records.is_empty() {
            return Err(PdnsError::InvalidParameter {
                param: "content".to_string(),
                detail: "at least one value is required".to_string(),
            });
        }

        Ok(ZoneRecordSet {
            zone,
            rrset: ResourceRecordSet {
                name: canonicalize(&name),
                record_type,
                ttl: self.ttl,
                changetype: Some(ChangeType::Replace),
                records,
                comments: None,
                extra: Map::new(),
            },
        })
    }

    /// Builds a `DELETE` record set for `name`/`record_type` in `zone`.
    pub fn build_delete(zone: &str, name: &str, record_type: &str) -> Result<ZoneRecordSet> {
        let (zone, name, record_type) = qualify(zone, name, record_type)?;
        Ok(ZoneRecordSet {
            zone,
            rrset: ResourceRecordSet {
                name: canonicalize(&name),
                record_type,
                ttl: 0,
                changetype: Some(ChangeType::Delete),
                records: Vec::new(),
                comments: None,
                extra: Map::new(),
            },
        })
    }
}

/// Applies the naming rules shared by replace and delete.
///
/// Returns `(zone, fully qualified name, upper-cased type)`.
fn qualify(zone: &str, name: &str, record_type: &str) -> Result<(String, String, String)> {
    let record_type = record_type.trim().to_uppercase();
    let bare_zone = de_canonicalize(zone.trim());
    let bare_name = de_canonicalize(name.trim());

    if bare_zone.is_empty() {
        return Err(PdnsError::InvalidParameter {
            param: "zone".to_string(),
            detail: "zone must not be empty".to_string(),
        });
    }
    if bare_name.is_empty() {
        return Err(PdnsError::InvalidParameter {
            param: "name".to_string(),
            detail: "name must not be empty".to_string(),
        });
    }

    let apex = bare_name == APEX || (record_type == "SOA" && bare_name == bare_zone);
    let fqdn = if apex {
        bare_zone.clone()
    } else if bare_name.contains(&bare_zone) {
        return Err(PdnsError::InvalidParameter {
            param: "name".to_string(),
            detail: format!("name ({bare_name}) must not be a FQDN. Without domain {bare_zone}"),
        });
    } else {
        format!("{bare_name}.{bare_zone}")
    };

    if NAME_BEARING_TYPES.contains(&record_type.as_str()) {
        Ok((canonicalize(&bare_zone), canonicalize(&fqdn), record_type))
    } else {
        Ok((bare_zone, fqdn, record_type))
    }
}

/// Splits a comma separated value list, trimming each value.
fn split_content(content: &str, record_type: &str) -> Vec<String> {
    let canonical = NAME_CONTENT_TYPES.contains(&record_type);
    content
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            if canonical {
                canonicalize(value)
            } else {
                value.to_string()
            }
        })
        .collect()
}
