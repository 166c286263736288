//! Search result types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PdnsError;

// ============ ObjectType ============

/// Object type a search is restricted to, and the kind of object a search
/// result refers to.
///
/// On the wire the type is a small integer (1-4); 0 is reserved. The list is
/// exhaustive according to the PowerDNS documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectType {
    #[default]
    All,
    Zone,
    Record,
    Comment,
}

impl ObjectType {
    /// Numeric wire code.
    pub fn code(self) -> u8 {
        match self {
            Self::All => 1,
            Self::Zone => 2,
            Self::Record => 3,
            Self::Comment => 4,
        }
    }

    /// Name used for display and for the `object_type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Zone => "zone",
            Self::Record => "record",
            Self::Comment => "comment",
        }
    }
}

impl TryFrom<u8> for ObjectType {
    type Error = PdnsError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::All),
            2 => Ok(Self::Zone),
            3 => Ok(Self::Record),
            4 => Ok(Self::Comment),
            other => Err(PdnsError::UnknownObjectType(other.to_string())),
        }
    }
}

impl FromStr for ObjectType {
    type Err = PdnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "zone" => Ok(Self::Zone),
            "record" => Ok(Self::Record),
            "comment" => Ok(Self::Comment),
            _ => Err(PdnsError::UnknownObjectType(s.to_string())),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ObjectType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ObjectType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Decode as i64 first so out-of-range values keep their raw form in the error.
        let raw = i64::deserialize(deserializer)?;
        u8::try_from(raw)
            .map_err(|_| PdnsError::UnknownObjectType(raw.to_string()))
            .and_then(Self::try_from)
            .map_err(serde::de::Error::custom)
    }
}

// ============ SearchResult ============

/// A single match returned by `search-data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub disabled: bool,
    pub name: String,
    pub object_type: ObjectType,
    #[serde(default)]
    pub zone_id: String,
    #[serde(default)]
    pub zone: String,
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub ttl: u32,
}

/// Search results in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResults(pub Vec<SearchResult>);

impl SearchResults {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult> {
        self.0.iter()
    }

    /// Results ordered by `content` ascending. The underlying order is left untouched.
    pub fn sorted_by_content(&self) -> Vec<&SearchResult> {
        let mut sorted: Vec<&SearchResult> = self.0.iter().collect();
        sorted.sort_by(|a, b| a.content.cmp(&b.content));
        sorted
    }
}

impl From<Vec<SearchResult>> for SearchResults {
    fn from(results: Vec<SearchResult>) -> Self {
        Self(results)
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a SearchResult;
    type IntoIter = std::slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
