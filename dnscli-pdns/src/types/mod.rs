//! PowerDNS domain model

pub mod name;
pub mod record;
pub mod search;
pub mod server;
pub mod zone;

pub use name::{canonicalize, de_canonicalize, is_valid_domain};
pub use record::{ChangeType, Comment, Record, RecordSetRequest, ResourceRecordSet, ZoneRecordSet};
pub use search::{ObjectType, SearchResult, SearchResults};
pub use server::ServerInfo;
pub use zone::{ForwardZone, NewZone, Zone, ZoneKind};
