//! One client per PowerDNS API sub-resource

mod forward_zones;
mod search;
mod servers;
mod zones;

pub use forward_zones::ForwardZonesClient;
pub use search::SearchClient;
pub use servers::ServersClient;
pub use zones::ZonesClient;
