//! The typed working configuration behind the editing surface.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The working server configuration: numeric identifiers, plain booleans,
/// and a key-value label map.
///
/// Exclusively owned by the sync engine. The editing surface reads it
/// directly and mutates it through the engine's edit entry point; the engine
/// itself overwrites it during inbound sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfiguration {
    pub disable_public_network: bool,
    pub disable_public_ipv4: bool,
    pub disable_public_ipv6: bool,
    pub use_private_network: bool,

    pub ssh_key_id: Option<i64>,
    /// Firewall identifiers. An element that failed numeric conversion stays
    /// `None` so list positions survive a round trip.
    pub firewall_ids: Vec<Option<i64>>,
    /// Network identifiers, same element-level absence rule as firewalls.
    pub network_ids: Vec<Option<i64>>,
    pub placement_group_id: Option<i64>,

    pub server_image: Option<i64>,
    pub server_type: Option<String>,
    pub server_location: Option<String>,

    pub additional_user_data: String,

    /// Labels keyed uniquely; iteration order is the map's sorted order and
    /// decides how labels are rendered outbound.
    pub server_labels: BTreeMap<String, String>,
}
