//! Cross-field auto-correction applied after an edit.
//!
//! These rules mutate state silently, they are not validation errors. They
//! run only for edits: a value just received from the host is never fought.

use machconf_model::ServerConfiguration;

/// Trigger fields captured before an edit runs.
pub(crate) struct EditSnapshot {
    use_private_network: bool,
    network_ids: Vec<Option<i64>>,
}

impl EditSnapshot {
    pub(crate) fn capture(config: &ServerConfiguration) -> Self {
        Self {
            use_private_network: config.use_private_network,
            network_ids: config.network_ids.clone(),
        }
    }
}

/// Apply the corrective rules for fields the edit changed.
pub(crate) fn apply(before: &EditSnapshot, config: &mut ServerConfiguration) {
    // With the private network off there is nothing for the public
    // restrictions to stand on.
    if before.use_private_network != config.use_private_network && !config.use_private_network {
        config.disable_public_network = false;
        config.disable_public_ipv4 = false;
        config.disable_public_ipv6 = false;
    }

    // Deselecting every network clears the coarse restriction.
    if before.network_ids != config.network_ids && config.network_ids.is_empty() {
        config.disable_public_network = false;
    }
}
