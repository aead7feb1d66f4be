//! Public/private network consistency checks.

use machconf_model::{ServerConfiguration, ValidationError};

/// Check that the network flags form a provisionable combination.
pub fn check(config: &ServerConfiguration) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let restricts_public = config.disable_public_network
        || config.disable_public_ipv4
        || config.disable_public_ipv6;

    if restricts_public && !config.use_private_network {
        errors.push(ValidationError::new(
            "network",
            "Private network must be enabled when disabling public network access",
        ));
    }

    if config.use_private_network && config.network_ids.is_empty() {
        errors.push(ValidationError::new(
            "networkIds",
            "At least one network must be selected when using private network",
        ));
    }

    errors
}
