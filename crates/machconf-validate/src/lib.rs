#![deny(unsafe_code)]

//! Validation pass over the working server configuration.
//!
//! A pure function from configuration to an ordered error sequence,
//! recomputed in full on every pass. The configuration is valid iff the
//! sequence is empty. Errors never throw and never block editing; they only
//! gate outward propagation.

mod checks;

use machconf_model::{ServerConfiguration, ValidationError};

/// Run every check on the configuration, in declaration order.
pub fn validate(config: &ServerConfiguration) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // 1. Required fields (location, server type, image)
    errors.extend(checks::required::check(config));

    // 2. Public/private network consistency
    errors.extend(checks::network::check(config));

    errors
}

/// True when [`validate`] would return no errors.
pub fn is_valid(config: &ServerConfiguration) -> bool {
    validate(config).is_empty()
}
