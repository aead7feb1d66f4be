//! Required field checks.
//!
//! A server cannot be provisioned without a location, a server type, and an
//! image.

use machconf_model::{ServerConfiguration, ValidationError};

/// Check that every required field is populated.
pub fn check(config: &ServerConfiguration) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.server_location.as_deref().is_none_or(str::is_empty) {
        errors.push(ValidationError::new(
            "serverLocation",
            "Location is required",
        ));
    }

    if config.server_type.as_deref().is_none_or(str::is_empty) {
        errors.push(ValidationError::new("serverType", "Server type is required"));
    }

    // Zero is the unset sentinel some hosts send for the image id.
    if config.server_image.unwrap_or(0) == 0 {
        errors.push(ValidationError::new("serverImage", "Image is required"));
    }

    errors
}
