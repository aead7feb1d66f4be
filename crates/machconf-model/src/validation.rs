//! Validation findings surfaced to the editing surface.

use serde::{Deserialize, Serialize};

/// A validation finding for a single form field.
///
/// `field` is the editing surface's field key (camelCase), `message` the
/// human-readable description shown next to it. Findings are recomputed in
/// full on every validation pass, in rule declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
