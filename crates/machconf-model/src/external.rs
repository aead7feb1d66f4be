//! The flat machine configuration value owned by the host container.

use serde::{Deserialize, Serialize};

/// An identifier as the host carries it: an already-typed number or the
/// string form of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Num(i64),
    Text(String),
}

impl IdValue {
    /// Numeric form of the identifier.
    ///
    /// Non-numeric text yields `None`: a malformed identifier is treated as
    /// absent, never stored as a poisoned number.
    pub fn to_number(&self) -> Option<i64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Text(s) => s.parse().ok(),
        }
    }
}

impl From<i64> for IdValue {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<&str> for IdValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for IdValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The machine configuration as the host container holds it.
///
/// Primitive fields, string-or-number identifiers, labels encoded as
/// `key=value` strings. Every field is defaulted so a sparse host value
/// deserializes cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineConfig {
    pub server_type: Option<String>,
    pub server_location: Option<String>,
    pub image_id: Option<IdValue>,
    pub placement_group: Option<IdValue>,
    pub networks: Vec<IdValue>,
    pub firewalls: Vec<IdValue>,
    pub existing_key_id: Option<IdValue>,
    pub use_private_network: Option<bool>,
    pub disable_public: Option<bool>,
    pub disable_public_ipv4: Option<bool>,
    pub disable_public_ipv6: Option<bool>,
    pub additional_user_data: Option<String>,
    /// Always written `true` by the engine: tells the host to source user
    /// data from the inline field.
    pub user_data_from_file: Option<bool>,
    pub server_label: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::IdValue;

    #[test]
    fn numeric_text_parses() {
        assert_eq!(IdValue::from("15512617").to_number(), Some(15512617));
        assert_eq!(IdValue::from(42).to_number(), Some(42));
    }

    #[test]
    fn malformed_text_is_absent() {
        assert_eq!(IdValue::from("not-a-number").to_number(), None);
        assert_eq!(IdValue::from("").to_number(), None);
    }
}
