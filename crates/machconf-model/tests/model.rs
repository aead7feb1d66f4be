//! Tests for machconf-model types.

use machconf_model::{IdValue, MachineConfig, ServerConfiguration, ValidationError};

#[test]
fn machine_config_deserializes_sparse_value() {
    let config: MachineConfig = serde_json::from_str(
        r#"{"serverType":"cx11","serverLocation":"fsn1","imageId":"15512617"}"#,
    )
    .expect("deserialize machine config");

    assert_eq!(config.server_type.as_deref(), Some("cx11"));
    assert_eq!(config.server_location.as_deref(), Some("fsn1"));
    assert_eq!(config.image_id, Some(IdValue::Text("15512617".to_string())));
    assert!(config.networks.is_empty());
    assert!(config.server_label.is_none());
}

#[test]
fn id_value_accepts_string_or_number() {
    let config: MachineConfig =
        serde_json::from_str(r#"{"imageId":15512617,"networks":["1",2]}"#)
            .expect("deserialize mixed ids");

    assert_eq!(config.image_id, Some(IdValue::Num(15512617)));
    assert_eq!(
        config.networks,
        vec![IdValue::Text("1".to_string()), IdValue::Num(2)]
    );
}

#[test]
fn machine_config_serializes_camel_case() {
    let config = MachineConfig {
        user_data_from_file: Some(true),
        disable_public: Some(false),
        ..MachineConfig::default()
    };

    let json = serde_json::to_value(&config).expect("serialize machine config");
    assert_eq!(json["userDataFromFile"], serde_json::json!(true));
    assert_eq!(json["disablePublic"], serde_json::json!(false));
}

#[test]
fn server_configuration_defaults_are_empty() {
    let config = ServerConfiguration::default();

    assert!(!config.use_private_network);
    assert!(!config.disable_public_network);
    assert!(config.network_ids.is_empty());
    assert!(config.firewall_ids.is_empty());
    assert!(config.server_labels.is_empty());
    assert!(config.server_image.is_none());
    assert!(config.additional_user_data.is_empty());
}

#[test]
fn validation_error_round_trips() {
    let error = ValidationError::new("serverLocation", "Location is required");
    let json = serde_json::to_string(&error).expect("serialize error");
    let round: ValidationError = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(round, error);
    assert_eq!(round.field, "serverLocation");
}
