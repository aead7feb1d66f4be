//! Field-by-field mapping between the two representations.

use machconf_model::{MachineConfig, ServerConfiguration, convert};

/// Copy the external value into the working configuration.
///
/// Best-effort: malformed identifiers land as absent, missing booleans as
/// false, a missing label list as an empty map.
pub(crate) fn apply_inbound(external: &MachineConfig, config: &mut ServerConfiguration) {
    config.server_type = external.server_type.clone();
    config.server_location = external.server_location.clone();
    config.server_image = convert::id_to_number(external.image_id.as_ref());
    config.placement_group_id = convert::id_to_number(external.placement_group.as_ref());
    config.network_ids = convert::ids_to_numbers(&external.networks);
    config.firewall_ids = convert::ids_to_numbers(&external.firewalls);
    config.ssh_key_id = convert::id_to_number(external.existing_key_id.as_ref());

    config.use_private_network = external.use_private_network.unwrap_or(false);
    config.disable_public_network = external.disable_public.unwrap_or(false);
    config.disable_public_ipv4 = external.disable_public_ipv4.unwrap_or(false);
    config.disable_public_ipv6 = external.disable_public_ipv6.unwrap_or(false);

    config.additional_user_data = external.additional_user_data.clone().unwrap_or_default();
    config.server_labels =
        convert::labels_from_encoded(external.server_label.as_deref().unwrap_or(&[]));
}

/// Render the working configuration into the external value.
///
/// Identifiers go out in string form. The coarse public-network flag wins
/// over the fine-grained ones, and `user_data_from_file` is always written
/// true so the host sources user data from the inline field.
pub(crate) fn render_outbound(config: &ServerConfiguration, external: &mut MachineConfig) {
    external.server_type = config.server_type.clone();
    external.server_location = config.server_location.clone();
    external.image_id = convert::number_to_id(config.server_image);
    external.placement_group = convert::number_to_id(config.placement_group_id);
    external.networks = convert::numbers_to_ids(&config.network_ids);
    external.firewalls = convert::numbers_to_ids(&config.firewall_ids);
    external.existing_key_id = convert::number_to_id(config.ssh_key_id);

    external.use_private_network = Some(config.use_private_network);
    if config.disable_public_network {
        external.disable_public = Some(true);
        external.disable_public_ipv4 = Some(false);
        external.disable_public_ipv6 = Some(false);
    } else {
        external.disable_public = Some(false);
        external.disable_public_ipv4 = Some(config.disable_public_ipv4);
        external.disable_public_ipv6 = Some(config.disable_public_ipv6);
    }

    external.additional_user_data = Some(config.additional_user_data.clone());
    external.user_data_from_file = Some(true);
    external.server_label = Some(convert::labels_to_encoded(&config.server_labels));
}
