// libpn532/src/protocol/commands/passive.rs

use crate::constants::PN532_CMD_IN_LIST_PASSIVE_TARGET;
use crate::types::BaudRate;

/// Clamp the requested target count to what the chip accepts: anything
/// other than 2 becomes 1, and Jewel tags only support a single target.
pub fn normalize_max_targets(max_targets: u8, baud_rate: BaudRate) -> u8 {
    if baud_rate == BaudRate::Jewel106 || max_targets != 2 {
        1
    } else {
        2
    }
}

/// Encode InListPassiveTarget (0x4A) payload
pub fn encode_in_list_passive_target(max_targets: u8, baud_rate: BaudRate) -> Vec<u8> {
    vec![
        PN532_CMD_IN_LIST_PASSIVE_TARGET,
        normalize_max_targets(max_targets, baud_rate),
        baud_rate as u8,
    ]
}
