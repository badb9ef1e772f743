// libpn532/src/protocol/commands/system.rs

use crate::constants::{PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_SAM_CONFIGURATION};
use crate::types::SamMode;

/// Encode GetFirmwareVersion (0x02). No parameters.
pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![PN532_CMD_GET_FIRMWARE_VERSION]
}

/// Encode SAMConfiguration (0x14).
/// `timeout` is in units of 50 ms and only matters in virtual card mode.
pub fn encode_sam_configuration(mode: SamMode, timeout: u8, use_irq: bool) -> Vec<u8> {
    vec![
        PN532_CMD_SAM_CONFIGURATION,
        mode as u8,
        timeout,
        use_irq as u8,
    ]
}
