// libpn532/src/protocol/responses/system.rs

use crate::constants::{PN532_ACK_SAM_CONFIGURATION, PN532_FIRMWARE_RESPONSE_HEADER};
use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::{Error, Result};

/// Decode a GetFirmwareVersion reply (12 bytes read).
/// Layout: header(6) = 00 FF 06 FA D5 03, then IC Ver Rev Support
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    let header = parser::slice_at(data, 0, PN532_FIRMWARE_RESPONSE_HEADER.len())?;
    if header != PN532_FIRMWARE_RESPONSE_HEADER {
        return Err(Error::FirmwareHeaderMismatch);
    }

    let v = parser::slice_at(data, 6, 4)?;
    Ok(FirmwareVersion::from_bytes([v[0], v[1], v[2], v[3]]))
}

/// Decode a SAMConfiguration reply (8 bytes read). The response code
/// 0x15 sits at offset 5 in this reply.
pub fn decode_sam_configuration(data: &[u8]) -> Result<()> {
    parser::expect_code_at(data, 5, PN532_ACK_SAM_CONFIGURATION)
}
