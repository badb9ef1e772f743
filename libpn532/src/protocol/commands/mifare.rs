// libpn532/src/protocol/commands/mifare.rs

use crate::constants::{MIFARE_CMD_READ, MIFARE_CMD_WRITE, PN532_CMD_IN_DATA_EXCHANGE};
use crate::types::{KeyType, TargetId};

/// Encode an InDataExchange (0x40) MIFARE authentication payload.
/// Layout: 40 Tg (60|61) block key(6) id(4, big-endian)
pub fn encode_authenticate(
    target: u8,
    key_type: KeyType,
    block: u8,
    key: &[u8; 6],
    id: TargetId,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(14);
    buf.push(PN532_CMD_IN_DATA_EXCHANGE);
    buf.push(target);
    buf.push(key_type as u8);
    buf.push(block);
    buf.extend_from_slice(key);
    buf.extend_from_slice(&id.to_be_bytes());
    buf
}

/// Encode an InDataExchange MIFARE READ (0x30) payload. The tag replies
/// with 16 bytes regardless of its block size.
pub fn encode_read(target: u8, block: u8) -> Vec<u8> {
    vec![PN532_CMD_IN_DATA_EXCHANGE, target, MIFARE_CMD_READ, block]
}

/// Encode an InDataExchange MIFARE WRITE (0xA0) payload carrying `data`
/// verbatim.
pub fn encode_write(target: u8, block: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + data.len());
    buf.extend_from_slice(&[PN532_CMD_IN_DATA_EXCHANGE, target, MIFARE_CMD_WRITE, block]);
    buf.extend_from_slice(data);
    buf
}
