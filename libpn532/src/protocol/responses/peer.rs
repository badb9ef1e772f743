// libpn532/src/protocol/responses/peer.rs

use crate::constants::{PN532_ACK_TG_GET_DATA, PN532_ACK_TG_SET_DATA, PN532_P2P_CHUNK_LEN};
use crate::protocol::parser;
use crate::Result;

fn chunk_at(data: &[u8], offset: usize) -> Result<[u8; PN532_P2P_CHUNK_LEN]> {
    let s = parser::slice_at(data, offset, PN532_P2P_CHUNK_LEN)?;
    let mut out = [0u8; PN532_P2P_CHUNK_LEN];
    out.copy_from_slice(s);
    Ok(out)
}

/// Decode an InJumpForDEP reply (25 bytes read). Only the status byte
/// is checked.
pub fn decode_in_jump_for_dep(data: &[u8]) -> Result<()> {
    parser::expect_status_at(data, parser::STATUS_OFFSET)
}

/// Decode an initiator InDataExchange reply (24 bytes read).
pub fn decode_initiator_exchange(data: &[u8]) -> Result<[u8; PN532_P2P_CHUNK_LEN]> {
    parser::expect_data_exchange_ok(data)?;
    chunk_at(data, parser::DATA_OFFSET)
}

/// Decode a TgInitAsTarget reply (24 bytes read). Success is signalled
/// by a zero in the last byte read.
pub fn decode_tg_init_as_target(data: &[u8]) -> Result<()> {
    parser::expect_status_at(data, 23)
}

/// Decode a TgGetData reply (24 bytes read).
pub fn decode_tg_get_data(data: &[u8]) -> Result<[u8; PN532_P2P_CHUNK_LEN]> {
    parser::expect_exchange_ok(data, PN532_ACK_TG_GET_DATA)?;
    chunk_at(data, parser::DATA_OFFSET)
}

/// Decode a TgSetData reply (8 bytes read).
pub fn decode_tg_set_data(data: &[u8]) -> Result<()> {
    parser::expect_exchange_ok(data, PN532_ACK_TG_SET_DATA)
}
