// libpn532/src/protocol/commands/peer.rs

//! Peer-to-peer (DEP) command payloads. These use the same frame
//! transport as every other command; only the payload layouts differ.

use crate::constants::{
    PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_IN_JUMP_FOR_DEP, PN532_CMD_TG_GET_DATA,
    PN532_CMD_TG_INIT_AS_TARGET, PN532_CMD_TG_SET_DATA, PN532_P2P_CHUNK_LEN,
};
use crate::types::DepBaudRate;

/// Parameters of a TgInitAsTarget command. `Default` yields the values
/// the driver has always used when emulating a DEP target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetModeParams {
    pub mode: u8,
    pub sens_res: [u8; 2],
    pub nfcid1: [u8; 3],
    pub sel_res: u8,
    pub nfcid2: [u8; 8],
    pub pad: [u8; 8],
    pub system_code: [u8; 2],
    pub nfcid3: [u8; 10],
}

impl Default for TargetModeParams {
    fn default() -> Self {
        Self {
            mode: 0x00,
            sens_res: [0x08, 0x00],
            nfcid1: [0x12, 0x34, 0x56],
            sel_res: 0x40,
            nfcid2: [0x01, 0xFE, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7],
            pad: [0xC0, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7],
            system_code: [0xFF, 0xFF],
            nfcid3: [0xAA, 0x99, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11],
        }
    }
}

/// Encode TgInitAsTarget (0x8C). No general or historical bytes are sent.
pub fn encode_tg_init_as_target(params: &TargetModeParams) -> Vec<u8> {
    let mut buf = Vec::with_capacity(38);
    buf.push(PN532_CMD_TG_INIT_AS_TARGET);
    buf.push(params.mode);
    buf.extend_from_slice(&params.sens_res);
    buf.extend_from_slice(&params.nfcid1);
    buf.push(params.sel_res);
    buf.extend_from_slice(&params.nfcid2);
    buf.extend_from_slice(&params.pad);
    buf.extend_from_slice(&params.system_code);
    buf.extend_from_slice(&params.nfcid3);
    buf.push(0x00); // general bytes length
    buf.push(0x00); // historical bytes length
    buf
}

/// Encode InJumpForDEP (0x56) in active mode with a 212/424 kbps
/// polling request as passive initiator data.
pub fn encode_in_jump_for_dep(baud_rate: DepBaudRate) -> Vec<u8> {
    vec![
        PN532_CMD_IN_JUMP_FOR_DEP,
        0x01, // active mode
        baud_rate as u8,
        0x01, // passive initiator data present
        0x00,
        0xFF,
        0xFF,
        0x00,
        0x00,
    ]
}

/// Encode an initiator-side InDataExchange (0x40) for logical target 1.
pub fn encode_initiator_exchange(data: &[u8; PN532_P2P_CHUNK_LEN]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + PN532_P2P_CHUNK_LEN);
    buf.push(PN532_CMD_IN_DATA_EXCHANGE);
    buf.push(0x01);
    buf.extend_from_slice(data);
    buf
}

/// Encode TgGetData (0x86).
pub fn encode_tg_get_data() -> Vec<u8> {
    vec![PN532_CMD_TG_GET_DATA]
}

/// Encode TgSetData (0x8E).
pub fn encode_tg_set_data(data: &[u8; PN532_P2P_CHUNK_LEN]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + PN532_P2P_CHUNK_LEN);
    buf.push(PN532_CMD_TG_SET_DATA);
    buf.extend_from_slice(data);
    buf
}
