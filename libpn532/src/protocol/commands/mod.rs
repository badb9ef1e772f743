// libpn532/src/protocol/commands/mod.rs

pub mod mifare;
pub mod passive;
pub mod peer;
pub mod system;

pub use mifare::{encode_authenticate, encode_read, encode_write};
pub use passive::{encode_in_list_passive_target, normalize_max_targets};
pub use peer::{
    TargetModeParams, encode_in_jump_for_dep, encode_initiator_exchange, encode_tg_get_data,
    encode_tg_init_as_target, encode_tg_set_data,
};
pub use system::{encode_get_firmware_version, encode_sam_configuration};

use crate::constants::*;
use crate::types::{BaudRate, DepBaudRate, KeyType, SamMode, TargetId};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    GetFirmwareVersion,
    SamConfiguration {
        mode: SamMode,
        timeout: u8,
        use_irq: bool,
    },
    InListPassiveTarget {
        max_targets: u8,
        baud_rate: BaudRate,
    },
    Authenticate {
        target: u8,
        key_type: KeyType,
        block: u8,
        key: [u8; 6],
        id: TargetId,
    },
    ReadBlock {
        target: u8,
        block: u8,
    },
    WriteBlock {
        target: u8,
        block: u8,
        data: Vec<u8>,
    },
    InJumpForDep {
        baud_rate: DepBaudRate,
    },
    InitiatorExchange {
        data: [u8; PN532_P2P_CHUNK_LEN],
    },
    TgInitAsTarget {
        params: TargetModeParams,
    },
    TgGetData,
    TgSetData {
        data: [u8; PN532_P2P_CHUNK_LEN],
    },
}

impl Command {
    /// Return the PN532 command code (first payload byte).
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => PN532_CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => PN532_CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => PN532_CMD_IN_LIST_PASSIVE_TARGET,
            Self::Authenticate { .. }
            | Self::ReadBlock { .. }
            | Self::WriteBlock { .. }
            | Self::InitiatorExchange { .. } => PN532_CMD_IN_DATA_EXCHANGE,
            Self::InJumpForDep { .. } => PN532_CMD_IN_JUMP_FOR_DEP,
            Self::TgInitAsTarget { .. } => PN532_CMD_TG_INIT_AS_TARGET,
            Self::TgGetData => PN532_CMD_TG_GET_DATA,
            Self::TgSetData { .. } => PN532_CMD_TG_SET_DATA,
        }
    }

    /// Number of bytes to clock out of the chip for this command's reply.
    pub fn response_len(&self) -> usize {
        match self {
            Self::GetFirmwareVersion => 12,
            Self::SamConfiguration { .. } => 8,
            Self::InListPassiveTarget { .. } => 20,
            Self::Authenticate { .. } | Self::WriteBlock { .. } | Self::TgSetData { .. } => 8,
            Self::ReadBlock { .. } | Self::InitiatorExchange { .. } => 24,
            Self::InJumpForDep { .. } => 25,
            Self::TgInitAsTarget { .. } | Self::TgGetData => 24,
        }
    }

    /// Encode the command into the raw payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => encode_in_list_passive_target(*max_targets, *baud_rate),
            Self::Authenticate {
                target,
                key_type,
                block,
                key,
                id,
            } => encode_authenticate(*target, *key_type, *block, key, *id),
            Self::ReadBlock { target, block } => encode_read(*target, *block),
            Self::WriteBlock {
                target,
                block,
                data,
            } => encode_write(*target, *block, &data[..]),
            Self::InJumpForDep { baud_rate } => encode_in_jump_for_dep(*baud_rate),
            Self::InitiatorExchange { data } => encode_initiator_exchange(data),
            Self::TgInitAsTarget { params } => encode_tg_init_as_target(params),
            Self::TgGetData => encode_tg_get_data(),
            Self::TgSetData { data } => encode_tg_set_data(data),
        }
    }
}
