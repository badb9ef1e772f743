// libpn532/src/protocol/responses/mod.rs

pub mod mifare;
pub mod passive;
pub mod peer;
pub mod system;

pub use mifare::{decode_exchange_status, decode_read_block};
pub use passive::decode_in_list_passive_target;
pub use peer::{
    decode_in_jump_for_dep, decode_initiator_exchange, decode_tg_get_data,
    decode_tg_init_as_target, decode_tg_set_data,
};
pub use system::{decode_firmware_version, decode_sam_configuration};

use crate::constants::PN532_P2P_CHUNK_LEN;
use crate::protocol::commands::Command;
use crate::types::{BlockData, FirmwareVersion, PassiveTarget};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    FirmwareVersion(FirmwareVersion),
    SamConfigured,
    PassiveTarget(PassiveTarget),
    Authenticated,
    Block(BlockData),
    Written,
    DepLinked,
    InitiatorData([u8; PN532_P2P_CHUNK_LEN]),
    TargetActivated,
    TargetData([u8; PN532_P2P_CHUNK_LEN]),
    TargetDataSent,
}

impl Response {
    /// Decode the raw bytes read after `cmd` was acknowledged. Offsets are
    /// positional and command-specific; see the individual decoders.
    pub fn decode(cmd: &Command, data: &[u8]) -> crate::Result<Self> {
        crate::protocol::parser::ensure_len(data, cmd.response_len())?;

        match cmd {
            Command::GetFirmwareVersion => decode_firmware_version(data).map(Self::FirmwareVersion),
            Command::SamConfiguration { .. } => {
                decode_sam_configuration(data).map(|_| Self::SamConfigured)
            }
            Command::InListPassiveTarget { .. } => {
                decode_in_list_passive_target(data).map(Self::PassiveTarget)
            }
            Command::Authenticate { .. } => decode_exchange_status(data).map(|_| Self::Authenticated),
            Command::ReadBlock { .. } => decode_read_block(data).map(Self::Block),
            Command::WriteBlock { .. } => decode_exchange_status(data).map(|_| Self::Written),
            Command::InJumpForDep { .. } => decode_in_jump_for_dep(data).map(|_| Self::DepLinked),
            Command::InitiatorExchange { .. } => {
                decode_initiator_exchange(data).map(Self::InitiatorData)
            }
            Command::TgInitAsTarget { .. } => {
                decode_tg_init_as_target(data).map(|_| Self::TargetActivated)
            }
            Command::TgGetData => decode_tg_get_data(data).map(Self::TargetData),
            Command::TgSetData { .. } => decode_tg_set_data(data).map(|_| Self::TargetDataSent),
        }
    }
}
