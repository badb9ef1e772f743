// libpn532/src/device/config.rs

use crate::types::{BaudRate, SamMode};
use crate::utils::timeout::{
    BYTE_DELAY_MS, DEFAULT_HANDSHAKE_TIMEOUT_MS, POLL_INTERVAL_MS, SETTLE_DELAY_MS,
};

/// Driver timing and command defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Pn532Config {
    /// Ready-wait limit for each handshake step. Zero waits forever.
    pub handshake_timeout_ms: u64,
    pub poll_interval_ms: u64,
    pub settle_delay_ms: u64,
    pub byte_delay_ms: u64,
    pub sam_mode: SamMode,
    /// SAM timeout in units of 50 ms.
    pub sam_timeout: u8,
    pub sam_use_irq: bool,
    /// Modulation used for passive discovery once a tag family is selected.
    pub baud_rate: BaudRate,
    pub max_targets: u8,
}

impl Default for Pn532Config {
    fn default() -> Self {
        Self {
            handshake_timeout_ms: DEFAULT_HANDSHAKE_TIMEOUT_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
            settle_delay_ms: SETTLE_DELAY_MS,
            byte_delay_ms: BYTE_DELAY_MS,
            sam_mode: SamMode::Normal,
            sam_timeout: 0x14,
            sam_use_irq: true,
            baud_rate: BaudRate::Iso14443a106,
            max_targets: 2,
        }
    }
}
