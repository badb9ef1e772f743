// libpn532/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("chip not ready after {waited_ms} ms")]
    Timeout { waited_ms: u64 },

    #[error("ack frame mismatch: got {actual:02x?}")]
    AckMismatch { actual: [u8; 6] },

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("pn532 error status: {status:#04x}")]
    Status { status: u8 },

    #[error("firmware version reply header mismatch")]
    FirmwareHeaderMismatch,

    #[error("no target found")]
    NoTarget,

    #[error("invalid target count reported: {0}")]
    InvalidTargetCount(u8),

    #[error("block {block} out of range (tag has {blocks} blocks)")]
    BlockOutOfRange { block: u8, blocks: u16 },

    #[error("unrecognized tag family code: {0:#010x}")]
    UnrecognizedFamily(u32),

    #[error("no tag family selected")]
    NotConfigured,

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("bus error: {0}")]
    Bus(String),

    #[error("no transport provided")]
    NoTransport,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// True for failures raised by the chip handshake or reply checks.
    /// These end the current command; the caller decides whether to
    /// issue it again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Error::Timeout { .. }
                | Error::AckMismatch { .. }
                | Error::UnexpectedResponse { .. }
                | Error::Status { .. }
                | Error::FirmwareHeaderMismatch
                | Error::InvalidTargetCount(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
