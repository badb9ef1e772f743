// libpn532/src/prelude.rs

pub use crate::device::{Pn532, Pn532Builder, Pn532Config, Session};
pub use crate::protocol::{Command, Frame, Response, TargetModeParams};
pub use crate::transport::{MockTransport, Transport};
#[cfg(feature = "hal")]
pub use crate::transport::HalTransport;
pub use crate::{
    BaudRate, BlockData, DepBaudRate, Error, FirmwareVersion, KeyType, Nfcid, PassiveTarget,
    Result, SamMode, TagFamily, TargetId,
};

// Re-export small utilities for convenience
pub use crate::utils::{HexDump, bytes_to_hex, bytes_to_hex_spaced, parse_hex};
