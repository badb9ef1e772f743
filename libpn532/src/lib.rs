// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust driver for the NXP PN532 NFC controller on an SPI bus:
//! command framing, the ACK handshake, ready polling and positional reply
//! decoding, with a small command layer for MIFARE/NTAG block access and
//! peer-to-peer exchange on top.

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
